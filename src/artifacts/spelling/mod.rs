//! Typo correction for subcommand names
//!
//! A small edit-distance corrector in the style of Peter Norvig's
//! "How to Write a Spelling Corrector": a word is corrected to the known words
//! reachable by one edit, or failing that by two edits.

use std::collections::{BTreeSet, HashMap, HashSet};

/// Word frequencies with an explicit default for absent words
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Frequency reported for words never seen
    pub const DEFAULT_FREQUENCY: usize = 1;

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for word in words {
            table.record(word);
        }
        table
    }

    pub fn record(&mut self, word: impl Into<String>) {
        *self
            .counts
            .entry(word.into())
            .or_insert(Self::DEFAULT_FREQUENCY) += 1;
    }

    /// Looking a word up never inserts it.
    pub fn frequency(&self, word: &str) -> usize {
        self.counts
            .get(word)
            .copied()
            .unwrap_or(Self::DEFAULT_FREQUENCY)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct SpellCorrector {
    vocabulary: FrequencyTable,
}

impl SpellCorrector {
    const ALPHABET: &'static str = "abcdefghijklmnopqrstuvwxyz";

    pub fn new(vocabulary: FrequencyTable) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &FrequencyTable {
        &self.vocabulary
    }

    /// Candidate corrections, sorted.
    ///
    /// The word itself if known, else the known words one edit away, else the
    /// known words two edits away. Empty when nothing is close enough.
    pub fn correct(&self, word: &str) -> BTreeSet<String> {
        if self.vocabulary.contains(word) {
            return BTreeSet::from([word.to_string()]);
        }

        let one_edit = Self::edits1(word);
        let known = self.known(one_edit.iter());
        if !known.is_empty() {
            return known;
        }

        self.known_edits2(&one_edit)
    }

    fn known<'a>(&self, words: impl Iterator<Item = &'a String>) -> BTreeSet<String> {
        words
            .filter(|word| self.vocabulary.contains(word))
            .cloned()
            .collect()
    }

    fn known_edits2(&self, one_edit: &HashSet<String>) -> BTreeSet<String> {
        one_edit
            .iter()
            .flat_map(|edit| Self::edits1(edit))
            .filter(|word| self.vocabulary.contains(word))
            .collect()
    }

    /// Every string one deletion, transposition, replacement or insertion away.
    fn edits1(word: &str) -> HashSet<String> {
        let chars = word.chars().collect::<Vec<_>>();
        let mut edits = HashSet::new();

        for split in 0..=chars.len() {
            let (head, tail) = chars.split_at(split);
            let head = head.iter().collect::<String>();

            if let Some((first, rest)) = tail.split_first() {
                let rest = rest.iter().collect::<String>();

                // deletion
                edits.insert(format!("{head}{rest}"));

                // transposition
                if let Some((second, rest_after)) = tail[1..].split_first() {
                    let rest_after = rest_after.iter().collect::<String>();
                    edits.insert(format!("{head}{second}{first}{rest_after}"));
                }

                // replacement
                for c in Self::ALPHABET.chars() {
                    edits.insert(format!("{head}{c}{rest}"));
                }
            }

            // insertion
            let tail = tail.iter().collect::<String>();
            for c in Self::ALPHABET.chars() {
                edits.insert(format!("{head}{c}{tail}"));
            }
        }

        edits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn corrector() -> SpellCorrector {
        SpellCorrector::new(FrequencyTable::from_words([
            "status", "stat", "st", "log", "ls", "list", "update", "up", "commit",
        ]))
    }

    #[test]
    fn absent_words_have_the_default_frequency() {
        let table = FrequencyTable::from_words(["log", "log"]);

        assert_eq!(table.frequency("log"), 3);
        assert_eq!(table.frequency("nope"), FrequencyTable::DEFAULT_FREQUENCY);
        assert!(!table.contains("nope"));
        assert_eq!(table.len(), 1);
    }

    #[rstest]
    #[case("stauts", &["status"])]
    #[case("comit", &["commit"])]
    #[case("updte", &["update"])]
    #[case("log", &["log"])]
    fn corrects_to_nearest_known_words(
        corrector: SpellCorrector,
        #[case] word: &str,
        #[case] expected: &[&str],
    ) {
        let expected = expected.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>();
        assert_eq!(corrector.correct(word), expected);
    }

    #[rstest]
    fn one_edit_candidates_are_all_reported(corrector: SpellCorrector) {
        let candidates = corrector.correct("lg");

        assert!(candidates.contains("log"));
        assert!(candidates.contains("ls"));
        assert!(!candidates.contains("list"));
    }

    #[rstest]
    fn falls_back_to_two_edits(corrector: SpellCorrector) {
        assert_eq!(
            corrector.correct("upate_"),
            BTreeSet::from(["update".to_string()])
        );
    }

    #[rstest]
    fn far_words_have_no_candidates(corrector: SpellCorrector) {
        assert!(corrector.correct("xyzzyplugh").is_empty());
    }

    #[test]
    fn edits1_of_two_letters() {
        let edits = SpellCorrector::edits1("ab");

        assert!(edits.contains("a"));
        assert!(edits.contains("ba"));
        assert!(edits.contains("zb"));
        assert!(edits.contains("abz"));
        assert!(edits.contains("zab"));
    }
}
