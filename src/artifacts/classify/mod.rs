//! Line classifiers
//!
//! Every classifier is a pure function from one line of svn output to the
//! decorated line. Matching is by prefix or pattern only, there is no memory
//! from one line to the next.
//!
//! - `status`: one-character status codes (`status`, `update`, `add`, ...)
//! - `diff`: unified and context diff markers
//! - `log`: separators, revision summaries and `-v` changed paths
//! - `blame`: revision and author columns
//! - `info`: `Key:` prefixes
//! - `style`: the palette shared by all of the above

pub mod blame;
pub mod diff;
pub mod info;
pub mod log;
pub mod status;
pub mod style;

use crate::artifacts::classify::style::LineStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classifier {
    Status,
    Diff,
    Log,
    Blame,
    Info,
    Stderr,
    #[default]
    Passthrough,
}

impl Classifier {
    /// Decorates a raw line as read from the child, terminator included.
    ///
    /// The terminator is kept outside of the color escapes so a reset never
    /// leaks onto the following line.
    pub fn decorate(self, line: &str) -> String {
        let (body, terminator) = split_terminator(line);
        let mut decorated = self.classify(body);
        decorated.push_str(terminator);
        decorated
    }

    /// Decorates a line body without its terminator.
    pub fn classify(self, body: &str) -> String {
        match self {
            Classifier::Status => status::classify(body),
            Classifier::Diff => diff::classify(body),
            Classifier::Log => log::classify(body),
            Classifier::Blame => blame::classify(body),
            Classifier::Info => info::classify(body),
            Classifier::Stderr => LineStyle::Error.wrap(body),
            Classifier::Passthrough => body.to_string(),
        }
    }
}

fn split_terminator(line: &str) -> (&str, &str) {
    let body = line
        .strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line);

    (body, &line[body.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("M  a.c\n", "M  a.c", "\n")]
    #[case("M  a.c\r\n", "M  a.c", "\r\n")]
    #[case("M  a.c", "M  a.c", "")]
    #[case("\n", "", "\n")]
    fn terminator_is_split_off(#[case] line: &str, #[case] body: &str, #[case] terminator: &str) {
        assert_eq!(split_terminator(line), (body, terminator));
    }

    #[test]
    fn reset_is_emitted_before_the_terminator() {
        colored::control::set_override(true);

        let decorated = Classifier::Status.decorate("M  a.c\n");
        assert_eq!(decorated, format!("{}\n", LineStyle::Modified.wrap("M  a.c")));
    }

    #[test]
    fn stderr_wraps_the_whole_line() {
        colored::control::set_override(true);

        assert_eq!(
            Classifier::Stderr.decorate("svn: E155007: not a working copy\n"),
            format!(
                "{}\n",
                LineStyle::Error.wrap("svn: E155007: not a working copy")
            )
        );
    }

    proptest! {
        #[test]
        fn passthrough_is_identity(line in "[ -~]{0,80}\n?") {
            prop_assert_eq!(Classifier::Passthrough.decorate(&line), line);
        }

        #[test]
        fn changed_path_matches_direct_status(code in "[?ACDIMUGER!]", path in "[a-z/._]{1,40}") {
            colored::control::set_override(true);

            let entry = format!("{code} {path}");
            let via_log = Classifier::Log.classify(&format!("   {entry}"));
            let direct = Classifier::Status.classify(&entry);

            prop_assert_eq!(via_log, format!("   {direct}"));
        }

        #[test]
        fn blame_without_digits_is_unchanged(line in "[a-zA-Z _|-]{0,60}") {
            prop_assert_eq!(Classifier::Blame.classify(&line), line);
        }

        #[test]
        fn status_lines_outside_the_code_set_pass_through(line in "[a-zBFHJ-LN-QS-TV-Z0-9 ][ -~]{0,40}") {
            prop_assert_eq!(Classifier::Status.classify(&line), line);
        }
    }
}
