use crate::artifacts::classify::style::LineStyle;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Revision column followed by the author column of `svn blame` output
pub const BLAME_PAIR_REGEX: &str = r"(\s*[0-9]+\s*)([A-Za-z0-9_-]+)";

static BLAME_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BLAME_PAIR_REGEX).expect("blame pattern is a valid regex"));

pub fn classify(line: &str) -> String {
    BLAME_PAIR
        .replacen(line, 1, |caps: &Captures| {
            format!(
                "{}{}",
                LineStyle::BlameRevision.paint(&caps[1]),
                LineStyle::BlameAuthor.paint(&caps[2])
            )
        })
        .into_owned()
}
