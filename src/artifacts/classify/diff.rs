//! Unified/context diff grammar
//!
//! Rules are tried in order and the first matching prefix wins. The order is
//! load-bearing: `--- ` has to be seen before the bare `-` rule and `*** `
//! before `****`.

use crate::artifacts::classify::style::LineStyle;

const DIFF_RULES: &[(&[&str], LineStyle)] = &[
    (&["+", ">", "--- "], LineStyle::DiffNew),
    (&["-", "<", "*** "], LineStyle::DiffOld),
    (&["Only in", "@", "****"], LineStyle::DiffHunk),
    (
        &["Index: ", "====", "retrieving ", "diff ", "RCS file: "],
        LineStyle::DiffMetadata,
    ),
];

pub fn style_for(line: &str) -> Option<LineStyle> {
    DIFF_RULES
        .iter()
        .find(|(prefixes, _)| prefixes.iter().any(|prefix| line.starts_with(prefix)))
        .map(|(_, style)| *style)
}

pub fn classify(line: &str) -> String {
    match style_for(line) {
        Some(style) => style.wrap(line),
        None => line.to_string(),
    }
}
