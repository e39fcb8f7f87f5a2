//! Status-family grammar
//!
//! Shared by `status`, `update`, `add`, `delete`, `mkdir`, `move`, `checkout`,
//! `merge` and `diff --summarize`: the first column holds a one-character
//! status code.

use crate::artifacts::classify::style::LineStyle;

pub fn style_for(line: &str) -> Option<LineStyle> {
    let code = line.chars().next()?;

    match code {
        '?' => Some(LineStyle::NonVersioned),
        // "At revision 42." is a summary, not an addition
        'A' if !line.starts_with("At revision") => Some(LineStyle::Added),
        'C' => Some(LineStyle::Conflicted),
        'D' => Some(LineStyle::Deleted),
        'I' => Some(LineStyle::Ignored),
        'M' => Some(LineStyle::Modified),
        // "Updating '.':" and "Updated to revision 42."
        'U' if !line.starts_with("Updat") => Some(LineStyle::Updated),
        'G' => Some(LineStyle::Merged),
        '!' => Some(LineStyle::Missing),
        'E' => Some(LineStyle::Existed),
        'R' => Some(LineStyle::Replaced),
        _ => None,
    }
}

pub fn classify(line: &str) -> String {
    match style_for(line) {
        Some(style) => style.wrap(line),
        None => line.to_string(),
    }
}
