use crate::artifacts::classify::status;
use crate::artifacts::classify::style::LineStyle;
use regex::Regex;
use std::sync::LazyLock;

pub const LOG_SUMMARY_REGEX: &str = r"^r\d+\s*\|\s*";

/// Indentation of the "Changed paths" entries printed by `log -v`
pub const CHANGED_PATH_INDENT: &str = "   ";

static LOG_SUMMARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(LOG_SUMMARY_REGEX).expect("log summary pattern is a valid regex")
});

fn is_separator(line: &str) -> bool {
    line.len() >= 3 && line.bytes().all(|b| b == b'-')
}

pub fn classify(line: &str) -> String {
    if is_separator(line) {
        LineStyle::LogSeparator.wrap(line)
    } else if LOG_SUMMARY.is_match(line) {
        LineStyle::LogSummary.wrap(line)
    } else if let Some(path_entry) = line.strip_prefix(CHANGED_PATH_INDENT) {
        format!(
            "{CHANGED_PATH_INDENT}{}",
            status::classify(path_entry.trim_start())
        )
    } else {
        line.to_string()
    }
}
