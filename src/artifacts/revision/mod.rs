//! Revision markers and ranges used by `updateverbose`

use anyhow::Context;
use std::ffi::OsString;

pub const REVISION_REGEX: &str = r"Revision:\s*(\d+)";

/// A working copy revision parsed out of `svn info` output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevisionMarker(u64);

impl RevisionMarker {
    pub fn new(revision: u64) -> Self {
        Self(revision)
    }

    pub fn number(self) -> u64 {
        self.0
    }

    /// Finds the first `Revision: N` line; `None` when there is none.
    pub fn try_parse(info_output: &str) -> anyhow::Result<Option<Self>> {
        let re = regex::Regex::new(REVISION_REGEX)
            .with_context(|| format!("invalid revision regex: {REVISION_REGEX}"))?;

        Ok(re
            .captures(info_output)
            .and_then(|caps| caps[1].parse::<u64>().ok())
            .map(Self))
    }
}

impl std::fmt::Display for RevisionMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What changed between two probes of the working copy revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionSpan {
    /// At least one probe failed, nothing can be said
    Unknown,
    Unchanged,
    /// Inclusive `-r` range covering the revisions brought in (or undone)
    Range(String),
}

impl RevisionSpan {
    pub fn between(old: Option<RevisionMarker>, new: Option<RevisionMarker>) -> Self {
        let (Some(old), Some(new)) = (old, new) else {
            return RevisionSpan::Unknown;
        };

        match old.cmp(&new) {
            std::cmp::Ordering::Less => RevisionSpan::Range(format!("{}:{}", old.0 + 1, new.0)),
            std::cmp::Ordering::Greater => RevisionSpan::Range(format!("{}:{}", new.0, old.0 - 1)),
            std::cmp::Ordering::Equal => RevisionSpan::Unchanged,
        }
    }
}

/// Removes every revision override (`-r N`, `-rN`, `--revision N`,
/// `--revision=N`) from an option list. Options that are not valid UTF-8
/// are never revision overrides and are kept.
pub fn strip_revision_options(options: &[OsString]) -> Vec<OsString> {
    let mut stripped = Vec::with_capacity(options.len());
    let mut options = options.iter();

    while let Some(option) = options.next() {
        match option.to_str() {
            Some("-r" | "--revision") => {
                options.next();
            }
            Some(long) if long.starts_with("--revision=") => {}
            Some(short) if short.starts_with("-r") && short.len() > 2 => {}
            _ => stripped.push(option.clone()),
        }
    }

    stripped
}
