//! Wrapper data structures and algorithms
//!
//! - `classify`: line classifiers and the color palette
//! - `core`: shared utilities (sinks, pager writer, errors)
//! - `operation`: subcommand catalog, aliases and classifier dispatch
//! - `revision`: revision markers and ranges
//! - `spelling`: typo correction for unknown subcommands

pub mod classify;
pub mod core;
pub mod operation;
pub mod revision;
pub mod spelling;
