//! Porcelain commands (what the operator types)
//!
//! ## Commands
//!
//! - `run`: any single svn subcommand, colorized according to its grammar
//! - `update_verbose`: `update` followed by the log of what it brought in
//! - `commit_extended`: `commit` that removes its message file on success

pub mod commit_extended;
pub mod run;
pub mod update_verbose;
