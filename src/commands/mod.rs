//! Command implementations
//!
//! Every command is an `impl Svn` block, organized into two categories:
//!
//! - `plumbing`: captured invocations used as building blocks (revision probes)
//! - `porcelain`: operator-facing commands (single subcommands and composites)
//!
//! Porcelain composites chain several plumbing and porcelain invocations.

pub mod plumbing;
pub mod porcelain;
