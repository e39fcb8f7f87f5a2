//! Plumbing commands (building blocks for composites)
//!
//! Plumbing commands capture svn output instead of showing it to the
//! operator. They're used by porcelain commands to inspect the working copy.
//!
//! ## Commands
//!
//! - `revision_probe`: read the working copy revision through `svn info`

pub mod revision_probe;
