//! Runtime components of the wrapper
//!
//! - `config`: settings from the environment and the alias file
//! - `multiplexer`: child process spawning and stream pumping
//! - `pager`: external and built-in pagers
//! - `svn`: the handle every command runs through

pub mod config;
pub mod multiplexer;
pub mod pager;
pub mod svn;
