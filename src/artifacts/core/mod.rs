//! Core utilities and shared types
//!
//! This module contains the output plumbing shared by every layer:
//!
//! - `sink`: cloneable output destinations handed to the multiplexer
//! - `error`: typed wrapper errors
//! - `PagerWriter`: adapter feeding the built-in pager

pub mod error;
pub mod sink;

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it to be compatible with Rust's standard I/O traits. This lets the
/// built-in pager stand behind a [`sink::Sink`] exactly like an external pager's
/// standard input does.
///
/// `quit` is raised by the paging thread once the operator leaves the pager;
/// from then on writes fail with `BrokenPipe`, as they would on the standard
/// input of an external pager that exited.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let quit = Arc::new(AtomicBool::new(false));
/// let sink = Sink::new(PagerWriter::new(pager.clone(), quit.clone()));
/// std::thread::spawn(move || { let r = minus::dynamic_paging(pager); quit.store(true, Ordering::Release); r });
/// // ... multiplex svn output into `sink` ...
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
    quit: Arc<AtomicBool>,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.quit.load(Ordering::Acquire) {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        }

        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
