//! Output paging
//!
//! An external pager is run through `sh -c` and fed on its standard input.
//! When no pager is configured at all, the built-in `minus` pager runs on its
//! own thread in dynamic mode and shows output while svn is still producing
//! it. Unlike `less -F`, it keeps the screen even for short output until the
//! operator quits.

use crate::artifacts::core::PagerWriter;
use crate::artifacts::core::error::WrapperError;
use crate::artifacts::core::sink::Sink;
use anyhow::Context;
use minus::{ExitStrategy, MinusError, Pager};
use std::io;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

/// Default `less` flags: quit if one screen, raw control chars, chop lines
pub const LESS_DEFAULTS: &str = "FRSX";
pub const LV_DEFAULTS: &str = "-c";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerChoice {
    /// Shell command line of an external pager
    External(String),
    Builtin,
}

enum Backend {
    External(Child),
    Builtin(JoinHandle<Result<(), MinusError>>),
}

/// A running pager and the sink feeding it
pub struct ActivePager {
    sink: Sink,
    backend: Backend,
}

impl ActivePager {
    pub fn start(choice: &PagerChoice) -> anyhow::Result<Self> {
        match choice {
            PagerChoice::External(command_line) => Self::start_external(command_line),
            PagerChoice::Builtin => {
                let pager = Pager::new();
                pager
                    .set_prompt("svn-color")
                    .and_then(|()| pager.set_exit_strategy(ExitStrategy::PagerQuit))
                    .context("failed to configure the built-in pager")?;

                let quit = Arc::new(AtomicBool::new(false));
                let sink = Sink::new(PagerWriter::new(pager.clone(), quit.clone()));
                let paging = std::thread::spawn(move || {
                    let result = minus::dynamic_paging(pager);
                    quit.store(true, Ordering::Release);
                    result
                });

                tracing::debug!("started built-in pager");
                Ok(Self {
                    sink,
                    backend: Backend::Builtin(paging),
                })
            }
        }
    }

    fn start_external(command_line: &str) -> anyhow::Result<Self> {
        let mut command = Command::new("sh");
        command.arg("-c").arg(command_line).stdin(Stdio::piped());

        if std::env::var_os("LESS").is_none() {
            command.env("LESS", LESS_DEFAULTS);
        }
        if std::env::var_os("LV").is_none() {
            command.env("LV", LV_DEFAULTS);
        }

        tracing::debug!(pager = command_line, "starting external pager");
        let mut child = command
            .spawn()
            .map_err(|source| WrapperError::SpawnFailed {
                program: PathBuf::from(command_line),
                source,
            })?;
        let stdin = child
            .stdin
            .take()
            .context("pager standard input was not captured")?;

        Ok(Self {
            sink: Sink::new(stdin),
            backend: Backend::External(child),
        })
    }

    pub fn sink(&self) -> Sink {
        self.sink.clone()
    }

    /// Signals end of input and waits until the operator is done paging.
    pub fn finish(self) -> anyhow::Result<()> {
        let ActivePager { sink, backend } = self;

        if let Err(e) = sink.close()
            && e.kind() != io::ErrorKind::BrokenPipe
        {
            return Err(anyhow::Error::new(e).context("failed to flush pager input"));
        }

        match backend {
            Backend::External(mut child) => {
                let status = child.wait().context("failed to wait for the pager")?;
                tracing::debug!(?status, "pager exited");
            }
            Backend::Builtin(paging) => {
                paging
                    .join()
                    .map_err(|_| anyhow::anyhow!("built-in pager panicked"))?
                    .context("built-in pager failed")?;
            }
        }

        Ok(())
    }
}
