//! Stream multiplexer
//!
//! Spawns the wrapped svn binary and pumps its standard output and standard
//! error through their classifiers into the configured sinks.
//!
//! ## Pumping model
//!
//! Each piped stream gets its own reader task that splits the stream into
//! lines and forwards them over a bounded channel. The pump loop owns the
//! receiving end and waits on it together with the Ctrl-C signal, so a child
//! that floods one stream while the other stays silent can never stall the
//! pump: both pipes are always being drained.
//!
//! Lines of one stream are delivered in order; lines of different streams are
//! delivered in the order the readers observed them.
//!
//! ## Termination
//!
//! - Ctrl-C kills the child and yields [`RunOutcome::Interrupted`]; the
//!   listener is in place before the child is spawned, so an interrupt can
//!   never take the wrapper down with the default signal action
//! - a broken pipe on a sink (pager quit early) kills the child and yields
//!   [`RunOutcome::SinkClosed`]
//! - any other I/O failure kills the child and is returned as an error

use crate::artifacts::classify::Classifier;
use crate::artifacts::core::error::{FAILURE_EXIT_CODE, INTERRUPTED_EXIT_CODE, WrapperError};
use crate::artifacts::core::sink::Sink;
use anyhow::Context;
use bitflags::bitflags;
use derive_new::new;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const LINE_CHANNEL_CAPACITY: usize = 64;

/// Where one output stream of the child goes
///
/// - classifier and sink: piped, decorated, written to the sink
/// - classifier only: piped and drained, lines are discarded
/// - sink only: piped, written unchanged
/// - neither: inherited from this process
#[derive(Debug, Clone, Default, new)]
pub struct Route {
    pub classifier: Option<Classifier>,
    pub sink: Option<Sink>,
}

impl Route {
    pub fn inherit() -> Self {
        Self::default()
    }

    fn is_piped(&self) -> bool {
        self.classifier.is_some() || self.sink.is_some()
    }

    fn stdio(&self) -> Stdio {
        if self.is_piped() {
            Stdio::piped()
        } else {
            Stdio::inherit()
        }
    }

    fn deliver(&mut self, line: &str) -> io::Result<()> {
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };

        let decorated = self.classifier.unwrap_or_default().decorate(line);
        sink.write_all(decorated.as_bytes())?;
        sink.flush()
    }
}

/// How a multiplexed invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The child ran to completion with this exit code
    Exited(i32),
    /// The operator interrupted the run, the child was killed
    Interrupted,
    /// A sink stopped accepting output, the child was killed
    SinkClosed,
}

impl RunOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            RunOutcome::Exited(code) => code,
            RunOutcome::Interrupted => INTERRUPTED_EXIT_CODE,
            RunOutcome::SinkClosed => 0,
        }
    }

    /// True when the run was cut short and follow-up work must be skipped.
    pub fn is_terminated(self) -> bool {
        !matches!(self, RunOutcome::Exited(_))
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Watched: u8 {
        const STDOUT = 0b01;
        const STDERR = 0b10;
    }
}

#[derive(Debug)]
enum Chunk {
    Line(Watched, String),
    End(Watched),
    Failed(Watched, io::Error),
}

#[derive(Debug, Clone, new)]
pub struct Multiplexer {
    program: PathBuf,
}

impl Multiplexer {
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Runs the wrapped binary with `args`.
    ///
    /// Without any classifier the child inherits both streams (bypass) and
    /// the sinks are ignored.
    pub async fn run(
        &self,
        mut out: Route,
        mut err: Route,
        args: &[OsString],
    ) -> anyhow::Result<RunOutcome> {
        let mut interrupts = Interrupts::listen();

        if out.classifier.is_none() && err.classifier.is_none() {
            return self.run_inherited(args, &mut interrupts).await;
        }

        let mut command = self.command(args);
        command.stdout(out.stdio()).stderr(err.stdio());
        let mut child = self.spawn(&mut command)?;

        let (tx, mut rx) = mpsc::channel(LINE_CHANNEL_CAPACITY);
        let mut watched = Watched::empty();
        let mut readers = Vec::with_capacity(2);

        if let Some(stdout) = child.stdout.take() {
            watched |= Watched::STDOUT;
            readers.push(spawn_reader(Watched::STDOUT, stdout, tx.clone()));
        }
        if let Some(stderr) = child.stderr.take() {
            watched |= Watched::STDERR;
            readers.push(spawn_reader(Watched::STDERR, stderr, tx.clone()));
        }
        drop(tx);

        tracing::debug!(
            program = %self.program.display(),
            ?args,
            ?watched,
            "pumping child output"
        );

        while !watched.is_empty() {
            tokio::select! {
                chunk = rx.recv() => match chunk {
                    Some(Chunk::Line(stream, line)) => {
                        let route = if stream == Watched::STDOUT { &mut out } else { &mut err };

                        if let Err(e) = route.deliver(&line) {
                            terminate(&mut child, &readers).await;

                            if e.kind() == io::ErrorKind::BrokenPipe {
                                tracing::debug!("sink closed, child terminated");
                                return Ok(RunOutcome::SinkClosed);
                            }
                            return Err(anyhow::Error::new(e).context("failed to write svn output"));
                        }
                    }
                    Some(Chunk::End(stream)) => watched.remove(stream),
                    Some(Chunk::Failed(stream, e)) => {
                        terminate(&mut child, &readers).await;
                        return Err(anyhow::Error::new(e)
                            .context(format!("failed to read {stream:?} of svn")));
                    }
                    None => break,
                },
                () = interrupts.recv() => {
                    tracing::debug!("interrupted, child terminated");
                    terminate(&mut child, &readers).await;
                    return Ok(RunOutcome::Interrupted);
                }
            }
        }

        let status = child.wait().await.context("failed to wait for svn")?;
        let outcome = RunOutcome::Exited(exit_code(status));
        tracing::debug!(?outcome, "child exited");

        Ok(outcome)
    }

    /// The child shares the terminal, so it receives the operator's Ctrl-C
    /// itself and decides how to end; the wrapper only outlives it.
    async fn run_inherited(
        &self,
        args: &[OsString],
        interrupts: &mut Interrupts,
    ) -> anyhow::Result<RunOutcome> {
        let mut command = self.command(args);
        command.stdout(Stdio::inherit()).stderr(Stdio::inherit());

        tracing::debug!(program = %self.program.display(), ?args, "running with inherited streams");
        let mut child = self.spawn(&mut command)?;

        let status = loop {
            tokio::select! {
                status = child.wait() => break status.context("failed to wait for svn")?,
                () = interrupts.recv() => tracing::debug!("interrupt left to the child"),
            }
        };

        Ok(RunOutcome::Exited(exit_code(status)))
    }

    fn command(&self, args: &[OsString]) -> Command {
        let mut command = Command::new(&self.program);
        command.args(args).stdin(Stdio::inherit()).kill_on_drop(true);
        command
    }

    fn spawn(&self, command: &mut Command) -> Result<Child, WrapperError> {
        command.spawn().map_err(|source| WrapperError::SpawnFailed {
            program: self.program.clone(),
            source,
        })
    }
}

/// SIGINT listener; registered on creation rather than on first poll.
struct Interrupts {
    #[cfg(unix)]
    signal: Option<tokio::signal::unix::Signal>,
}

#[cfg(unix)]
impl Interrupts {
    fn listen() -> Self {
        use tokio::signal::unix::{SignalKind, signal};

        let signal = signal(SignalKind::interrupt())
            .inspect_err(|e| tracing::warn!(error = %e, "cannot listen for interrupts"))
            .ok();
        Self { signal }
    }

    /// Resolves on the next interrupt, never if interrupts can't be observed.
    async fn recv(&mut self) {
        if let Some(signal) = self.signal.as_mut()
            && signal.recv().await.is_some()
        {
            return;
        }

        std::future::pending::<()>().await
    }
}

#[cfg(not(unix))]
impl Interrupts {
    fn listen() -> Self {
        Self {}
    }

    async fn recv(&mut self) {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await
        }
    }
}

fn spawn_reader<R>(stream: Watched, reader: R, tx: mpsc::Sender<Chunk>) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let chunk = match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => Chunk::End(stream),
                Ok(_) => Chunk::Line(stream, String::from_utf8_lossy(&buf).into_owned()),
                Err(e) => Chunk::Failed(stream, e),
            };

            let is_last = !matches!(chunk, Chunk::Line(..));
            if tx.send(chunk).await.is_err() || is_last {
                break;
            }
        }
    })
}

async fn terminate(child: &mut Child, readers: &[JoinHandle<()>]) {
    if let Err(e) = child.kill().await {
        tracing::warn!(error = %e, "failed to terminate svn");
    }
    for reader in readers {
        reader.abort();
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    status.code().unwrap_or(FAILURE_EXIT_CODE)
}
