use crate::areas::multiplexer::{Multiplexer, Route, RunOutcome};
use crate::artifacts::classify::Classifier;
use crate::artifacts::core::sink::Sink;
use crate::artifacts::operation::invocation::Invocation;
use crate::artifacts::operation::{Composite, Operation};
use derive_new::new;
use std::ffi::OsString;

/// Handle on the wrapped svn client
///
/// Carries the output sinks and the color decision of the top-level
/// invocation; every command (single or composite) is an `impl Svn` block
/// under `commands`.
#[derive(Debug, new)]
pub struct Svn {
    multiplexer: Multiplexer,
    out: Option<Sink>,
    err: Option<Sink>,
    colorize: bool,
}

impl Svn {
    pub fn multiplexer(&self) -> &Multiplexer {
        &self.multiplexer
    }

    pub fn out(&self) -> Option<Sink> {
        self.out.clone()
    }

    pub fn err(&self) -> Option<Sink> {
        self.err.clone()
    }

    pub fn colorize(&self) -> bool {
        self.colorize
    }

    /// Route to the standard output sink, decorated only when colorizing.
    pub fn out_route(&self, classifier: Classifier) -> Route {
        Route::new(Some(self.effective(classifier)), self.out())
    }

    pub fn err_route(&self) -> Route {
        Route::new(Some(self.effective(Classifier::Stderr)), self.err())
    }

    pub async fn run(&self, out: Route, err: Route, args: &[OsString]) -> anyhow::Result<RunOutcome> {
        self.multiplexer.run(out, err, args).await
    }

    pub async fn execute(
        &self,
        operation: Operation,
        options: Vec<OsString>,
    ) -> anyhow::Result<RunOutcome> {
        tracing::debug!(%operation, ?options, colorize = self.colorize, "executing");

        match operation {
            Operation::Single(subcommand) => {
                self.run_subcommand(&Invocation::new(subcommand, options))
                    .await
            }
            Operation::Composite(Composite::UpdateVerbose) => self.update_verbose(&options).await,
            Operation::Composite(Composite::CommitExtended) => self.commit_extended(options).await,
        }
    }

    fn effective(&self, classifier: Classifier) -> Classifier {
        if self.colorize {
            classifier
        } else {
            Classifier::Passthrough
        }
    }
}
