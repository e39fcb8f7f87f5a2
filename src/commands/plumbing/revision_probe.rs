use crate::areas::multiplexer::{Route, RunOutcome};
use crate::areas::svn::Svn;
use crate::artifacts::classify::Classifier;
use crate::artifacts::core::sink::CaptureBuffer;
use crate::artifacts::operation::invocation::Invocation;
use crate::artifacts::operation::subcommand::Subcommand;
use crate::artifacts::revision::RevisionMarker;
use std::ffi::OsString;

/// Result of one `svn info` probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevisionProbe {
    pub outcome: RunOutcome,
    /// `None` when svn printed no revision (not a working copy, bad target...)
    pub marker: Option<RevisionMarker>,
}

impl Svn {
    /// Runs `svn info <options>` with its output captured and its error
    /// stream discarded, and extracts the working copy revision.
    pub async fn probe_revision(&self, options: &[OsString]) -> anyhow::Result<RevisionProbe> {
        let capture = CaptureBuffer::default();
        let info = Invocation::new(Subcommand::Info, options.to_vec());

        let outcome = self
            .run(
                Route::new(Some(Classifier::Passthrough), Some(capture.sink())),
                Route::new(Some(Classifier::Passthrough), None),
                &info.to_args(),
            )
            .await?;

        let marker = match outcome {
            RunOutcome::Exited(_) => RevisionMarker::try_parse(&capture.contents())?,
            RunOutcome::Interrupted | RunOutcome::SinkClosed => None,
        };
        tracing::debug!(?outcome, ?marker, "probed working copy revision");

        Ok(RevisionProbe { outcome, marker })
    }
}
