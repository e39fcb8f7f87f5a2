use crate::areas::multiplexer::RunOutcome;
use crate::areas::svn::Svn;
use crate::artifacts::classify::Classifier;
use crate::artifacts::operation::invocation::Invocation;
use crate::artifacts::operation::subcommand::Subcommand;
use crate::artifacts::revision::{RevisionSpan, strip_revision_options};
use std::ffi::OsString;
use std::io::{self, Write};

pub const NO_CHANGES_MESSAGE: &str = "No changes.";

impl Svn {
    /// `update`, then `log -v` over every revision the update moved across.
    ///
    /// Revision overrides are dropped from every step: the update always
    /// goes to HEAD and the info lookups and the log look at the working copy.
    /// The outcome is the update's, unless a later step was cut short.
    pub async fn update_verbose(&self, options: &[OsString]) -> anyhow::Result<RunOutcome> {
        let options = strip_revision_options(options);

        let before = self.probe_revision(&options).await?;
        if before.outcome.is_terminated() {
            return Ok(before.outcome);
        }

        let update = Invocation::new(Subcommand::Update, options.clone());
        let outcome = self
            .run(
                self.out_route(Classifier::Status),
                self.err_route(),
                &update.to_args(),
            )
            .await?;
        if outcome.is_terminated() {
            return Ok(outcome);
        }

        let after = self.probe_revision(&options).await?;
        if after.outcome.is_terminated() {
            return Ok(after.outcome);
        }

        match RevisionSpan::between(before.marker, after.marker) {
            RevisionSpan::Range(range) => {
                let mut log_options = vec![
                    OsString::from("-v"),
                    OsString::from("-r"),
                    OsString::from(range),
                ];
                log_options.extend(options);
                let log = Invocation::new(Subcommand::Log, log_options);

                let log_outcome = self
                    .run(self.out_route(Classifier::Log), self.err_route(), &log.to_args())
                    .await?;
                if log_outcome.is_terminated() {
                    return Ok(log_outcome);
                }
            }
            RevisionSpan::Unchanged => {
                if let Some(mut out) = self.out()
                    && let Err(e) = writeln!(out, "{NO_CHANGES_MESSAGE}")
                {
                    if e.kind() == io::ErrorKind::BrokenPipe {
                        return Ok(RunOutcome::SinkClosed);
                    }
                    return Err(e.into());
                }
            }
            RevisionSpan::Unknown => {
                tracing::debug!("working copy revision unknown, skipping log");
            }
        }

        Ok(outcome)
    }
}
