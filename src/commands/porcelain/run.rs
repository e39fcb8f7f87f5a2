use crate::areas::multiplexer::{Route, RunOutcome};
use crate::areas::svn::Svn;
use crate::artifacts::operation::dispatch::{self, Dispatch};
use crate::artifacts::operation::invocation::Invocation;

impl Svn {
    pub async fn run_subcommand(&self, invocation: &Invocation) -> anyhow::Result<RunOutcome> {
        let args = invocation.to_args();

        match dispatch::select(invocation.subcommand, &invocation.options, self.colorize()) {
            Dispatch::Bypass => self.run(Route::inherit(), Route::inherit(), &args).await,
            Dispatch::Classify { stdout, stderr } => {
                self.run(
                    Route::new(Some(stdout), self.out()),
                    Route::new(Some(stderr), self.err()),
                    &args,
                )
                .await
            }
        }
    }
}
