use crate::areas::multiplexer::{Route, RunOutcome};
use crate::areas::svn::Svn;
use crate::artifacts::operation::NON_INTERACTIVE_OPTION;
use crate::artifacts::operation::invocation::Invocation;
use crate::artifacts::operation::subcommand::Subcommand;
use anyhow::Context;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

pub const MESSAGE_FILE_OPTIONS: [&str; 2] = ["-F", "--file"];
const MESSAGE_FILE_PREFIX: &str = "--file=";

/// Path given to `-F`/`--file`, in either the separate or the `--file=`
/// form.
pub fn message_file(options: &[OsString]) -> Option<PathBuf> {
    MESSAGE_FILE_OPTIONS
        .iter()
        .find_map(|flag| {
            options
                .iter()
                .position(|option| option == flag)
                .and_then(|index| options.get(index + 1))
        })
        .map(PathBuf::from)
        .or_else(|| options.iter().find_map(|option| strip_file_prefix(option)))
}

fn strip_file_prefix(option: &OsStr) -> Option<PathBuf> {
    let value = option
        .as_encoded_bytes()
        .strip_prefix(MESSAGE_FILE_PREFIX.as_bytes())?;

    // SAFETY: `value` comes from a valid `OsStr` split right after an ASCII
    // prefix, which keeps it a valid encoded sequence.
    let value = unsafe { OsStr::from_encoded_bytes_unchecked(value) };
    Some(PathBuf::from(value))
}

impl Svn {
    /// `commit` on the real terminal; the message file is removed once svn
    /// reports success.
    pub async fn commit_extended(&self, mut options: Vec<OsString>) -> anyhow::Result<RunOutcome> {
        let message_file = message_file(&options);

        // a leading --non-interactive is the one forced for paging, the commit
        // may need to prompt
        if options.first().is_some_and(|option| option == NON_INTERACTIVE_OPTION) {
            options.remove(0);
        }

        let commit = Invocation::new(Subcommand::Commit, options);
        let outcome = self
            .run(Route::inherit(), Route::inherit(), &commit.to_args())
            .await?;

        if let (RunOutcome::Exited(0), Some(path)) = (outcome, message_file) {
            std::fs::remove_file(&path).with_context(|| {
                format!("failed to remove commit message file {}", path.display())
            })?;
            tracing::debug!(path = %path.display(), "removed commit message file");
        }

        Ok(outcome)
    }
}
