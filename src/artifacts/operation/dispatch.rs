use crate::artifacts::classify::Classifier;
use crate::artifacts::operation::subcommand::{OutputGrammar, Subcommand};
use std::ffi::OsString;

pub const SUMMARIZE_OPTION: &str = "--summarize";

/// Classifier choice for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The child inherits the real terminal, nothing is intercepted
    Bypass,
    Classify { stdout: Classifier, stderr: Classifier },
}

/// Selects how the output of `subcommand` is decorated.
///
/// Interactive subcommands always bypass interception, even when colors are
/// off, because they may need a controlling terminal for an editor or a
/// password prompt.
pub fn select(subcommand: Subcommand, options: &[OsString], colorize: bool) -> Dispatch {
    let grammar = subcommand.grammar();

    if grammar == OutputGrammar::Interactive {
        return Dispatch::Bypass;
    }

    if !colorize {
        return Dispatch::Classify {
            stdout: Classifier::Passthrough,
            stderr: Classifier::Passthrough,
        };
    }

    let stdout = match grammar {
        OutputGrammar::StatusFamily => Classifier::Status,
        OutputGrammar::Diff if options.iter().any(|option| option == SUMMARIZE_OPTION) => {
            Classifier::Status
        }
        OutputGrammar::Diff => Classifier::Diff,
        OutputGrammar::Log => Classifier::Log,
        OutputGrammar::Blame => Classifier::Blame,
        OutputGrammar::Info => Classifier::Info,
        OutputGrammar::Plain | OutputGrammar::Interactive => Classifier::Passthrough,
    };

    Dispatch::Classify {
        stdout,
        stderr: Classifier::Stderr,
    }
}
