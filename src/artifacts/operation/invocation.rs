use crate::artifacts::operation::subcommand::Subcommand;
use derive_new::new;
use std::ffi::OsString;

/// The raw command line split into the operation token and everything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// First token not starting with `-`, still unresolved
    pub operation: Option<String>,
    /// Remaining tokens, in their original order and encoding
    pub options: Vec<OsString>,
}

impl CommandLine {
    // Options taking a separate value placed before the subcommand
    // (`svn --config-dir DIR status`) are not understood: DIR would be taken
    // for the subcommand.
    pub fn parse(mut args: Vec<OsString>) -> Self {
        let operation = args
            .iter()
            .position(|arg| !arg.as_encoded_bytes().starts_with(b"-"))
            .map(|index| args.remove(index).to_string_lossy().into_owned());

        Self {
            operation,
            options: args,
        }
    }
}

/// One svn invocation: a subcommand and its verbatim options
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Invocation {
    pub subcommand: Subcommand,
    pub options: Vec<OsString>,
}

impl Invocation {
    /// Arguments handed to the svn binary.
    pub fn to_args(&self) -> Vec<OsString> {
        std::iter::once(OsString::from(self.subcommand.name()))
            .chain(self.options.iter().cloned())
            .collect()
    }
}
