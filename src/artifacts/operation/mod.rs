//! Operations the wrapper can perform
//!
//! - `subcommand`: the fixed catalog of svn subcommands and their grammar
//! - `alias`: built-in and user alias resolution with typo suggestions
//! - `dispatch`: classifier selection for a single invocation
//! - `invocation`: command-line splitting and invocation requests

pub mod alias;
pub mod dispatch;
pub mod invocation;
pub mod subcommand;

use crate::artifacts::operation::subcommand::Subcommand;

/// Global svn option forbidding prompts, forced while output is paged
pub const NON_INTERACTIVE_OPTION: &str = "--non-interactive";

/// Built-in aliases, applied after user aliases
pub const BUILTIN_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "praise" => "blame",
    "annotate" => "blame",
    "ann" => "blame",
    "cl" => "changelist",
    "co" => "checkout",
    "ci" => "commit",
    "cp" => "copy",
    "del" => "delete",
    "remove" => "delete",
    "rm" => "delete",
    "di" => "diff",
    "?" => "help",
    "h" => "help",
    "ls" => "list",
    "mv" => "move",
    "rename" => "move",
    "ren" => "move",
    "pdel" => "propdel",
    "pd" => "propdel",
    "pedit" => "propedit",
    "pe" => "propedit",
    "pget" => "propget",
    "pg" => "propget",
    "plist" => "proplist",
    "pl" => "proplist",
    "pset" => "propset",
    "ps" => "propset",
    "stat" => "status",
    "st" => "status",
    "sw" => "switch",
    "up" => "update",
    "updateverbose" => "updateverbose",
    "upv" => "updateverbose",
    "commitextended" => "commitextended",
    "cix" => "commitextended",
};

/// Multi-invocation workflows built on top of single subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Composite {
    /// `update`, then the log of every revision it brought in
    UpdateVerbose,
    /// `commit`, then removal of the `-F` message file on success
    CommitExtended,
}

impl Composite {
    pub const ALL: [Composite; 2] = [Composite::UpdateVerbose, Composite::CommitExtended];

    pub fn name(self) -> &'static str {
        match self {
            Composite::UpdateVerbose => "updateverbose",
            Composite::CommitExtended => "commitextended",
        }
    }

    pub fn try_parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|composite| composite.name() == name)
    }
}

/// A fully resolved operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Single(Subcommand),
    Composite(Composite),
}

impl Operation {
    pub fn try_parse(name: &str) -> Option<Self> {
        Subcommand::try_parse(name)
            .map(Operation::Single)
            .or_else(|| Composite::try_parse(name).map(Operation::Composite))
    }

    /// Interactive operations talk to the real terminal and never go through a pager.
    pub fn is_interactive(self) -> bool {
        match self {
            Operation::Single(subcommand) => subcommand.is_interactive(),
            Operation::Composite(Composite::CommitExtended) => true,
            Operation::Composite(Composite::UpdateVerbose) => false,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Single(subcommand) => write!(f, "{subcommand}"),
            Operation::Composite(composite) => write!(f, "{}", composite.name()),
        }
    }
}
