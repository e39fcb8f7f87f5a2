/// How a subcommand's standard output is decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputGrammar {
    /// One-character status codes in the first column
    StatusFamily,
    /// Diff markers, or status codes when `--summarize` is given
    Diff,
    Log,
    Blame,
    Info,
    /// Needs the real terminal (editor, prompts), never intercepted
    Interactive,
    /// No dedicated classifier, lines pass through unchanged
    Plain,
}

/// Every svn subcommand the wrapper knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subcommand {
    Add,
    Blame,
    Cat,
    Changelist,
    Checkout,
    Cleanup,
    Commit,
    Copy,
    Delete,
    Diff,
    Export,
    Help,
    Import,
    Info,
    List,
    Lock,
    Log,
    Merge,
    Mergeinfo,
    Mkdir,
    Move,
    Patch,
    Propdel,
    Propedit,
    Propget,
    Proplist,
    Propset,
    Relocate,
    Resolve,
    Resolved,
    Revert,
    Status,
    Switch,
    Unlock,
    Update,
    Upgrade,
}

impl Subcommand {
    pub const ALL: [Subcommand; 36] = [
        Subcommand::Add,
        Subcommand::Blame,
        Subcommand::Cat,
        Subcommand::Changelist,
        Subcommand::Checkout,
        Subcommand::Cleanup,
        Subcommand::Commit,
        Subcommand::Copy,
        Subcommand::Delete,
        Subcommand::Diff,
        Subcommand::Export,
        Subcommand::Help,
        Subcommand::Import,
        Subcommand::Info,
        Subcommand::List,
        Subcommand::Lock,
        Subcommand::Log,
        Subcommand::Merge,
        Subcommand::Mergeinfo,
        Subcommand::Mkdir,
        Subcommand::Move,
        Subcommand::Patch,
        Subcommand::Propdel,
        Subcommand::Propedit,
        Subcommand::Propget,
        Subcommand::Proplist,
        Subcommand::Propset,
        Subcommand::Relocate,
        Subcommand::Resolve,
        Subcommand::Resolved,
        Subcommand::Revert,
        Subcommand::Status,
        Subcommand::Switch,
        Subcommand::Unlock,
        Subcommand::Update,
        Subcommand::Upgrade,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Subcommand::Add => "add",
            Subcommand::Blame => "blame",
            Subcommand::Cat => "cat",
            Subcommand::Changelist => "changelist",
            Subcommand::Checkout => "checkout",
            Subcommand::Cleanup => "cleanup",
            Subcommand::Commit => "commit",
            Subcommand::Copy => "copy",
            Subcommand::Delete => "delete",
            Subcommand::Diff => "diff",
            Subcommand::Export => "export",
            Subcommand::Help => "help",
            Subcommand::Import => "import",
            Subcommand::Info => "info",
            Subcommand::List => "list",
            Subcommand::Lock => "lock",
            Subcommand::Log => "log",
            Subcommand::Merge => "merge",
            Subcommand::Mergeinfo => "mergeinfo",
            Subcommand::Mkdir => "mkdir",
            Subcommand::Move => "move",
            Subcommand::Patch => "patch",
            Subcommand::Propdel => "propdel",
            Subcommand::Propedit => "propedit",
            Subcommand::Propget => "propget",
            Subcommand::Proplist => "proplist",
            Subcommand::Propset => "propset",
            Subcommand::Relocate => "relocate",
            Subcommand::Resolve => "resolve",
            Subcommand::Resolved => "resolved",
            Subcommand::Revert => "revert",
            Subcommand::Status => "status",
            Subcommand::Switch => "switch",
            Subcommand::Unlock => "unlock",
            Subcommand::Update => "update",
            Subcommand::Upgrade => "upgrade",
        }
    }

    pub fn try_parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|subcommand| subcommand.name() == name)
    }

    pub fn grammar(self) -> OutputGrammar {
        match self {
            Subcommand::Status
            | Subcommand::Update
            | Subcommand::Add
            | Subcommand::Delete
            | Subcommand::Mkdir
            | Subcommand::Move
            | Subcommand::Checkout
            | Subcommand::Merge => OutputGrammar::StatusFamily,
            Subcommand::Diff => OutputGrammar::Diff,
            Subcommand::Log => OutputGrammar::Log,
            Subcommand::Blame => OutputGrammar::Blame,
            Subcommand::Info => OutputGrammar::Info,
            Subcommand::Commit | Subcommand::Propedit | Subcommand::Cat | Subcommand::Copy => {
                OutputGrammar::Interactive
            }
            Subcommand::Changelist
            | Subcommand::Cleanup
            | Subcommand::Export
            | Subcommand::Help
            | Subcommand::Import
            | Subcommand::List
            | Subcommand::Lock
            | Subcommand::Mergeinfo
            | Subcommand::Patch
            | Subcommand::Propdel
            | Subcommand::Propget
            | Subcommand::Proplist
            | Subcommand::Propset
            | Subcommand::Relocate
            | Subcommand::Resolve
            | Subcommand::Resolved
            | Subcommand::Revert
            | Subcommand::Switch
            | Subcommand::Unlock
            | Subcommand::Upgrade => OutputGrammar::Plain,
        }
    }

    pub fn is_interactive(self) -> bool {
        self.grammar() == OutputGrammar::Interactive
    }
}

impl std::fmt::Display for Subcommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
