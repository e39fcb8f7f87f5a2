use colored::{ColoredString, Colorize};

/// Terminal style attached to a classified line (or part of one)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    NonVersioned,
    Added,
    Conflicted,
    Deleted,
    Ignored,
    Modified,
    Updated,
    Merged,
    Missing,
    Existed,
    Replaced,
    DiffNew,
    DiffOld,
    DiffHunk,
    DiffMetadata,
    LogSeparator,
    LogSummary,
    BlameRevision,
    BlameAuthor,
    InfoKey,
    Error,
}

impl LineStyle {
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            LineStyle::NonVersioned | LineStyle::Merged | LineStyle::DiffNew => text.blue().bold(),
            LineStyle::Added | LineStyle::DiffMetadata | LineStyle::LogSeparator => {
                text.green().bold()
            }
            LineStyle::Deleted | LineStyle::Missing | LineStyle::DiffOld | LineStyle::LogSummary => {
                text.red().bold()
            }
            LineStyle::Conflicted | LineStyle::Existed | LineStyle::Error => text.red(),
            LineStyle::Ignored => text.white(),
            LineStyle::Modified | LineStyle::Updated => text.yellow().bold(),
            LineStyle::Replaced => text.magenta(),
            LineStyle::DiffHunk => text.magenta().bold(),
            LineStyle::BlameRevision => text.yellow(),
            LineStyle::BlameAuthor => text.green(),
            LineStyle::InfoKey => text.blue(),
        }
    }

    /// Paints the whole line and renders it.
    pub fn wrap(self, line: &str) -> String {
        self.paint(line).to_string()
    }
}
