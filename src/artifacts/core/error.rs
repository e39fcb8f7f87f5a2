use std::path::PathBuf;

/// Exit code used for failures of the wrapper itself
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Exit code reported when the operator interrupts a running invocation
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Debug, thiserror::Error)]
pub enum WrapperError {
    #[error("failed to start '{}': {source}", program.display())]
    SpawnFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unknown subcommand: {}", shell_quote(name))]
    UnknownSubcommand {
        name: String,
        suggestions: Vec<String>,
    },
}

impl WrapperError {
    /// Full user-facing report, suggestions included.
    pub fn report(&self) -> String {
        let mut report = format!("{self}\n");

        if let WrapperError::UnknownSubcommand { suggestions, .. } = self {
            report.push_str("Type 'svn help' for usage.\n");

            if !suggestions.is_empty() {
                report.push('\n');
                if suggestions.len() == 1 {
                    report.push_str("Did you mean this?\n");
                } else {
                    report.push_str("Did you mean one of these?\n");
                }
                for suggestion in suggestions {
                    report.push_str(&format!("\t{suggestion}\n"));
                }
            }
        }

        report
    }
}

/// Quotes a token for display the way a POSIX shell would need it.
pub fn shell_quote(token: &str) -> String {
    let is_safe = |c: char| c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c);

    if !token.is_empty() && token.chars().all(is_safe) {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', r#"'"'"'"#))
    }
}
