//! Interactive commands
//!
//! What the user can type at the prompt between check runs.

/// A parsed line from the interactive prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InteractiveCommand {
    /// `r`: run every check again
    Rerun,
    /// `q`: stop the session
    Quit,
    Invalid,
}

impl InteractiveCommand {
    /// Parse one input line; surrounding whitespace and case are ignored
    pub(crate) fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "r" => InteractiveCommand::Rerun,
            "q" => InteractiveCommand::Quit,
            _ => InteractiveCommand::Invalid,
        }
    }
}
