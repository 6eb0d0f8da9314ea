use std::process::{Command, ExitStatus, Stdio};

use crate::error::CommandError;

/// Program and arguments of an external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommandSpec {
    pub(crate) program: String,
    pub(crate) args: Vec<String>,
}

impl CommandSpec {
    /// Build from `[program, args...]`; `None` if the list is empty
    pub(crate) fn from_parts<S: AsRef<str>>(parts: &[S]) -> Option<Self> {
        let (program, args) = parts.split_first()?;
        let program = program.as_ref().trim();
        if program.is_empty() {
            return None;
        }
        Some(Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.as_ref().to_string()).collect(),
        })
    }

    /// Split a command line on whitespace
    pub(crate) fn parse(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        Self::from_parts(&parts)
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// What a successful command printed
#[derive(Debug, Clone)]
pub(crate) struct Captured {
    pub(crate) stdout: String,
    /// Trimmed; empty when the command wrote nothing to stderr
    pub(crate) stderr: String,
    pub(crate) status: ExitStatus,
}

/// Run a command to completion and capture its output and exit status.
///
/// stdin is closed so an interactive tool cannot block the probe.
pub(crate) fn run_capture(spec: &CommandSpec) -> Result<Captured, CommandError> {
    let output = Command::new(&spec.program)
        .args(&spec.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CommandError::NotFound {
                    program: spec.program.clone(),
                }
            } else {
                CommandError::Spawn {
                    program: spec.program.clone(),
                    source: e,
                }
            }
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if output.status.success() {
        let stdout = String::from_utf8(output.stdout).map_err(|e| CommandError::Utf8 {
            program: spec.program.clone(),
            source: e,
        })?;
        Ok(Captured {
            stdout,
            stderr,
            status: output.status,
        })
    } else {
        Err(CommandError::Failed {
            program: spec.program.clone(),
            status: output.status,
            stderr,
        })
    }
}
