//! Append-only diagnostic log
//!
//! Every entry is written as `[<timestamp>] <LEVEL>: <message>`. The file is
//! opened in append mode for each entry and never truncated, so entries from
//! earlier runs are kept.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::LogError;
use crate::utils::{Timezone, echo_log_enabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => f.write_str("INFO"),
            Level::Error => f.write_str("ERROR"),
        }
    }
}

/// Render one entry. A multi-line message becomes one physical line per
/// message line, all sharing the timestamp and level.
pub(crate) fn format_entry(timestamp: &str, level: Level, message: &str) -> String {
    let mut out = String::new();
    let mut lines = message.lines().peekable();
    if lines.peek().is_none() {
        out.push_str(&format!("[{timestamp}] {level}: \n"));
        return out;
    }
    for line in lines {
        out.push_str(&format!("[{timestamp}] {level}: {line}\n"));
    }
    out
}

#[derive(Debug)]
pub(crate) struct Logger {
    path: PathBuf,
    timezone: Timezone,
}

impl Logger {
    /// Prepare the log file at `path`, creating parent directories.
    ///
    /// Fails if the file cannot be opened for appending.
    pub(crate) fn open(path: impl Into<PathBuf>, timezone: Timezone) -> Result<Self, LogError> {
        let logger = Self {
            path: path.into(),
            timezone,
        };
        logger.ensure_parent()?;
        logger.open_append()?;
        Ok(logger)
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn write_log(&self, message: &str) -> Result<(), LogError> {
        self.append(Level::Info, message)
    }

    pub(crate) fn log_error(&self, message: &str) -> Result<(), LogError> {
        self.append(Level::Error, message)
    }

    fn append(&self, level: Level, message: &str) -> Result<(), LogError> {
        self.ensure_parent()?;
        let entry = format_entry(&self.timezone.now(), level, message);
        let mut file = self.open_append()?;
        file.write_all(entry.as_bytes())
            .map_err(|source| LogError::Write {
                path: self.path.clone(),
                source,
            })?;
        if echo_log_enabled() {
            eprint!("{entry}");
        }
        Ok(())
    }

    fn ensure_parent(&self) -> Result<(), LogError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|source| LogError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })
            }
            _ => Ok(()),
        }
    }

    fn open_append(&self) -> Result<fs::File, LogError> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| LogError::Open {
                path: self.path.clone(),
                source,
            })
    }
}
