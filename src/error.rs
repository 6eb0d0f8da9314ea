use std::path::PathBuf;

use thiserror::Error;

/// Errors that end the process
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Log file path {} does not name a file", path.display())]
    InvalidLogPath { path: PathBuf },

    #[error("Interface command must not be empty")]
    EmptyCommand,

    #[error("{0}")]
    Log(#[from] LogError),

    #[error("Failed to write to terminal: {0}")]
    Terminal(std::io::Error),

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// The log file could not be prepared or appended to
#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("Failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write log file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub(crate) enum CommandError {
    #[error("{program} not found")]
    NotFound { program: String },

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("Invalid UTF-8 from {program}: {source}")]
    Utf8 {
        program: String,
        source: std::string::FromUtf8Error,
    },
}

/// Filesystem probe failures; logged and reported, never escalated
#[derive(Debug, Error)]
pub(crate) enum ProbeError {
    #[error("home directory could not be determined")]
    NoHomeDir,

    #[error("{0}")]
    ReadDir(std::io::Error),

    #[error("{0}")]
    Create(std::io::Error),

    #[error("{0}")]
    Write(std::io::Error),

    #[error("{0}")]
    Remove(std::io::Error),
}
