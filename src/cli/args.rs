//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::INTERFACES_COMMAND;
use crate::error::AppError;
use crate::utils::CommandSpec;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// How each check run is summarized on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputMode {
    Table { use_color: bool },
    Json,
    Quiet,
}

#[derive(Parser)]
#[command(name = "snapprobe")]
#[command(
    about = "Probe snap confinement: environment, interfaces and home directory access",
    version
)]
pub(crate) struct Cli {
    /// Log file path (default: $SNAP_USER_DATA/log.txt, then ~/log.txt)
    #[arg(long, value_name = "PATH")]
    pub(crate) log_file: Option<PathBuf>,

    /// Command that lists connected interfaces (default: "snap interfaces")
    #[arg(long, value_name = "CMD")]
    pub(crate) interfaces_command: Option<String>,

    /// Run the checks once and exit without prompting
    #[arg(long)]
    pub(crate) once: bool,

    /// Print each run's results as a JSON line
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Print no per-run summary (the log file is still written)
    #[arg(short, long)]
    pub(crate) quiet: bool,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Timezone for log timestamps (e.g., "UTC", "Europe/Berlin"; default: local)
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Echo every log line to stderr
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.json && config.json {
            self.json = true;
        }
        if !self.quiet && config.quiet {
            self.quiet = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.log_file.is_none() {
            self.log_file = config.log_file.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

    /// Interface command from the CLI, else the config file, else `snap interfaces`
    pub(crate) fn interfaces(&self, config: &Config) -> Result<CommandSpec, AppError> {
        let spec = match (&self.interfaces_command, &config.interfaces_command) {
            (Some(line), _) => CommandSpec::parse(line),
            (None, Some(parts)) => CommandSpec::from_parts(parts),
            (None, None) => CommandSpec::from_parts(&INTERFACES_COMMAND),
        };
        spec.ok_or(AppError::EmptyCommand)
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.json {
            OutputMode::Json
        } else {
            OutputMode::Table {
                use_color: self.use_color(),
            }
        }
    }
}
