use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{LOG_FILE_NAME, SNAP_USER_DATA};
use crate::error::AppError;
use crate::utils::EnvLookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) log_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) interfaces_command: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) json: bool,
    #[serde(default)]
    pub(crate) quiet: bool,
    #[serde(default)]
    pub(crate) debug: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(true)
    }

    /// Like `load`, without announcing which file was used
    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn load_internal(announce: bool) -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::from_toml(&content) {
                    Ok(config) => {
                        if announce {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/snapprobe/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("snapprobe").join("config.toml"));
        }

        // 2. Platform config dir (macOS: ~/Library/Application Support)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("snapprobe").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.snapprobe.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".snapprobe.toml"));
        }

        paths
    }
}

/// Expand a leading `~/` against `home`.
///
/// A bare `~` (or `~/`) names a directory, not a log file, and is rejected.
fn expand_home(path: &Path, home: Option<&Path>) -> Result<PathBuf, AppError> {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), _) if rest.as_os_str().is_empty() => Err(AppError::InvalidLogPath {
            path: path.to_path_buf(),
        }),
        (Ok(rest), Some(home)) => Ok(home.join(rest)),
        _ => Ok(path.to_path_buf()),
    }
}

/// Decide where the log lives. Resolved once at startup; the logger uses
/// the result as given.
///
/// Priority: explicit path, `$SNAP_USER_DATA/log.txt`, `<home>/log.txt`,
/// `./log.txt`. An explicit path that is an existing directory is rejected.
pub(crate) fn resolve_log_path(
    explicit: Option<&Path>,
    env: &impl EnvLookup,
    home: Option<&Path>,
) -> Result<PathBuf, AppError> {
    if let Some(path) = explicit {
        let path = expand_home(path, home)?;
        if path.is_dir() {
            return Err(AppError::InvalidLogPath { path });
        }
        return Ok(path);
    }
    if let Some(data) = env.non_empty(SNAP_USER_DATA) {
        return Ok(PathBuf::from(data).join(LOG_FILE_NAME));
    }
    Ok(match home {
        Some(home) => home.join(LOG_FILE_NAME),
        None => PathBuf::from(LOG_FILE_NAME),
    })
}
