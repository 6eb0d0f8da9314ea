//! Home directory access probe

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::consts::{SENTINEL_CONTENT, SENTINEL_FILE_NAME};
use crate::core::{CheckResult, Logger};
use crate::error::{LogError, ProbeError};

use super::Check;

pub(crate) struct FileSystemProbe {
    home: Option<PathBuf>,
}

impl FileSystemProbe {
    /// Probe `home`; `None` means the home directory could not be resolved
    pub(crate) fn new(home: Option<PathBuf>) -> Self {
        Self { home }
    }

    pub(crate) fn perform_checks(&self, logger: &Logger) -> Result<Vec<CheckResult>, LogError> {
        Ok(vec![
            self.list_home_directory(logger)?,
            self.check_write_permission(logger)?,
        ])
    }

    pub(crate) fn list_home_directory(&self, logger: &Logger) -> Result<CheckResult, LogError> {
        logger.write_log("Listing contents of the home directory.")?;
        match self.home_dir().and_then(list_entries) {
            Ok(entries) => {
                logger.write_log(&format!("Home directory contains: {entries:?}"))?;
                Ok(CheckResult::ok(
                    "home listing",
                    format!("{} entries", entries.len()),
                ))
            }
            Err(e) => {
                logger.log_error(&format!("Error accessing home directory: {e}"))?;
                Ok(CheckResult::error("home listing", e.to_string()))
            }
        }
    }

    pub(crate) fn check_write_permission(&self, logger: &Logger) -> Result<CheckResult, LogError> {
        logger.write_log("Checking write permissions in the home directory.")?;
        match self.home_dir().and_then(probe_write) {
            Ok(()) => {
                logger.write_log("Write permission to home directory is available.")?;
                Ok(CheckResult::ok("home write", "sentinel created and removed"))
            }
            Err(e) => {
                logger.log_error(&format!("Write permission check failed: {e}"))?;
                Ok(CheckResult::error("home write", e.to_string()))
            }
        }
    }

    fn home_dir(&self) -> Result<&Path, ProbeError> {
        self.home.as_deref().ok_or(ProbeError::NoHomeDir)
    }
}

impl Check for FileSystemProbe {
    fn run(&self, logger: &Logger) -> Result<Vec<CheckResult>, LogError> {
        self.perform_checks(logger)
    }
}

/// Sorted entry names of `dir`
fn list_entries(dir: &Path) -> Result<Vec<String>, ProbeError> {
    let mut names = fs::read_dir(dir)
        .and_then(|entries| {
            entries
                .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
                .collect::<Result<Vec<_>, _>>()
        })
        .map_err(ProbeError::ReadDir)?;
    names.sort();
    Ok(names)
}

/// Create, write and delete the sentinel file in `dir`.
///
/// An existing file with the sentinel's name is never touched. Once created,
/// the sentinel is removed even if writing to it failed.
fn probe_write(dir: &Path) -> Result<(), ProbeError> {
    probe_write_with(dir, |file| {
        file.write_all(SENTINEL_CONTENT.as_bytes())?;
        file.sync_all()
    })
}

fn probe_write_with<F>(dir: &Path, write: F) -> Result<(), ProbeError>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let path = dir.join(SENTINEL_FILE_NAME);
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(ProbeError::Create)?;
    let written = write(&mut file);
    drop(file);
    let removed = fs::remove_file(&path);

    written.map_err(ProbeError::Write)?;
    removed.map_err(ProbeError::Remove)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CheckStatus;
    use crate::core::logger::tests::read_lines;
    use crate::utils::Timezone;

    fn setup() -> (tempfile::TempDir, tempfile::TempDir, Logger) {
        let home = tempfile::tempdir().unwrap();
        let logs = tempfile::tempdir().unwrap();
        let logger = Logger::open(logs.path().join("log.txt"), Timezone::Local).unwrap();
        (home, logs, logger)
    }

    fn dir_names(dir: &Path) -> Vec<String> {
        list_entries(dir).unwrap()
    }

    #[test]
    fn lists_home_entries_sorted() {
        let (home, _logs, logger) = setup();
        fs::write(home.path().join("b.txt"), "b").unwrap();
        fs::create_dir(home.path().join("a-dir")).unwrap();

        let probe = FileSystemProbe::new(Some(home.path().to_path_buf()));
        let result = probe.list_home_directory(&logger).unwrap();

        assert_eq!(result.status, CheckStatus::Ok);
        assert_eq!(result.detail, "2 entries");
        let lines = read_lines(logger.path());
        assert!(lines[1].ends_with(r#"INFO: Home directory contains: ["a-dir", "b.txt"]"#));
    }

    #[test]
    fn write_probe_leaves_directory_unchanged() {
        let (home, _logs, logger) = setup();
        fs::write(home.path().join("keep.txt"), "keep").unwrap();
        let before = dir_names(home.path());

        let probe = FileSystemProbe::new(Some(home.path().to_path_buf()));
        let result = probe.check_write_permission(&logger).unwrap();

        assert_eq!(result.status, CheckStatus::Ok);
        assert_eq!(dir_names(home.path()), before);
        let lines = read_lines(logger.path());
        assert!(lines.last().unwrap().ends_with("INFO: Write permission to home directory is available."));
    }

    #[test]
    fn existing_sentinel_is_reported_and_preserved() {
        let (home, _logs, logger) = setup();
        let sentinel = home.path().join(SENTINEL_FILE_NAME);
        fs::write(&sentinel, "user data").unwrap();

        let probe = FileSystemProbe::new(Some(home.path().to_path_buf()));
        let result = probe.check_write_permission(&logger).unwrap();

        assert_eq!(result.status, CheckStatus::Error);
        assert_eq!(fs::read_to_string(&sentinel).unwrap(), "user data");
        let lines = read_lines(logger.path());
        assert!(lines.last().unwrap().contains("ERROR: Write permission check failed: "));
    }

    #[test]
    fn failed_write_still_removes_sentinel() {
        let home = tempfile::tempdir().unwrap();
        fs::write(home.path().join("keep.txt"), "keep").unwrap();
        let before = dir_names(home.path());

        let err = probe_write_with(home.path(), |file| {
            file.write_all(b"partial")?;
            Err(io::Error::other("disk full"))
        })
        .unwrap_err();

        assert!(matches!(err, ProbeError::Write(_)));
        assert_eq!(err.to_string(), "disk full");
        assert_eq!(dir_names(home.path()), before);
    }

    #[cfg(unix)]
    #[test]
    fn read_only_home_is_left_unchanged() {
        use std::os::unix::fs::PermissionsExt;

        let (home, _logs, logger) = setup();
        fs::write(home.path().join("keep.txt"), "keep").unwrap();
        fs::set_permissions(home.path(), fs::Permissions::from_mode(0o555)).unwrap();
        let before = dir_names(home.path());

        let probe = FileSystemProbe::new(Some(home.path().to_path_buf()));
        let result = probe.check_write_permission(&logger).unwrap();
        let after = dir_names(home.path());
        fs::set_permissions(home.path(), fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(after, before);
        // Privileged users bypass directory permissions; the probe then succeeds
        if result.status == CheckStatus::Error {
            let lines = read_lines(logger.path());
            assert!(lines.last().unwrap().contains("ERROR: Write permission check failed: "));
        } else {
            assert_eq!(result.status, CheckStatus::Ok);
        }
    }

    #[test]
    fn unreadable_home_is_logged_as_errors() {
        let (home, _logs, logger) = setup();
        let gone = home.path().join("does-not-exist");

        let probe = FileSystemProbe::new(Some(gone.clone()));
        let results = probe.perform_checks(&logger).unwrap();

        assert!(results.iter().all(|r| r.status == CheckStatus::Error));
        assert!(!gone.exists());
        let errors = read_lines(logger.path())
            .into_iter()
            .filter(|l| l.contains("] ERROR: "))
            .count();
        assert_eq!(errors, 2);
    }

    #[test]
    fn unknown_home_fails_both_checks() {
        let (_home, _logs, logger) = setup();
        let probe = FileSystemProbe::new(None);
        let results = probe.run(&logger).unwrap();

        let names: Vec<_> = results.iter().map(|r| r.check.as_str()).collect();
        assert_eq!(names, ["home listing", "home write"]);
        for r in &results {
            assert_eq!(r.status, CheckStatus::Error);
            assert_eq!(r.detail, "home directory could not be determined");
        }
    }
}
