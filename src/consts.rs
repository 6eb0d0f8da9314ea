/// Timestamp format for every log entry: "2025-01-15 09:30:00"
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Environment variables the snap runtime exports into a confined process
pub(crate) const SNAP_VARS: [&str; 4] = ["SNAP", "SNAP_NAME", "SNAP_REVISION", "SNAP_ARCH"];

/// Per-user writable data directory of a snap; preferred location for the log
pub(crate) const SNAP_USER_DATA: &str = "SNAP_USER_DATA";

pub(crate) const LOG_FILE_NAME: &str = "log.txt";

/// Default interface listing command
pub(crate) const INTERFACES_COMMAND: [&str; 2] = ["snap", "interfaces"];

/// Created and removed again by the write permission probe
pub(crate) const SENTINEL_FILE_NAME: &str = "snapdemo_testfile.txt";
pub(crate) const SENTINEL_CONTENT: &str = "Snap confinement test.";

pub(crate) const PROMPT: &str = "Enter 'r' to rerun checks, 'q' to quit: ";
