//! Confinement checks
//!
//! Each check logs what it observes and returns the results. Recoverable
//! failures are logged and reported as `CheckStatus::Error`; only a failure to
//! write the log escapes as `Err`.

pub(crate) mod environment;
pub(crate) mod filesystem;

use crate::core::{CheckResult, Logger};
use crate::error::LogError;

pub(crate) trait Check {
    fn run(&self, logger: &Logger) -> Result<Vec<CheckResult>, LogError>;
}

pub(crate) type BoxedCheck = Box<dyn Check>;

pub(crate) use environment::EnvironmentChecker;
pub(crate) use filesystem::FileSystemProbe;
