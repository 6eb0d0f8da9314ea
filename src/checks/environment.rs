//! Snap environment check
//!
//! Reports the snap runtime variables and the interfaces connected to the snap.

use crate::consts::SNAP_VARS;
use crate::core::{CheckResult, Logger};
use crate::error::LogError;
use crate::utils::{Captured, CommandSpec, EnvLookup, ProcessEnv, run_capture};

use super::Check;

pub(crate) struct EnvironmentChecker<E: EnvLookup = ProcessEnv> {
    env: E,
    interfaces: CommandSpec,
}

impl EnvironmentChecker<ProcessEnv> {
    pub(crate) fn new(interfaces: CommandSpec) -> Self {
        Self::with_env(ProcessEnv, interfaces)
    }
}

impl<E: EnvLookup> EnvironmentChecker<E> {
    pub(crate) fn with_env(env: E, interfaces: CommandSpec) -> Self {
        Self { env, interfaces }
    }

    pub(crate) fn check_environment(&self, logger: &Logger) -> Result<Vec<CheckResult>, LogError> {
        logger.write_log("Checking if application is running in a Snap environment.")?;

        let mut results = Vec::with_capacity(SNAP_VARS.len() + 1);
        for var in SNAP_VARS {
            match self.env.non_empty(var) {
                Some(value) => {
                    logger.write_log(&format!("Environment variable {var}={value}"))?;
                    results.push(CheckResult::ok(var, value));
                }
                None => {
                    logger.write_log(&format!("Environment variable {var} not found."))?;
                    results.push(CheckResult::missing(var));
                }
            }
        }

        results.push(self.check_interfaces(logger)?);
        Ok(results)
    }

    fn check_interfaces(&self, logger: &Logger) -> Result<CheckResult, LogError> {
        logger.write_log("Checking connected Snap interfaces.")?;
        match run_capture(&self.interfaces) {
            Ok(captured) => {
                logger.write_log(&interfaces_message(&captured))?;
                let lines = captured.stdout.lines().filter(|l| !l.trim().is_empty()).count();
                Ok(CheckResult::ok(
                    "interfaces",
                    format!("{lines} line(s) from `{}` ({})", self.interfaces, captured.status),
                ))
            }
            Err(e) => {
                logger.log_error(&format!("Error checking snap interfaces: {e}"))?;
                Ok(CheckResult::error("interfaces", e.to_string()))
            }
        }
    }
}

/// Logged block for a successful listing: stdout, then stderr if any
fn interfaces_message(captured: &Captured) -> String {
    let mut message = format!("Snap interfaces:\n{}", captured.stdout);
    if !captured.stderr.is_empty() {
        if !message.ends_with('\n') {
            message.push('\n');
        }
        message.push_str(&format!("Snap interfaces stderr:\n{}", captured.stderr));
    }
    message
}

impl<E: EnvLookup> Check for EnvironmentChecker<E> {
    fn run(&self, logger: &Logger) -> Result<Vec<CheckResult>, LogError> {
        self.check_environment(logger)
    }
}
