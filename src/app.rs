//! Interactive session
//!
//! Runs every check once at startup, then reads one command per line until
//! the user quits or input ends.

use std::io::{BufRead, Write};

use crate::checks::BoxedCheck;
use crate::cli::{InteractiveCommand, OutputMode};
use crate::consts::PROMPT;
use crate::core::{CheckReport, Logger, SessionSummary};
use crate::error::AppError;
use crate::output::{render_check_table, render_report_json};
use crate::utils::Timezone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Terminated,
}

pub(crate) struct Controller {
    logger: Logger,
    checks: Vec<BoxedCheck>,
    output: OutputMode,
    timezone: Timezone,
    summary: SessionSummary,
}

impl Controller {
    pub(crate) fn new(
        logger: Logger,
        checks: Vec<BoxedCheck>,
        output: OutputMode,
        timezone: Timezone,
    ) -> Self {
        Self {
            logger,
            checks,
            output,
            timezone,
            summary: SessionSummary::default(),
        }
    }

    /// Run every check in order and print the run's summary
    pub(crate) fn run_checks<W: Write>(&mut self, out: &mut W) -> Result<CheckReport, AppError> {
        self.summary.check_runs += 1;
        let timestamp = self.timezone.now();
        let mut results = Vec::new();
        for check in &self.checks {
            results.extend(check.run(&self.logger)?);
        }
        let report = CheckReport {
            run: self.summary.check_runs,
            timestamp,
            results,
        };
        self.print_report(&report, out)?;
        Ok(report)
    }

    /// Start, check once, then serve the prompt until `q` or end of input
    pub(crate) fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut out: W,
    ) -> Result<SessionSummary, AppError> {
        self.logger.write_log("SnapDemo started.")?;
        self.run_checks(&mut out)?;

        let mut buf = Vec::new();
        let mut state = State::Running;
        while state == State::Running {
            self.say(&mut out, PROMPT)?;

            buf.clear();
            state = match input.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    self.say(&mut out, "\n")?;
                    self.logger.write_log("Input closed; exiting SnapDemo.")?;
                    State::Terminated
                }
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf);
                    self.handle(InteractiveCommand::parse(&line), &mut out)?
                }
                Err(e) => {
                    self.say(&mut out, "\n")?;
                    self.logger.log_error(&format!("Failed to read input: {e}"))?;
                    State::Terminated
                }
            };
        }

        Ok(self.summary)
    }

    /// Start, check once and exit without prompting
    pub(crate) fn run_once<W: Write>(&mut self, mut out: W) -> Result<SessionSummary, AppError> {
        self.logger.write_log("SnapDemo started.")?;
        self.run_checks(&mut out)?;
        self.logger.write_log("Exiting SnapDemo.")?;
        Ok(self.summary)
    }

    fn handle<W: Write>(&mut self, command: InteractiveCommand, out: &mut W) -> Result<State, AppError> {
        match command {
            InteractiveCommand::Rerun => {
                self.logger.write_log("Rerunning environment checks.")?;
                self.run_checks(out)?;
                Ok(State::Running)
            }
            InteractiveCommand::Quit => {
                self.logger.write_log("Exiting SnapDemo.")?;
                Ok(State::Terminated)
            }
            InteractiveCommand::Invalid => {
                self.summary.invalid_inputs += 1;
                self.logger.log_error("Invalid input received.")?;
                self.say(out, "Invalid input. Please enter 'r' or 'q'.\n")?;
                Ok(State::Running)
            }
        }
    }

    /// Interactive text. Goes to stderr in JSON mode so stdout stays JSON Lines.
    fn say<W: Write>(&self, out: &mut W, text: &str) -> Result<(), AppError> {
        if self.output == OutputMode::Json {
            let mut err = std::io::stderr();
            err.write_all(text.as_bytes())
                .and_then(|()| err.flush())
                .map_err(AppError::Terminal)
        } else {
            out.write_all(text.as_bytes())
                .and_then(|()| out.flush())
                .map_err(AppError::Terminal)
        }
    }

    fn print_report<W: Write>(&self, report: &CheckReport, out: &mut W) -> Result<(), AppError> {
        let rendered = match self.output {
            OutputMode::Quiet => return Ok(()),
            OutputMode::Json => render_report_json(report)?,
            OutputMode::Table { use_color } => render_check_table(report, use_color),
        };
        writeln!(out, "{rendered}").map_err(AppError::Terminal)
    }
}
