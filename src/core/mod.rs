pub(crate) mod logger;
pub(crate) mod report;

pub(crate) use logger::Logger;
pub(crate) use report::{CheckReport, CheckResult, CheckStatus, SessionSummary};
