use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CheckStatus {
    Ok,
    /// Informational: an optional value was not present
    Missing,
    Error,
}

impl CheckStatus {
    pub(crate) fn label(self) -> &'static str {
        match self {
            CheckStatus::Ok => "ok",
            CheckStatus::Missing => "missing",
            CheckStatus::Error => "error",
        }
    }
}

/// Outcome of a single probe, already written to the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CheckResult {
    pub(crate) check: String,
    pub(crate) status: CheckStatus,
    pub(crate) detail: String,
}

impl CheckResult {
    pub(crate) fn new(check: impl Into<String>, status: CheckStatus, detail: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            status,
            detail: detail.into(),
        }
    }

    pub(crate) fn ok(check: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(check, CheckStatus::Ok, detail)
    }

    pub(crate) fn missing(check: impl Into<String>) -> Self {
        Self::new(check, CheckStatus::Missing, "not found")
    }

    pub(crate) fn error(check: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(check, CheckStatus::Error, detail)
    }
}

/// Everything one pass over all checks produced
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CheckReport {
    pub(crate) run: usize,
    pub(crate) timestamp: String,
    pub(crate) results: Vec<CheckResult>,
}

impl CheckReport {
    pub(crate) fn count(&self, status: CheckStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }
}

/// What the interactive session did before it terminated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SessionSummary {
    pub(crate) check_runs: usize,
    pub(crate) invalid_inputs: usize,
}
