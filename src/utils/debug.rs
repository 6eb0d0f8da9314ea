use std::sync::atomic::{AtomicBool, Ordering};

static ECHO_LOG: AtomicBool = AtomicBool::new(false);

/// Mirror every log line to stderr
pub(crate) fn set_echo_log(enabled: bool) {
    ECHO_LOG.store(enabled, Ordering::Relaxed);
}

pub(crate) fn echo_log_enabled() -> bool {
    ECHO_LOG.load(Ordering::Relaxed)
}
