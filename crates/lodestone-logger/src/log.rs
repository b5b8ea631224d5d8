use crate::severity::LogSeverity;
use crate::time::now;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable holding the minimum severity that gets printed.
pub const LOG_ENV_VAR: &str = "LODESTONE_LOG";

static MIN_SEVERITY: Lazy<AtomicU8> = Lazy::new(|| {
    let initial = std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|value| value.parse::<LogSeverity>().ok())
        .unwrap_or(LogSeverity::Warning);
    AtomicU8::new(initial.as_u8())
});

/// Writes `msg` to stderr if `log_severity` is at or above the current threshold.
/// Stdout is left to the program's actual output.
pub fn log(msg: String, log_severity: LogSeverity) {
    if enabled(log_severity) {
        eprintln!("[{}] {} {}", log_severity, now(), msg);
    }
}

pub fn enabled(log_severity: LogSeverity) -> bool {
    log_severity >= min_severity()
}

pub fn min_severity() -> LogSeverity {
    LogSeverity::from_u8(MIN_SEVERITY.load(Ordering::Relaxed))
}

pub fn set_min_severity(log_severity: LogSeverity) {
    MIN_SEVERITY.store(log_severity.as_u8(), Ordering::Relaxed);
}
