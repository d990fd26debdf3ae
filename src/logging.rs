//! Diagnostic logging setup.
//!
//! Log lines go to stderr, filtered by `NOTEBOARD_LOG` (an `EnvFilter`
//! directive such as `debug` or `noteboard=trace`). Failures are already
//! shown to the user by a notifier, so nothing is logged unless the variable
//! is set. Under the TUI, redirect stderr to a file.

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "NOTEBOARD_LOG";

/// Whether a subscriber should be installed for this `NOTEBOARD_LOG` value
pub fn should_install(log_env: Option<&str>) -> bool {
    log_env.is_some_and(|v| !v.trim().is_empty())
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let log_env = std::env::var(LOG_ENV).ok();
    if !should_install(log_env.as_deref()) {
        return;
    }

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|e| {
        eprintln!("ignoring invalid {LOG_ENV}: {e}");
        EnvFilter::new("warn")
    });
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_install() {
        assert!(!should_install(None));
        assert!(!should_install(Some("")));
        assert!(!should_install(Some("  ")));
        assert!(should_install(Some("debug")));
        assert!(should_install(Some("noteboard=trace")));
    }
}
