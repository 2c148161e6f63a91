//! Logging setup.
//!
//! Logs go to stderr with ANSI disabled: stdout carries the tool protocol.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map repeated `-v` flags to a level, or `None` to defer to config/`RUST_LOG`.
pub fn verbosity_level(verbose: u8) -> Option<Level> {
    match verbose {
        0 => None,
        1 => Some(Level::INFO),
        2 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

/// Build the filter: `-v` beats `RUST_LOG`, which beats the configured level.
pub fn build_filter(configured: &str, verbose: u8) -> EnvFilter {
    if let Some(level) = verbosity_level(verbose) {
        return EnvFilter::new(level.as_str().to_lowercase());
    }
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Returns `false` when one was already set,
/// in which case the call changes nothing.
pub fn init_logging(configured: &str, verbose: u8) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(configured, verbose))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("logging initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(verbosity_level(0), None);
        assert_eq!(verbosity_level(1), Some(Level::INFO));
        assert_eq!(verbosity_level(2), Some(Level::DEBUG));
        assert_eq!(verbosity_level(9), Some(Level::TRACE));
    }

    #[test]
    fn test_verbose_flag_overrides_config() {
        assert_eq!(build_filter("error", 2).to_string(), "debug");
    }

    #[test]
    fn test_second_init_is_rejected() {
        // Another test may have installed the subscriber first
        let _ = init_logging("warn", 0);
        assert!(!init_logging("debug", 3));
    }
}
