//! Log output
//!
//! Engine events go to stderr so stdout only ever carries display lines.

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` when set, otherwise the verbosity level
/// for the keycalc crates
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbosity))
}

fn default_filter(verbosity: Verbosity) -> EnvFilter {
    let level = verbosity.log_level();
    EnvFilter::new(format!("warn,keycalc={level},keycalc_cli={level}"))
}

/// Installs the global subscriber; later calls are ignored
pub fn init(verbosity: Verbosity, ansi: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_mentions_crates() {
        let filter = default_filter(Verbosity::Verbose).to_string();
        assert!(filter.contains("keycalc=debug"));
        assert!(filter.contains("keycalc_cli=debug"));
    }

    #[test]
    fn test_quiet_filter() {
        let filter = default_filter(Verbosity::Quiet).to_string();
        assert!(filter.contains("keycalc=error"));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(Verbosity::Normal, false);
        init(Verbosity::Debug, false);
    }
}
