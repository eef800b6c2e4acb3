//! Tracing/logging initialization.
//!
//! Diagnostics go to stderr so stdout stays reserved for the menus.

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor a valid `--log-level` is given
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize tracing/logging for the process.
///
/// `RUST_LOG` takes precedence over `level`. Safe to call multiple times
/// (subsequent calls are no-ops).
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Filter for a `--log-level` value, falling back to [`DEFAULT_LEVEL`]
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::debug("debug", "debug")]
    #[case::directive("online_banking=trace", "online_banking=trace")]
    #[case::malformed("not a level [", "warn")]
    fn test_level_filter(#[case] level: &str, #[case] expected: &str) {
        assert_eq!(level_filter(level).to_string().to_lowercase(), expected);
    }

    #[test]
    fn test_init_is_idempotent() {
        init("debug");
        assert!(tracing::dispatcher::has_been_set());

        init("not a level [");
        assert!(tracing::dispatcher::has_been_set());
    }
}
