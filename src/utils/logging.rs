// ============================================================================
// Logging Setup
// Subscriber installation for binaries and demos embedding the converter
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "radix_converter=info";

/// Install a formatting subscriber driven by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed, so it is
/// safe to call more than once.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logging();
        assert!(!init_logging());
    }
}
