//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "movies_server=info,movies_storage=info,tower_http=info";

/// Installs the global fmt subscriber, filtered by `RUST_LOG`.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).compact())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses_and_covers_both_crates() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
        for target in ["movies_server=info", "movies_storage=info", "tower_http=info"] {
            assert!(DEFAULT_FILTER.split(',').any(|d| d == target), "missing {target}");
        }
    }
}
