//! Log output for the application.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// The filter used when `RUST_LOG` is unset: request logs from this crate at
/// debug level, and everything else, including the renderer, at info.
#[cfg(debug_assertions)]
const DEFAULT_FILTER: &str = "info,vocal_password=debug";
#[cfg(not(debug_assertions))]
const DEFAULT_FILTER: &str = "error,vocal_password=warn";

/// Installs a formatting subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Does nothing if a global subscriber has already been installed.
pub fn initialize_tracing() {
    let _result = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter())
        .try_init();
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn initializing_twice_is_harmless() {
        initialize_tracing();
        initialize_tracing();
    }
}
