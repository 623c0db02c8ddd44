//! Logging initialization
//!
//! Single initialization point for the tracing subscriber. Call once at
//! startup; later calls are no-ops.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility.
///
/// `RUST_LOG` overrides the profile's default filter.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("syncopate=debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("syncopate=info")),
                )
                .init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Development);
        init(Profile::Production);
        init(Profile::Development);
    }
}
