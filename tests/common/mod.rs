//! Common test utilities for integration tests

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber so test runs honor `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
#[allow(dead_code)]
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// The canonical names of all recognized configuration keys.
#[allow(dead_code)]
pub const EXPECTED_KEYS: &[&str] = &[
    "APP_NAME",
    "EMAIL",
    "ADDRESS",
    "COPYRIGHT",
    "FOOTER_BRAND",
    "SUPPORT_EMAIL",
    "FOOTER_COPYRIGHT",
    "GOOGLE_PLAY_URL",
];
