//! Runtime configuration read from the Lambda environment

use tracing::warn;
use ws_shim_common::constants::BACKEND_URL_ENV;

/// Configuration shared by both shims
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Backend endpoint; `None` when unset or empty
    pub backend_url: Option<String>,
}

impl Config {
    pub fn new(backend_url: Option<String>) -> Self {
        Self {
            backend_url: backend_url.filter(|url| !url.trim().is_empty()),
        }
    }

    /// Read configuration from the environment
    ///
    /// A missing `BACKEND_URL` is not an error here: every outbound call will
    /// fail and be answered with a 502 instead.
    pub fn from_env() -> Self {
        let config = Self::new(std::env::var(BACKEND_URL_ENV).ok());
        if config.backend_url.is_none() {
            warn!(
                "{} not set, every forwarded event will return 502",
                BACKEND_URL_ENV
            );
        }
        config
    }
}
