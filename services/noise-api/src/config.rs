//! Server configuration loaded from the environment.

use std::env;

/// Environment variable holding the HTTP port.
pub const ENV_HTTP_PORT: &str = "APP_HTTP_PORT";

/// Port used when `APP_HTTP_PORT` is unset or empty.
pub const DEFAULT_HTTP_PORT: &str = "8080";

/// Any non-empty value enables per-image debug logging.
pub const ENV_DEBUG: &str = "DEBUG";

/// Optional tokio worker thread count.
pub const ENV_WORKER_THREADS: &str = "TOKIO_WORKER_THREADS";

/// Runtime configuration for the noise server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Raw port value. Not validated here; a bad value fails at bind time.
    pub http_port: String,

    /// Log one line per generated image.
    pub debug: bool,

    /// Worker threads for the tokio runtime (tokio default when `None`).
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT.to_string(),
            debug: false,
            worker_threads: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Only an unset variable falls back to the default.
        let http_port = lookup(ENV_HTTP_PORT).unwrap_or_else(|| DEFAULT_HTTP_PORT.to_string());

        let debug = lookup(ENV_DEBUG).is_some_and(|v| !v.is_empty());

        let worker_threads = lookup(ENV_WORKER_THREADS)
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0);

        Self {
            http_port,
            debug,
            worker_threads,
        }
    }

    /// IPv4 wildcard listen address for the configured port. An empty port
    /// becomes `0`, letting the OS pick one.
    pub fn listen_addr(&self) -> String {
        let port = if self.http_port.is_empty() { "0" } else { &self.http_port };
        format!("0.0.0.0:{}", port)
    }
}
