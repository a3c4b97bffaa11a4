//! Server configuration, read once from the environment at startup.

use std::env;

/// Runtime settings for the HTTP server and the document store.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: String,
}

impl Config {
    /// Reads `LEADSITE_HOST`, `LEADSITE_PORT` and `LEADSITE_DB`, falling
    /// back to local-development defaults. An unparsable port falls back
    /// rather than aborting startup.
    pub fn from_env() -> Self {
        let host = env::var("LEADSITE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("LEADSITE_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(8080);
        let database_path =
            env::var("LEADSITE_DB").unwrap_or_else(|_| "leadsites.sqlite".to_string());
        Self {
            host,
            port,
            database_path,
        }
    }
}
