//! Server configuration from command-line flags and environment variables.

use clap::Parser;

/// Runtime configuration for the movies server.
///
/// Every flag can also be supplied through its environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "movies-server", version, about = "HTTP API for movie records")]
pub struct ServerConfig {
    /// SQLite database file path, or `:memory:` for a non-persistent store.
    #[arg(long, env = "MOVIES_DB_PATH", default_value = "movies.db")]
    pub db_path: String,

    /// Interface to bind.
    #[arg(long, env = "MOVIES_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "MOVIES_PORT", default_value_t = 3000)]
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` listen address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
