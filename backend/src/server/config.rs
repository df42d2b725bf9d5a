//! HTTP server configuration.

use clap::Parser;

/// Bind configuration for the HTTP listener.
///
/// Parsed from CLI flags with environment-variable fallbacks; there is no
/// config file and no other runtime knob.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "finpercent-backend",
    about = "Mock FinPercent personal-finance API service",
    version
)]
pub struct ServerConfig {
    /// Host address to bind the listener to.
    #[arg(long, env = "FINPERCENT_HOST", default_value = "0.0.0.0")]
    pub host: String,
    /// TCP port to listen on.
    #[arg(long, env = "FINPERCENT_PORT", default_value_t = 8001)]
    pub port: u16,
}

impl ServerConfig {
    /// The address pair handed to `HttpServer::bind`.
    #[must_use]
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
