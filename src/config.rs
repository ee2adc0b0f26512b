//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Upstream GraphQL endpoint configuration
    pub graphql: GraphQlConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Upstream GraphQL endpoint configuration
#[derive(Debug, Clone)]
pub struct GraphQlConfig {
    /// URL of the GraphQL endpoint
    pub endpoint: String,
    /// API key sent as the `x-api-key` header on every request
    pub api_key: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            graphql: GraphQlConfig {
                endpoint: env::var("GRAPHQL_ENDPOINT").unwrap_or_default(),
                api_key: env::var("GRAPHQL_API_KEY").unwrap_or_default(),
                timeout_secs: env::var("GRAPHQL_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(30),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
