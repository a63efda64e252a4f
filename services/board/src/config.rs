//! Service configuration from the environment

use anyhow::Result;

/// Board service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Session lifetime in seconds
    pub session_ttl_seconds: i64,
    /// Username of the bootstrap admin account, seeded at startup
    pub admin_username: Option<String>,
    /// Password of the bootstrap admin account
    pub admin_password: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfig from environment variables
    ///
    /// # Environment Variables
    /// - `BIND_ADDR`: listen address (default: "0.0.0.0:5000")
    /// - `SESSION_TTL_SECONDS`: session lifetime in seconds (default: 604800)
    /// - `ADMIN_USERNAME` / `ADMIN_PASSWORD`: bootstrap admin account,
    ///   seeded or promoted at startup when both are set
    pub fn from_env() -> Result<Self> {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

        let session_ttl_seconds = std::env::var("SESSION_TTL_SECONDS")
            .unwrap_or_else(|_| "604800".to_string()) // 7 days
            .parse()
            .unwrap_or(604800);

        let admin_username = std::env::var("ADMIN_USERNAME")
            .ok()
            .filter(|s| !s.is_empty());

        let admin_password = std::env::var("ADMIN_PASSWORD")
            .ok()
            .filter(|s| !s.is_empty());

        Ok(AppConfig {
            bind_addr,
            session_ttl_seconds,
            admin_username,
            admin_password,
        })
    }
}
