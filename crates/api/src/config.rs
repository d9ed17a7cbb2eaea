//! Process configuration, loaded once at startup and immutable thereafter.

/// Bundled dev fallback for the signing secret. Using it in production is a
/// known design smell; startup logs a warning whenever it is in effect.
const DEV_SECRET: &str = "dev-secret";

#[derive(Debug, Clone)]
pub struct Config {
    /// Symmetric signing key for bearer tokens.
    pub jwt_secret: String,
    /// Listen address for the HTTP server.
    pub bind_addr: String,
    /// Origins allowed by the transport edge (comma-separated in the env).
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// - `PASSGATE_JWT_SECRET` — signing secret (insecure dev default).
    /// - `PASSGATE_BIND_ADDR` — default `0.0.0.0:8080`.
    /// - `PASSGATE_ALLOWED_ORIGINS` — comma-separated, default `*`.
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("PASSGATE_JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("PASSGATE_JWT_SECRET not set; using insecure dev default");
            DEV_SECRET.to_string()
        });

        let bind_addr =
            std::env::var("PASSGATE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let allowed_origins = std::env::var("PASSGATE_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            jwt_secret,
            bind_addr,
            allowed_origins,
        }
    }
}
