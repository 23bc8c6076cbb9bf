/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_HOST | 0.0.0.0 | bind address |
/// | HTTP_PORT | 5001 | bind port |
/// | ENVIRONMENT | development | development / staging / production |
/// | SEED_DEMO_DATA | true | start with demo employees and tasks |
/// | LOG_LEVEL | info | default level when `RUST_LOG` is unset |
/// | LOG_DIR | - | daily rolling log directory |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | graceful shutdown grace period |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 SEED_DEMO_DATA=false cargo run -p tracker-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub seed_demo_data: bool,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5001),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// Environment defaults with a fixed port and seeding switch
    ///
    /// Used by tests.
    pub fn with_overrides(http_port: u16, seed_demo_data: bool) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.seed_demo_data = seed_demo_data;
        config
    }

    /// `host:port` as configured
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = Config::with_overrides(0, false);
        assert_eq!(config.http_port, 0);
        assert!(!config.seed_demo_data);
        assert!(config.bind_address().ends_with(":0"));
    }
}
