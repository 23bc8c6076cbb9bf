//! Client configuration

/// Where the tracker API lives and how long to wait for it
///
/// | Variable | Default |
/// |----------|---------|
/// | TRACKER_API_URL | http://localhost:5001/api |
/// | TRACKER_TIMEOUT_SECS | 30 |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, including the `/api` prefix
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:5001/api";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Load from `TRACKER_API_URL` / `TRACKER_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("TRACKER_API_URL")
                .ok()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| Self::DEFAULT_BASE_URL.into()),
            timeout: std::env::var("TRACKER_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
        }
    }

    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}
