/// Which conversion backend the server talks to.
///
/// `Mock` swaps in the in-process simulator so the whole flow can be
/// exercised without a CloudConvert account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    CloudConvert,
    Mock,
}

impl ProviderKind {
    /// Stable lowercase label, as reported by `/health` and the logs.
    pub fn label(&self) -> &'static str {
        match self {
            ProviderKind::CloudConvert => "cloudconvert",
            ProviderKind::Mock => "mock",
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Seconds between reconcile passes over active conversions (default: `3`).
    pub reconcile_interval_secs: u64,
    /// Upload size cap in mebibytes (default: `100`).
    pub max_upload_mb: usize,
    /// Which conversion backend to use (default: `cloudconvert`).
    pub provider: ProviderKind,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `RECONCILE_INTERVAL_SECS`| `3`                        |
    /// | `MAX_UPLOAD_MB`          | `100`                      |
    /// | `PROVIDER`               | `cloudconvert`             |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let reconcile_interval_secs: u64 = std::env::var("RECONCILE_INTERVAL_SECS")
            .unwrap_or_else(|_| "3".into())
            .parse()
            .expect("RECONCILE_INTERVAL_SECS must be a valid u64");

        let max_upload_mb: usize = std::env::var("MAX_UPLOAD_MB")
            .unwrap_or_else(|_| "100".into())
            .parse()
            .expect("MAX_UPLOAD_MB must be a valid usize");

        let provider_raw = std::env::var("PROVIDER").unwrap_or_else(|_| "cloudconvert".into());
        let provider = match provider_raw.trim().to_lowercase().as_str() {
            "cloudconvert" => ProviderKind::CloudConvert,
            "mock" => ProviderKind::Mock,
            other => panic!("PROVIDER must be 'cloudconvert' or 'mock', got '{other}'"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            reconcile_interval_secs,
            max_upload_mb,
            provider,
        }
    }

    /// Upload size cap in bytes, derived from `MAX_UPLOAD_MB`.
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
