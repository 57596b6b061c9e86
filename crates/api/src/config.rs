use crate::auth::token::TokenConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have defaults suitable for local
/// development. In production, override via environment variables.
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
    /// The shared admin password checked at login.
    pub admin_password: String,
    /// Session token configuration (secret, expiry).
    pub token: TokenConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ADMIN_PASSWORD`       | **required**               |
    ///
    /// # Panics
    ///
    /// Panics if `ADMIN_PASSWORD` is not set or is empty; a server without a
    /// gate password must not start.
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

        let admin_password =
            std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set in the environment");
        assert!(!admin_password.is_empty(), "ADMIN_PASSWORD must not be empty");

        let token = TokenConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            admin_password,
            token,
        }
    }
}

/// Which object storage backend to use.
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// In-process memory, for development and tests.
    Memory,
    /// An S3-compatible service.
    S3(osaka_storage::S3Config),
}

impl StorageBackend {
    /// Load the storage backend selection from environment variables.
    ///
    /// `STORAGE_BACKEND` is `memory` (default) or `s3`. The `s3` backend
    /// additionally reads `STORAGE_ENDPOINT` (optional), `STORAGE_REGION`
    /// (default `us-east-1`), `STORAGE_ACCESS_KEY_ID`,
    /// `STORAGE_SECRET_ACCESS_KEY`, and `STORAGE_PUBLIC_BASE_URL`.
    ///
    /// # Panics
    ///
    /// Panics if `STORAGE_BACKEND=s3` and a required S3 variable is missing.
    pub fn from_env() -> Self {
        let backend = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "memory".into());
        match backend.as_str() {
            "memory" => StorageBackend::Memory,
            "s3" => StorageBackend::S3(osaka_storage::S3Config {
                endpoint: std::env::var("STORAGE_ENDPOINT").ok(),
                region: std::env::var("STORAGE_REGION").unwrap_or_else(|_| "us-east-1".into()),
                access_key_id: std::env::var("STORAGE_ACCESS_KEY_ID")
                    .expect("STORAGE_ACCESS_KEY_ID must be set for the s3 backend"),
                secret_access_key: std::env::var("STORAGE_SECRET_ACCESS_KEY")
                    .expect("STORAGE_SECRET_ACCESS_KEY must be set for the s3 backend"),
                public_base_url: std::env::var("STORAGE_PUBLIC_BASE_URL")
                    .expect("STORAGE_PUBLIC_BASE_URL must be set for the s3 backend"),
            }),
            other => panic!("Unknown STORAGE_BACKEND '{other}'. Must be 'memory' or 's3'"),
        }
    }
}
