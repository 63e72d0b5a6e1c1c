use std::path::PathBuf;

use crate::auth::JwtConfig;

/// Server configuration
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/eko | working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | ADMIN_USERNAME | admin | admin login name |
/// | ADMIN_PASSWORD | (none) | admin login password, required to log in |
/// | INTERNAL_EMAIL | ops@example.com | operations address CC'd on tickets |
/// | JWT_SECRET | (generated) | HS256 signing secret |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// JWT signing configuration
    pub jwt: JwtConfig,
    /// development | staging | production
    pub environment: String,
    /// Admin login name
    pub admin_username: String,
    /// Admin login password; empty disables admin login entirely
    pub admin_password: String,
    /// Operations address included on every submission notification
    pub internal_email: String,
}

impl Config {
    /// Load configuration from the environment, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/eko".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_default(),
            internal_email: std::env::var("INTERNAL_EMAIL")
                .unwrap_or_else(|_| "ops@example.com".into()),
        }
    }

    /// Override the paths and port, keeping everything else from the
    /// environment. Used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory holding the embedded database files
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory holding rotated log files
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the working directory layout if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
