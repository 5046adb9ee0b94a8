use thiserror::Error;

/// Keys for secrets the persistence layer consumes. The core never
/// learns where the values come from (env, vault, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretKey {
    PgConnString,
}

impl std::fmt::Display for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretKey::PgConnString => write!(f, "pgsql_connstring"),
        }
    }
}

pub trait SecretProvider: Send + Sync {
    fn get_secret(&self, key: SecretKey) -> Result<String, ConfigError>;
}

/// Retry parameters for transient store faults. Both fields are
/// required at construction; there are no hidden defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResiliencySettings {
    pub max_retries: u32,
    pub backoff_ms: u64,
}

/// Connection pool sizing. Pooling is a hard precondition of the data
/// service, so `max_connections` must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("secret [{0}] is not set")]
    MissingSecret(SecretKey),

    #[error("invalid connection string: {0}")]
    InvalidConnectionString(String),

    #[error("connection pooling must be enabled (max_connections >= 1)")]
    PoolingDisabled,
}
