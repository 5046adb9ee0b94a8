use scoreboard_domain::config::{
    ConfigError, PoolSettings, ResiliencySettings, SecretKey, SecretProvider,
};
use scoreboard_persistence_postgres::{PgDataSourceProvider, PostgresScoreService};

/// Resolves secrets from process environment variables. Where the
/// values come from before that (a .env file, an orchestrator, a
/// vault sidecar) is not this crate's concern.
pub struct EnvSecretProvider;

impl SecretProvider for EnvSecretProvider {
    fn get_secret(&self, key: SecretKey) -> Result<String, ConfigError> {
        let var = match key {
            SecretKey::PgConnString => "PGSQL_CONNSTRING",
        };
        std::env::var(var).map_err(|_| ConfigError::MissingSecret(key))
    }
}

pub fn resiliency_from_env() -> ResiliencySettings {
    let max_retries = std::env::var("DB_MAX_RETRIES")
        .expect("DB_MAX_RETRIES env var not set")
        .parse()
        .expect("Invalid DB_MAX_RETRIES");
    let backoff_ms = std::env::var("DB_RETRY_BACKOFF_MS")
        .expect("DB_RETRY_BACKOFF_MS env var not set")
        .parse()
        .expect("Invalid DB_RETRY_BACKOFF_MS");
    ResiliencySettings {
        max_retries,
        backoff_ms,
    }
}

pub fn pool_from_env() -> PoolSettings {
    let max_connections = std::env::var("DB_MAX_CONNECTIONS")
        .expect("DB_MAX_CONNECTIONS env var not set")
        .parse()
        .expect("Invalid DB_MAX_CONNECTIONS");
    PoolSettings { max_connections }
}

/// Builds the provider and the data service from the environment. The
/// provider is returned alongside the service so the caller can close
/// the pool on shutdown.
pub fn build_service() -> Result<(PgDataSourceProvider, PostgresScoreService), ConfigError> {
    dotenvy::dotenv().ok();
    let provider =
        PgDataSourceProvider::new(&EnvSecretProvider, &resiliency_from_env(), &pool_from_env())?;
    let service = PostgresScoreService::new(&provider);
    log::info!("data service composed, pool ready");
    Ok((provider, service))
}
