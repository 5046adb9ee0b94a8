pub mod classify;
pub mod data_source;
pub mod retry;
pub mod service;

pub use data_source::PgDataSourceProvider;
pub use service::PostgresScoreService;
