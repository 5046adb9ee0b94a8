use thiserror::Error;

pub mod config;
pub mod player;
pub mod report;
pub mod score;
pub mod service;
pub mod util;

/// Failure taxonomy shared by every service operation. The first three
/// variants are domain outcomes the boundary layer maps to 4xx
/// responses; `Cancelled` and `Storage` are not domain outcomes and map
/// to request-abort and 5xx respectively.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("operation cancelled")]
    Cancelled,

    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn bad_request<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::BadRequest(msg.into()))
    }

    pub fn conflict<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::Conflict(msg.into()))
    }

    pub fn not_found<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::NotFound(msg.into()))
    }

    pub fn storage<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::Storage(msg.into()))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
