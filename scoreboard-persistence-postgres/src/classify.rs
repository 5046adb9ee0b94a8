/// Buckets a store error falls into, consulted immediately after each
/// statement execution. Constraint violations are domain outcomes and
/// are never retried; only `Transient` errors are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    UniqueViolation,
    ForeignKeyViolation,
    Transient,
    Unrecoverable,
}

pub fn classify(err: &sqlx::Error) -> ErrorClass {
    match err {
        sqlx::Error::Database(db) => match db.code() {
            Some(code) => classify_sqlstate(&code),
            None => ErrorClass::Unrecoverable,
        },
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::PoolTimedOut => {
            ErrorClass::Transient
        }
        _ => ErrorClass::Unrecoverable,
    }
}

/// SQLSTATE-to-bucket table. Class 08 is connection exceptions, class
/// 53 is insufficient resources; 40001/40P01 are serialization and
/// deadlock failures, 55P03 is a lock timeout and 57P03 means the
/// server is starting up or shutting down.
pub fn classify_sqlstate(code: &str) -> ErrorClass {
    match code {
        "23505" => ErrorClass::UniqueViolation,
        "23503" => ErrorClass::ForeignKeyViolation,
        "40001" | "40P01" | "55P03" | "57P03" => ErrorClass::Transient,
        _ if code.starts_with("08") || code.starts_with("53") => ErrorClass::Transient,
        _ => ErrorClass::Unrecoverable,
    }
}
