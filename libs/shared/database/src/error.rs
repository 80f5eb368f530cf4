use rusqlite::ErrorCode;
use thiserror::Error;

use shared_models::AppError;

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[source] rusqlite::Error),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Column {0} is not a unique lookup column")]
    UnknownColumn(String),

    #[error("Database connection lock poisoned")]
    LockPoisoned,

    #[error("Storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type DbResult<T> = Result<T, DbError>;

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, message)
                if code.code == ErrorCode::ConstraintViolation =>
            {
                DbError::Constraint(message.clone().unwrap_or_else(|| code.to_string()))
            }
            _ => DbError::Sqlite(err),
        }
    }
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound(msg) => AppError::NotFound(msg),
            DbError::Constraint(msg) => AppError::Conflict(msg),
            other => AppError::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rusqlite::Connection;

    #[test]
    fn test_unique_violation_becomes_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (v TEXT UNIQUE); INSERT INTO t VALUES ('a');")
            .unwrap();

        let err: DbError = conn
            .execute("INSERT INTO t VALUES ('a')", [])
            .unwrap_err()
            .into();

        assert_matches!(err, DbError::Constraint(msg) if msg.contains("UNIQUE"));
    }

    #[test]
    fn test_app_error_mapping() {
        assert_matches!(AppError::from(DbError::NotFound("x".into())), AppError::NotFound(_));
        assert_matches!(AppError::from(DbError::Constraint("x".into())), AppError::Conflict(_));
        assert_matches!(AppError::from(DbError::LockPoisoned), AppError::Database(_));
    }
}
