use shared_database::DbError;
use shared_models::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Database(#[from] DbError),
}

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::ValidationError(msg) => AppError::ValidationError(msg),
            SettingsError::Database(db) => db.into(),
        }
    }
}
