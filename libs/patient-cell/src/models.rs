use serde::{Deserialize, Serialize};

use shared_database::DbError;
use shared_models::{AppError, Patient, Vaccine};

/// A patient together with every vaccine record carrying its patientId,
/// latest record first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientWithVaccines {
    pub patient: Patient,
    pub vaccines: Vec<Vaccine>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientSearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("Patient not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Database(#[from] DbError),
}

impl From<PatientError> for AppError {
    fn from(err: PatientError) -> Self {
        match err {
            PatientError::NotFound(what) => AppError::NotFound(what),
            PatientError::ValidationError(msg) => AppError::ValidationError(msg),
            PatientError::Database(db) => db.into(),
        }
    }
}
