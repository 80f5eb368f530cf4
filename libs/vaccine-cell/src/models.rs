use serde::{Deserialize, Serialize};

use shared_database::DbError;
use shared_models::{AppError, Vaccine};

/// Filters for the vaccine list. `status` compares against the effective
/// status, so `overdue` selects late records; `all` disables the filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VaccineListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

impl VaccineListQuery {
    pub fn status_filter(&self) -> Option<&str> {
        self.status
            .as_deref()
            .map(str::trim)
            .filter(|status| !status.is_empty() && !status.eq_ignore_ascii_case("all"))
    }
}

/// Fast-track log entry: the child's patientId and the vaccine given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationLogRequest {
    pub child_id: String,
    pub vaccine: String,
}

impl VaccinationLogRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.child_id.trim().is_empty() {
            return Err("childId is required".to_string());
        }
        if self.vaccine.trim().is_empty() {
            return Err("vaccine is required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineStats {
    pub total: usize,
    pub completed: usize,
    pub upcoming: usize,
    pub overdue: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccineReminder {
    #[serde(flatten)]
    pub vaccine: Vaccine,
    pub days_until_due: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum VaccineError {
    #[error("Vaccine not found: {0}")]
    NotFound(String),

    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Database(#[from] DbError),
}

impl From<VaccineError> for AppError {
    fn from(err: VaccineError) -> Self {
        match err {
            VaccineError::NotFound(what) | VaccineError::PatientNotFound(what) => {
                AppError::NotFound(what)
            }
            VaccineError::ValidationError(msg) => AppError::ValidationError(msg),
            VaccineError::Database(db) => db.into(),
        }
    }
}
