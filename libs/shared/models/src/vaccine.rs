use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_UPCOMING: &str = "upcoming";
pub const STATUS_OVERDUE: &str = "overdue";

const AUTO_DOSAGE: &str = "Standard";
const AUTO_NOTES: &str = "Automatically generated record";

/// Vaccine administration or due record.
///
/// `card_id` and `patient_id` are denormalized copies of the owning
/// patient's identifiers; storage does not enforce them as foreign keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vaccine {
    pub id: Option<i64>,
    pub patient_name: String,
    pub vaccine_name: String,
    pub card_id: Option<String>,
    pub patient_id: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub administered_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub dosage: Option<String>,
    pub batch_number: Option<String>,
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub reminder_days: i32,
    pub patient_phone_number: Option<String>,
    pub parent_name: Option<String>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(0))
}

impl Vaccine {
    pub fn new(patient_name: impl Into<String>, vaccine_name: impl Into<String>) -> Self {
        Self {
            id: None,
            patient_name: patient_name.into(),
            vaccine_name: vaccine_name.into(),
            card_id: None,
            patient_id: None,
            due_date: None,
            administered_date: None,
            status: None,
            dosage: None,
            batch_number: None,
            notes: None,
            reminder_days: 0,
            patient_phone_number: None,
            parent_name: None,
        }
    }

    /// Fast-track record for a vaccination given on the spot: due and
    /// administered today, already completed, with a synthetic batch number.
    pub fn auto_generated(
        id: Option<i64>,
        patient_name: impl Into<String>,
        vaccine_name: impl Into<String>,
        card_id: Option<String>,
    ) -> Self {
        let today = Local::now().date_naive();

        Self {
            id,
            card_id,
            due_date: Some(today),
            administered_date: Some(today),
            status: Some(STATUS_COMPLETED.to_string()),
            dosage: Some(AUTO_DOSAGE.to_string()),
            batch_number: Some(format!("AUTO-{}", Utc::now().timestamp_millis())),
            notes: Some(AUTO_NOTES.to_string()),
            reminder_days: 0,
            ..Self::new(patient_name, vaccine_name)
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.patient_name.trim().is_empty() {
            return Err("patientName is required".to_string());
        }
        if self.vaccine_name.trim().is_empty() {
            return Err("vaccineName is required".to_string());
        }
        Ok(())
    }

    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some(STATUS_COMPLETED)
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_completed() && self.due_date.is_some_and(|due| due < today)
    }

    /// Status as shown to clinic staff: stored status, except that a
    /// non-completed record past its due date reads as overdue.
    pub fn effective_status(&self, today: NaiveDate) -> &str {
        if self.is_completed() {
            STATUS_COMPLETED
        } else if self.is_overdue(today) {
            STATUS_OVERDUE
        } else {
            self.status.as_deref().unwrap_or(STATUS_PENDING)
        }
    }

    pub fn days_until_due(&self, today: NaiveDate) -> Option<i64> {
        self.due_date.map(|due| (due - today).num_days())
    }

    pub fn needs_reminder(&self, today: NaiveDate) -> bool {
        if self.is_completed() {
            return false;
        }
        self.days_until_due(today)
            .is_some_and(|days| days <= i64::from(self.reminder_days))
    }

    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        needle.is_empty()
            || self.patient_name.to_lowercase().contains(&needle)
            || self.vaccine_name.to_lowercase().contains(&needle)
    }
}
