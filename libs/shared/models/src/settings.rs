use serde::{Deserialize, Serialize};

pub const DEFAULT_CLINIC_NAME: &str = "Health Care Clinic";
pub const DEFAULT_CLINIC_PHONE: &str = "555-1234";
pub const DEFAULT_CLINIC_EMAIL: &str = "clinic@healthcare.com";
pub const DEFAULT_REMINDER_DAYS: i32 = 7;

/// Clinic-wide configuration. Exactly one row exists in storage.
///
/// Deserialization starts from [`Settings::default`], so fields missing from
/// a request body take the default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub id: Option<i64>,
    pub clinic_name: String,
    pub clinic_phone: Option<String>,
    pub clinic_email: Option<String>,
    pub default_reminder_days: Option<i32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id: None,
            clinic_name: DEFAULT_CLINIC_NAME.to_string(),
            clinic_phone: Some(DEFAULT_CLINIC_PHONE.to_string()),
            clinic_email: Some(DEFAULT_CLINIC_EMAIL.to_string()),
            default_reminder_days: Some(DEFAULT_REMINDER_DAYS),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.clinic_name.trim().is_empty() {
            return Err("clinicName is required".to_string());
        }
        Ok(())
    }

    /// Copies the mutable fields from `other`, keeping this record's id.
    pub fn apply(&mut self, other: Settings) {
        self.clinic_name = other.clinic_name;
        self.clinic_phone = other.clinic_phone;
        self.clinic_email = other.clinic_email;
        self.default_reminder_days = other.default_reminder_days;
    }
}
