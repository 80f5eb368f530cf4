use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Patient demographic and medical record.
///
/// `id` is the storage-assigned surrogate key; `patient_id` is the clinic's
/// own identifier and is unique across patients, as is `card_id` when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: Option<i64>,
    pub patient_id: String,
    pub patient_name: String,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub blood_group: Option<String>,
    pub phone_number: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub email_address: Option<String>,
    pub address: Option<String>,
    pub card_id: Option<String>,
    pub allergies: Option<String>,
    pub medical_history: Option<String>,
    pub current_medications: Option<String>,
    pub previous_surgeries_illnesses: Option<String>,
    pub insurance_provider: Option<String>,
    pub policy_number: Option<String>,
    pub group_number: Option<String>,
    pub registration_date: Option<NaiveDateTime>,
}

impl Patient {
    pub fn new(patient_id: impl Into<String>, patient_name: impl Into<String>) -> Self {
        Self {
            id: None,
            patient_id: patient_id.into(),
            patient_name: patient_name.into(),
            father_name: None,
            mother_name: None,
            date_of_birth: None,
            gender: None,
            blood_group: None,
            phone_number: None,
            emergency_contact: None,
            emergency_contact_relationship: None,
            email_address: None,
            address: None,
            card_id: None,
            allergies: None,
            medical_history: None,
            current_medications: None,
            previous_surgeries_illnesses: None,
            insurance_provider: None,
            policy_number: None,
            group_number: None,
            registration_date: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.patient_id.trim().is_empty() {
            return Err("patientId is required".to_string());
        }
        if self.patient_name.trim().is_empty() {
            return Err("patientName is required".to_string());
        }
        Ok(())
    }

    /// Blank card ids are treated as absent so they never trip the
    /// uniqueness constraint.
    pub fn normalize(&mut self) {
        if self.card_id.as_deref().is_some_and(|card| card.trim().is_empty()) {
            self.card_id = None;
        }
    }

    /// Father's name, falling back to the mother's.
    pub fn parent_name(&self) -> Option<&str> {
        self.father_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.mother_name.as_deref())
    }

    /// Case-insensitive match against name, patientId, cardId and phone.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [
            Some(self.patient_name.as_str()),
            Some(self.patient_id.as_str()),
            self.card_id.as_deref(),
            self.phone_number.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_camel_case() {
        let patient: Patient = serde_json::from_value(json!({
            "patientId": "P-001",
            "patientName": "Ada Lovelace",
            "dateOfBirth": "2020-03-14",
            "cardId": "CARD-9",
            "previousSurgeriesIllnesses": "none"
        }))
        .unwrap();

        assert_eq!(patient.id, None);
        assert_eq!(patient.patient_id, "P-001");
        assert_eq!(patient.date_of_birth, NaiveDate::from_ymd_opt(2020, 3, 14));
        assert_eq!(patient.card_id.as_deref(), Some("CARD-9"));
        assert_eq!(patient.previous_surgeries_illnesses.as_deref(), Some("none"));
        assert_eq!(patient.registration_date, None);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let result = serde_json::from_value::<Patient>(json!({ "patientName": "No Id" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate() {
        assert!(Patient::new("P-1", "Grace").validate().is_ok());
        assert!(Patient::new("  ", "Grace").validate().is_err());
        assert!(Patient::new("P-1", "").validate().is_err());
    }

    #[test]
    fn test_normalize_blank_card_id() {
        let mut patient = Patient::new("P-1", "Grace");
        patient.card_id = Some("   ".to_string());
        patient.normalize();
        assert_eq!(patient.card_id, None);

        patient.card_id = Some("C-1".to_string());
        patient.normalize();
        assert_eq!(patient.card_id.as_deref(), Some("C-1"));
    }

    #[test]
    fn test_parent_name_prefers_father() {
        let mut patient = Patient::new("P-1", "Grace");
        assert_eq!(patient.parent_name(), None);

        patient.mother_name = Some("Mary".to_string());
        assert_eq!(patient.parent_name(), Some("Mary"));

        patient.father_name = Some("John".to_string());
        assert_eq!(patient.parent_name(), Some("John"));
    }

    #[test]
    fn test_matches() {
        let mut patient = Patient::new("P-100", "Grace Hopper");
        patient.card_id = Some("CARD-77".to_string());
        patient.phone_number = Some("555-0101".to_string());

        assert!(patient.matches("hopper"));
        assert!(patient.matches("p-1"));
        assert!(patient.matches("card-77"));
        assert!(patient.matches("0101"));
        assert!(patient.matches(""));
        assert!(!patient.matches("lovelace"));
    }
}
