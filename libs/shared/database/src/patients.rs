//! Patient persistence.

use rusqlite::{Row, ToSql};

use shared_models::Patient;

use crate::{DbResult, Entity, Table};

impl Entity for Patient {
    const TABLE: &'static str = "patients";

    const COLUMNS: &'static [&'static str] = &[
        "patient_id",
        "patient_name",
        "father_name",
        "mother_name",
        "date_of_birth",
        "gender",
        "blood_group",
        "phone_number",
        "emergency_contact",
        "emergency_contact_relationship",
        "email_address",
        "address",
        "card_id",
        "allergies",
        "medical_history",
        "current_medications",
        "previous_surgeries_illnesses",
        "insurance_provider",
        "policy_number",
        "group_number",
        "registration_date",
    ];

    const UNIQUE_COLUMNS: &'static [&'static str] = &["patient_id", "card_id"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Patient {
            id: row.get("id")?,
            patient_id: row.get("patient_id")?,
            patient_name: row.get("patient_name")?,
            father_name: row.get("father_name")?,
            mother_name: row.get("mother_name")?,
            date_of_birth: row.get("date_of_birth")?,
            gender: row.get("gender")?,
            blood_group: row.get("blood_group")?,
            phone_number: row.get("phone_number")?,
            emergency_contact: row.get("emergency_contact")?,
            emergency_contact_relationship: row.get("emergency_contact_relationship")?,
            email_address: row.get("email_address")?,
            address: row.get("address")?,
            card_id: row.get("card_id")?,
            allergies: row.get("allergies")?,
            medical_history: row.get("medical_history")?,
            current_medications: row.get("current_medications")?,
            previous_surgeries_illnesses: row.get("previous_surgeries_illnesses")?,
            insurance_provider: row.get("insurance_provider")?,
            policy_number: row.get("policy_number")?,
            group_number: row.get("group_number")?,
            registration_date: row.get("registration_date")?,
        })
    }

    fn params(&self) -> Vec<&dyn ToSql> {
        vec![
            &self.patient_id,
            &self.patient_name,
            &self.father_name,
            &self.mother_name,
            &self.date_of_birth,
            &self.gender,
            &self.blood_group,
            &self.phone_number,
            &self.emergency_contact,
            &self.emergency_contact_relationship,
            &self.email_address,
            &self.address,
            &self.card_id,
            &self.allergies,
            &self.medical_history,
            &self.current_medications,
            &self.previous_surgeries_illnesses,
            &self.insurance_provider,
            &self.policy_number,
            &self.group_number,
            &self.registration_date,
        ]
    }
}

impl Table<Patient> {
    pub async fn find_by_patient_id(&self, patient_id: &str) -> DbResult<Option<Patient>> {
        self.find_one_by("patient_id", patient_id).await
    }

    pub async fn find_by_card_id(&self, card_id: &str) -> DbResult<Option<Patient>> {
        self.find_one_by("card_id", card_id).await
    }
}
