//! Vaccine persistence.

use rusqlite::{Row, ToSql};

use shared_models::Vaccine;

use crate::Entity;

impl Entity for Vaccine {
    const TABLE: &'static str = "vaccines";

    const COLUMNS: &'static [&'static str] = &[
        "patient_name",
        "vaccine_name",
        "card_id",
        "patient_id",
        "due_date",
        "administered_date",
        "status",
        "dosage",
        "batch_number",
        "notes",
        "reminder_days",
        "patient_phone_number",
        "parent_name",
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Vaccine {
            id: row.get("id")?,
            patient_name: row.get("patient_name")?,
            vaccine_name: row.get("vaccine_name")?,
            card_id: row.get("card_id")?,
            patient_id: row.get("patient_id")?,
            due_date: row.get("due_date")?,
            administered_date: row.get("administered_date")?,
            status: row.get("status")?,
            dosage: row.get("dosage")?,
            batch_number: row.get("batch_number")?,
            notes: row.get("notes")?,
            reminder_days: row.get("reminder_days")?,
            patient_phone_number: row.get("patient_phone_number")?,
            parent_name: row.get("parent_name")?,
        })
    }

    fn params(&self) -> Vec<&dyn ToSql> {
        vec![
            &self.patient_name,
            &self.vaccine_name,
            &self.card_id,
            &self.patient_id,
            &self.due_date,
            &self.administered_date,
            &self.status,
            &self.dosage,
            &self.batch_number,
            &self.notes,
            &self.reminder_days,
            &self.patient_phone_number,
            &self.parent_name,
        ]
    }
}
