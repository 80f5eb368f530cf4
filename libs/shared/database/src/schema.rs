//! SQLite schema definition.

use rusqlite::Connection;

use crate::{DbResult, StorageOptions};

/// Tables for the vaccination tracker.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Patients
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id TEXT NOT NULL UNIQUE,
    patient_name TEXT NOT NULL,
    father_name TEXT,
    mother_name TEXT,
    date_of_birth TEXT,
    gender TEXT,
    blood_group TEXT,
    phone_number TEXT,
    emergency_contact TEXT,
    emergency_contact_relationship TEXT,
    email_address TEXT,
    address TEXT,
    card_id TEXT UNIQUE,
    allergies TEXT,
    medical_history TEXT,
    current_medications TEXT,
    previous_surgeries_illnesses TEXT,
    insurance_provider TEXT,
    policy_number TEXT,
    group_number TEXT,
    registration_date TEXT
);

-- ============================================================================
-- Vaccines
-- ============================================================================

CREATE TABLE IF NOT EXISTS vaccines (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_name TEXT NOT NULL,
    vaccine_name TEXT NOT NULL,
    card_id TEXT,                                -- copy of the patient's card id, not a foreign key
    patient_id TEXT,                             -- copy of the patient's business id, not a foreign key
    due_date TEXT,
    administered_date TEXT,
    status TEXT,
    dosage TEXT,
    batch_number TEXT,
    notes TEXT,
    reminder_days INTEGER NOT NULL DEFAULT 0,
    patient_phone_number TEXT,
    parent_name TEXT
);

CREATE INDEX IF NOT EXISTS idx_vaccines_patient_id ON vaccines(patient_id);

-- ============================================================================
-- Settings (single row)
-- ============================================================================

CREATE TABLE IF NOT EXISTS settings (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    clinic_name TEXT NOT NULL,
    clinic_phone TEXT,
    clinic_email TEXT,
    default_reminder_days INTEGER
);

CREATE TRIGGER IF NOT EXISTS settings_single_row BEFORE INSERT ON settings
WHEN EXISTS (SELECT 1 FROM settings)
BEGIN
    SELECT RAISE(ABORT, 'settings already holds its single row');
END;
"#;

const UNIQUE_VACCINE_PATIENT_ID: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS ux_vaccines_patient_id ON vaccines(patient_id)";

const DROP_UNIQUE_VACCINE_PATIENT_ID: &str = "DROP INDEX IF EXISTS ux_vaccines_patient_id";

/// Creates missing tables and toggles the vaccine patientId constraint.
pub(crate) fn apply(conn: &Connection, options: StorageOptions) -> DbResult<()> {
    conn.execute_batch(SCHEMA)?;

    if options.unique_vaccine_patient_id {
        conn.execute_batch(UNIQUE_VACCINE_PATIENT_ID)?;
    } else {
        conn.execute_batch(DROP_UNIQUE_VACCINE_PATIENT_ID)?;
    }

    Ok(())
}
