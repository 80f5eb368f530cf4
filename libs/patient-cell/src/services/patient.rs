use chrono::Local;
use tracing::{debug, info};

use shared_database::Database;
use shared_models::{Patient, Vaccine};

use crate::models::{PatientError, PatientWithVaccines};

pub struct PatientService {
    db: Database,
}

impl PatientService {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    /// All patients, most recently registered first.
    pub async fn list_patients(&self) -> Result<Vec<Patient>, PatientError> {
        debug!("Listing patients");

        let mut patients = self.db.patients().find_all().await?;
        sort_by_registration(&mut patients);
        Ok(patients)
    }

    pub async fn search_patients(&self, term: &str) -> Result<Vec<Patient>, PatientError> {
        debug!("Searching patients with term: {:?}", term);

        let mut patients = self.list_patients().await?;
        patients.retain(|patient| patient.matches(term));
        Ok(patients)
    }

    pub async fn get_patient(&self, id: i64) -> Result<Patient, PatientError> {
        debug!("Fetching patient: {}", id);

        self.db
            .patients()
            .find_by_id(id)
            .await?
            .ok_or_else(|| PatientError::NotFound(format!("id {}", id)))
    }

    pub async fn get_patient_with_vaccines_by_patient_id(
        &self,
        patient_id: &str,
    ) -> Result<PatientWithVaccines, PatientError> {
        debug!("Fetching patient with vaccines by patientId: {}", patient_id);

        let patient = self
            .db
            .patients()
            .find_by_patient_id(patient_id)
            .await?
            .ok_or_else(|| PatientError::NotFound(format!("patientId {}", patient_id)))?;

        self.with_vaccines(patient).await
    }

    /// Looks the patient up by card, then joins vaccines on the patient's
    /// patientId, not on the card id.
    pub async fn get_patient_with_vaccines_by_card_id(
        &self,
        card_id: &str,
    ) -> Result<PatientWithVaccines, PatientError> {
        debug!("Fetching patient with vaccines by cardId: {}", card_id);

        let patient = self
            .db
            .patients()
            .find_by_card_id(card_id)
            .await?
            .ok_or_else(|| PatientError::NotFound(format!("cardId {}", card_id)))?;

        self.with_vaccines(patient).await
    }

    async fn with_vaccines(&self, patient: Patient) -> Result<PatientWithVaccines, PatientError> {
        let all = self.db.vaccines().find_all().await?;
        let vaccines = vaccines_for_patient(all, &patient.patient_id);

        Ok(PatientWithVaccines { patient, vaccines })
    }

    /// Stores a new patient. Any client id or registration date is replaced.
    pub async fn create_patient(&self, mut patient: Patient) -> Result<Patient, PatientError> {
        patient.validate().map_err(PatientError::ValidationError)?;
        patient.normalize();
        patient.id = None;
        patient.registration_date = Some(Local::now().naive_local());

        let saved = self.db.patients().save(patient).await?;
        info!(
            "Created new patient: {} (patientId: {})",
            saved.patient_name, saved.patient_id
        );
        Ok(saved)
    }

    /// Full overwrite of an existing patient; only the registration date
    /// survives from the stored record.
    pub async fn update_patient(
        &self,
        id: i64,
        mut patient: Patient,
    ) -> Result<Patient, PatientError> {
        let existing = self.get_patient(id).await?;

        patient.validate().map_err(PatientError::ValidationError)?;
        patient.normalize();
        patient.id = Some(id);
        patient.registration_date = existing.registration_date;

        let updated = self.db.patients().save(patient).await?;
        info!("Updated patient id: {}", id);
        Ok(updated)
    }

    pub async fn delete_patient(&self, id: i64) -> Result<(), PatientError> {
        if !self.db.patients().exists_by_id(id).await? {
            return Err(PatientError::NotFound(format!("id {}", id)));
        }

        self.db.patients().delete_by_id(id).await?;
        info!("Deleted patient id: {}", id);
        Ok(())
    }
}

/// Registration date descending, ties broken by id descending.
pub fn sort_by_registration(patients: &mut [Patient]) {
    patients.sort_by(|a, b| {
        b.registration_date
            .cmp(&a.registration_date)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Scans the full vaccine set for rows carrying `patient_id`, latest
/// inserted first.
pub fn vaccines_for_patient(all: Vec<Vaccine>, patient_id: &str) -> Vec<Vaccine> {
    let mut vaccines: Vec<Vaccine> = all
        .into_iter()
        .filter(|vaccine| vaccine.patient_id.as_deref() == Some(patient_id))
        .collect();
    vaccines.sort_by(|a, b| b.id.cmp(&a.id));
    vaccines
}
