use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use shared_database::Database;
use shared_models::Vaccine;

use crate::models::{VaccinationLogRequest, VaccineError, VaccineListQuery};

pub struct VaccineService {
    db: Database,
}

impl VaccineService {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    /// Vaccines matching the query, latest record first.
    pub async fn list_vaccines(
        &self,
        query: &VaccineListQuery,
    ) -> Result<Vec<Vaccine>, VaccineError> {
        debug!("Listing vaccines with query: {:?}", query);

        let all = self.db.vaccines().find_all().await?;
        Ok(filter_vaccines(all, query, Local::now().date_naive()))
    }

    pub async fn get_vaccine(&self, id: i64) -> Result<Vaccine, VaccineError> {
        debug!("Fetching vaccine: {}", id);

        self.db
            .vaccines()
            .find_by_id(id)
            .await?
            .ok_or_else(|| VaccineError::NotFound(format!("id {}", id)))
    }

    pub async fn create_vaccine(&self, mut vaccine: Vaccine) -> Result<Vaccine, VaccineError> {
        vaccine.validate().map_err(VaccineError::ValidationError)?;
        vaccine.id = None;

        let saved = self.db.vaccines().save(vaccine).await?;
        info!(
            "Created vaccine record {} for {}",
            saved.vaccine_name, saved.patient_name
        );
        Ok(saved)
    }

    /// Full overwrite of an existing vaccine record.
    pub async fn update_vaccine(
        &self,
        id: i64,
        mut vaccine: Vaccine,
    ) -> Result<Vaccine, VaccineError> {
        if !self.db.vaccines().exists_by_id(id).await? {
            return Err(VaccineError::NotFound(format!("id {}", id)));
        }

        vaccine.validate().map_err(VaccineError::ValidationError)?;
        vaccine.id = Some(id);

        let updated = self.db.vaccines().save(vaccine).await?;
        info!("Updated vaccine id: {}", id);
        Ok(updated)
    }

    pub async fn delete_vaccine(&self, id: i64) -> Result<(), VaccineError> {
        if !self.db.vaccines().exists_by_id(id).await? {
            return Err(VaccineError::NotFound(format!("id {}", id)));
        }

        self.db.vaccines().delete_by_id(id).await?;
        info!("Deleted vaccine id: {}", id);
        Ok(())
    }

    /// Records a vaccination given today to a registered patient, filling
    /// the record from the patient's details.
    pub async fn log_vaccination(
        &self,
        request: VaccinationLogRequest,
    ) -> Result<Vaccine, VaccineError> {
        request.validate().map_err(VaccineError::ValidationError)?;
        debug!("Logging {} for patientId {}", request.vaccine, request.child_id);

        let patient = self
            .db
            .patients()
            .find_by_patient_id(request.child_id.trim())
            .await?
            .ok_or_else(|| {
                VaccineError::PatientNotFound(format!("patientId {}", request.child_id))
            })?;

        let mut vaccine = Vaccine::auto_generated(
            None,
            patient.patient_name.clone(),
            request.vaccine.trim(),
            patient.card_id.clone(),
        );
        vaccine.patient_id = Some(patient.patient_id.clone());
        vaccine.patient_phone_number = patient.phone_number.clone();
        vaccine.parent_name = patient.parent_name().map(str::to_string);

        let saved = self.db.vaccines().save(vaccine).await?;
        info!(
            "Logged vaccination {} for {} (patientId: {})",
            saved.vaccine_name, saved.patient_name, patient.patient_id
        );
        Ok(saved)
    }
}

pub fn filter_vaccines(
    all: Vec<Vaccine>,
    query: &VaccineListQuery,
    today: NaiveDate,
) -> Vec<Vaccine> {
    let term = query.search.as_deref().unwrap_or_default();
    let status = query.status_filter();

    let mut vaccines: Vec<Vaccine> = all
        .into_iter()
        .filter(|vaccine| vaccine.matches(term))
        .filter(|vaccine| status.map_or(true, |wanted| vaccine.effective_status(today) == wanted))
        .collect();
    vaccines.sort_by(|a, b| b.id.cmp(&a.id));
    vaccines
}
