//! Fixtures shared by the cells' test suites.

use axum::body::Body;
use axum::response::Response;
use chrono::{Local, NaiveDate};
use http::{header, Method, Request};
use serde_json::Value;

use shared_config::AppConfig;
use shared_database::{Database, StorageOptions};
use shared_models::{Patient, Vaccine};

pub struct TestConfig {
    pub vaccine_patient_id_unique: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            vaccine_patient_id_unique: true,
        }
    }
}

impl TestConfig {
    /// Allows several vaccine rows per patient.
    pub fn multi_vaccine() -> Self {
        Self {
            vaccine_patient_id_unique: false,
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            database_path: ":memory:".to_string(),
            vaccine_patient_id_unique: self.vaccine_patient_id_unique,
            ..AppConfig::default()
        }
    }

    pub fn storage_options(&self) -> StorageOptions {
        StorageOptions {
            unique_vaccine_patient_id: self.vaccine_patient_id_unique,
        }
    }

    pub fn database(&self) -> Database {
        Database::open_in_memory(self.storage_options()).expect("in-memory database opens")
    }
}

/// In-memory database with the default constraints.
pub fn test_database() -> Database {
    TestConfig::default().database()
}

pub fn sample_patient(patient_id: &str, patient_name: &str) -> Patient {
    let mut patient = Patient::new(patient_id, patient_name);
    patient.father_name = Some("John Doe".to_string());
    patient.date_of_birth = NaiveDate::from_ymd_opt(2021, 5, 4);
    patient.gender = Some("female".to_string());
    patient.phone_number = Some("555-0100".to_string());
    patient
}

pub fn sample_vaccine(patient_id: &str, patient_name: &str, vaccine_name: &str) -> Vaccine {
    Vaccine {
        patient_id: Some(patient_id.to_string()),
        due_date: Some(Local::now().date_naive()),
        status: Some("pending".to_string()),
        dosage: Some("0.5ml".to_string()),
        reminder_days: 7,
        ..Vaccine::new(patient_name, vaccine_name)
    }
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

pub async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable")
        .to_vec()
}

pub async fn read_json(response: Response) -> Value {
    let bytes = read_body(response).await;
    serde_json::from_slice(&bytes).expect("body is JSON")
}
