use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_database::Database;
use shared_models::{AppError, Patient};

use crate::models::PatientSearchQuery;
use crate::services::PatientService;

#[axum::debug_handler]
pub async fn list_patients(
    State(db): State<Database>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(&db);

    let patients = service.list_patients().await?;

    Ok(Json(json!(patients)))
}

#[axum::debug_handler]
pub async fn search_patients(
    State(db): State<Database>,
    Query(query): Query<PatientSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(&db);

    let patients = service
        .search_patients(query.q.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(json!(patients)))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(&db);

    let patient = service.get_patient(id).await?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn get_patient_by_patient_id(
    State(db): State<Database>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(&db);

    let composite = service
        .get_patient_with_vaccines_by_patient_id(&patient_id)
        .await?;

    Ok(Json(json!(composite)))
}

#[axum::debug_handler]
pub async fn get_patient_by_card_id(
    State(db): State<Database>,
    Path(card_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(&db);

    let composite = service.get_patient_with_vaccines_by_card_id(&card_id).await?;

    Ok(Json(json!(composite)))
}

#[axum::debug_handler]
pub async fn create_patient(
    State(db): State<Database>,
    payload: Result<Json<Patient>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(patient) = payload?;
    let service = PatientService::new(&db);

    let patient = service.create_patient(patient).await?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(db): State<Database>,
    Path(id): Path<i64>,
    payload: Result<Json<Patient>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(patient) = payload?;
    let service = PatientService::new(&db);

    let patient = service.update_patient(id, patient).await?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn delete_patient(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let service = PatientService::new(&db);

    service.delete_patient(id).await?;

    Ok(StatusCode::OK)
}
