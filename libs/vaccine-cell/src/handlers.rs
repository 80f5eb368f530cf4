use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_database::Database;
use shared_models::{AppError, Vaccine};

use crate::models::{VaccinationLogRequest, VaccineListQuery};
use crate::services::{ReminderService, VaccineService};

#[axum::debug_handler]
pub async fn list_vaccines(
    State(db): State<Database>,
    Query(query): Query<VaccineListQuery>,
) -> Result<Json<Value>, AppError> {
    let service = VaccineService::new(&db);

    let vaccines = service.list_vaccines(&query).await?;

    Ok(Json(json!(vaccines)))
}

#[axum::debug_handler]
pub async fn get_vaccine(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let service = VaccineService::new(&db);

    let vaccine = service.get_vaccine(id).await?;

    Ok(Json(json!(vaccine)))
}

#[axum::debug_handler]
pub async fn create_vaccine(
    State(db): State<Database>,
    payload: Result<Json<Vaccine>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(vaccine) = payload?;
    let service = VaccineService::new(&db);

    let vaccine = service.create_vaccine(vaccine).await?;

    Ok(Json(json!(vaccine)))
}

#[axum::debug_handler]
pub async fn update_vaccine(
    State(db): State<Database>,
    Path(id): Path<i64>,
    payload: Result<Json<Vaccine>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(vaccine) = payload?;
    let service = VaccineService::new(&db);

    let vaccine = service.update_vaccine(id, vaccine).await?;

    Ok(Json(json!(vaccine)))
}

#[axum::debug_handler]
pub async fn delete_vaccine(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let service = VaccineService::new(&db);

    service.delete_vaccine(id).await?;

    Ok(StatusCode::OK)
}

#[axum::debug_handler]
pub async fn log_vaccination(
    State(db): State<Database>,
    payload: Result<Json<VaccinationLogRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    let service = VaccineService::new(&db);

    let vaccine = service.log_vaccination(request).await?;

    Ok(Json(json!(vaccine)))
}

#[axum::debug_handler]
pub async fn vaccine_stats(
    State(db): State<Database>,
) -> Result<Json<Value>, AppError> {
    let service = ReminderService::new(&db);

    let stats = service.stats().await?;

    Ok(Json(json!(stats)))
}

#[axum::debug_handler]
pub async fn vaccine_reminders(
    State(db): State<Database>,
) -> Result<Json<Value>, AppError> {
    let service = ReminderService::new(&db);

    let reminders = service.reminders().await?;

    Ok(Json(json!(reminders)))
}
