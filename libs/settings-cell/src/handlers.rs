use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::Database;
use shared_models::{AppError, Settings};

use crate::services::SettingsService;

#[axum::debug_handler]
pub async fn get_settings(
    State(db): State<Database>,
) -> Result<Json<Value>, AppError> {
    let service = SettingsService::new(&db);

    let settings = service.get_settings().await?;

    Ok(Json(json!(settings)))
}

#[axum::debug_handler]
pub async fn update_settings(
    State(db): State<Database>,
    payload: Result<Json<Settings>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) = payload?;
    let service = SettingsService::new(&db);

    let settings = service.update_settings(body).await?;

    Ok(Json(json!(settings)))
}
