use axum::{
    Router,
    routing::get,
};

use patient_cell::patient_routes;
use settings_cell::settings_routes;
use shared_config::AppConfig;
use shared_database::Database;
use vaccine_cell::vaccine_routes;

pub fn create_router(db: Database, config: &AppConfig) -> Router {
    let api = Router::new()
        .nest("/patients", patient_routes(db.clone()))
        .nest("/vaccines", vaccine_routes(db.clone()))
        .nest("/settings", settings_routes(db));

    let root = Router::new().route("/", get(|| async { "Vaccination Tracker API is running!" }));

    if config.api_prefix.is_empty() {
        root.merge(api)
    } else {
        root.nest(&config.api_prefix, api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use shared_utils::test_utils::{empty_request, json_request, read_body, read_json, TestConfig};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_liveness_route() {
        let test_config = TestConfig::default();
        let app = create_router(test_config.database(), &test_config.to_app_config());

        let response = app.oneshot(empty_request(Method::GET, "/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_body(response).await, b"Vaccination Tracker API is running!".to_vec());
    }

    #[tokio::test]
    async fn test_cells_mounted_under_prefix() {
        let test_config = TestConfig::default();
        let app = create_router(test_config.database(), &test_config.to_app_config());

        let created = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/patients",
                &json!({ "patientId": "P-1", "patientName": "Ada" }),
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::OK);

        for uri in ["/api/patients", "/api/vaccines", "/api/vaccines/stats", "/api/settings"] {
            let response = app.clone().oneshot(empty_request(Method::GET, uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }

        let settings = read_json(
            app.clone()
                .oneshot(empty_request(Method::GET, "/api/settings"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(settings["clinicName"], json!("Health Care Clinic"));
    }

    #[tokio::test]
    async fn test_empty_prefix_mounts_at_root() {
        let test_config = TestConfig::default();
        let config = AppConfig {
            api_prefix: String::new(),
            ..test_config.to_app_config()
        };
        let app = create_router(test_config.database(), &config);

        let response = app
            .oneshot(empty_request(Method::GET, "/vaccines/reminders"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
