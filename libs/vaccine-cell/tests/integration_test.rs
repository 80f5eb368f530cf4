// =====================================================================================
// VACCINE CELL INTEGRATION TESTS - HTTP SURFACE
// =====================================================================================

use axum::http::{Method, StatusCode};
use axum::Router;
use chrono::{Duration, Local};
use serde_json::{json, Value};
use tower::ServiceExt;

use shared_database::Database;
use shared_utils::test_utils::{
    empty_request, json_request, read_body, read_json, sample_patient, sample_vaccine, TestConfig,
};
use vaccine_cell::vaccine_routes;

fn setup() -> (Database, Router) {
    let db = TestConfig::multi_vaccine().database();
    let app = vaccine_routes(db.clone());
    (db, app)
}

async fn create(app: &Router, body: Value) -> Value {
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    read_json(response).await
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect()
}

fn days_from_today(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days)).to_string()
}

#[tokio::test]
async fn test_create_and_get_vaccine() {
    let (_db, app) = setup();

    let created = create(
        &app,
        json!({
            "id": 55,
            "patientName": "Ada",
            "vaccineName": "MMR",
            "patientId": "P-1",
            "dueDate": "2025-03-01",
            "reminderDays": null
        }),
    )
    .await;

    assert_ne!(created["id"], json!(55));
    assert_eq!(created["reminderDays"], json!(0));
    assert_eq!(created["dueDate"], json!("2025-03-01"));

    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, &format!("/{}", created["id"])))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, created);
}

#[tokio::test]
async fn test_get_missing_vaccine_is_empty_not_found() {
    let (_db, app) = setup();

    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, "/31337"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(read_body(response).await.is_empty());
}

#[tokio::test]
async fn test_list_vaccines_latest_first_with_filters() {
    let (_db, app) = setup();
    create(&app, json!({ "patientName": "Ada", "vaccineName": "MMR", "status": "completed" })).await;
    create(
        &app,
        json!({
            "patientName": "Bob",
            "vaccineName": "Polio",
            "status": "pending",
            "dueDate": days_from_today(-3)
        }),
    )
    .await;
    create(
        &app,
        json!({
            "patientName": "Ada",
            "vaccineName": "Polio",
            "status": "upcoming",
            "dueDate": days_from_today(10)
        }),
    )
    .await;

    let all = app.clone().oneshot(empty_request(Method::GET, "/")).await.unwrap();
    assert_eq!(all.status(), StatusCode::OK);
    assert_eq!(ids(&read_json(all).await), vec![3, 2, 1]);

    let polio = app
        .clone()
        .oneshot(empty_request(Method::GET, "/?search=polio"))
        .await
        .unwrap();
    assert_eq!(ids(&read_json(polio).await), vec![3, 2]);

    let overdue = app
        .clone()
        .oneshot(empty_request(Method::GET, "/?status=overdue"))
        .await
        .unwrap();
    assert_eq!(ids(&read_json(overdue).await), vec![2]);

    let ada_upcoming = app
        .clone()
        .oneshot(empty_request(Method::GET, "/?search=ada&status=upcoming"))
        .await
        .unwrap();
    assert_eq!(ids(&read_json(ada_upcoming).await), vec![3]);
}

#[tokio::test]
async fn test_update_overwrites_every_field() {
    let (_db, app) = setup();
    let created = create(
        &app,
        json!({ "patientName": "Ada", "vaccineName": "MMR", "notes": "first dose", "dosage": "0.5ml" }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/{}", id),
            &json!({ "id": 999, "patientName": "Ada", "vaccineName": "MMR", "status": "completed" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = read_json(response).await;
    assert_eq!(updated["id"], json!(id));
    assert_eq!(updated["status"], json!("completed"));
    assert_eq!(updated["notes"], Value::Null);
    assert_eq!(updated["dosage"], Value::Null);
}

#[tokio::test]
async fn test_update_and_delete_missing_vaccine() {
    let (db, app) = setup();

    let update = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/8",
            &json!({ "patientName": "Ghost", "vaccineName": "MMR" }),
        ))
        .await
        .unwrap();
    assert_eq!(update.status(), StatusCode::NOT_FOUND);

    let delete = app
        .clone()
        .oneshot(empty_request(Method::DELETE, "/8"))
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);
    assert_eq!(db.vaccines().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_vaccine() {
    let (db, app) = setup();
    let created = create(&app, json!({ "patientName": "Ada", "vaccineName": "MMR" })).await;

    let response = app
        .clone()
        .oneshot(empty_request(Method::DELETE, &format!("/{}", created["id"])))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(read_body(response).await.is_empty());
    assert_eq!(db.vaccines().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_blank_vaccine_name_is_bad_request() {
    let (db, app) = setup();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/",
            &json!({ "patientName": "Ada", "vaccineName": "" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(db.vaccines().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_second_vaccine_for_patient_conflicts_when_unique() {
    let db = TestConfig::default().database();
    let app = vaccine_routes(db.clone());

    create(&app, json!({ "patientName": "Ada", "vaccineName": "MMR", "patientId": "P-1" })).await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/",
            &json!({ "patientName": "Ada", "vaccineName": "Polio", "patientId": "P-1" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(db.vaccines().count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_log_vaccination_for_registered_patient() {
    let (db, app) = setup();
    let mut patient = sample_patient("CH-7", "Ada");
    patient.card_id = Some("CARD-7".to_string());
    db.patients().save(patient).await.unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/log",
            &json!({ "childId": "CH-7", "vaccine": "BCG" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let logged = read_json(response).await;
    let today = Local::now().date_naive().to_string();
    assert_eq!(logged["patientName"], json!("Ada"));
    assert_eq!(logged["patientId"], json!("CH-7"));
    assert_eq!(logged["cardId"], json!("CARD-7"));
    assert_eq!(logged["vaccineName"], json!("BCG"));
    assert_eq!(logged["status"], json!("completed"));
    assert_eq!(logged["administeredDate"], json!(today));
    assert_eq!(logged["parentName"], json!("John Doe"));
    assert!(logged["batchNumber"].as_str().unwrap().starts_with("AUTO-"));
}

#[tokio::test]
async fn test_log_vaccination_unknown_child_is_not_found() {
    let (db, app) = setup();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/log",
            &json!({ "childId": "NOPE", "vaccine": "BCG" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(db.vaccines().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_stats_and_reminders() {
    let (db, app) = setup();

    let mut soon = sample_vaccine("P-1", "Ada", "MMR");
    soon.due_date = Some(Local::now().date_naive() + Duration::days(2));
    soon.status = Some("upcoming".to_string());
    db.vaccines().save(soon).await.unwrap();

    let mut late = sample_vaccine("P-2", "Bob", "Polio");
    late.due_date = Some(Local::now().date_naive() - Duration::days(4));
    db.vaccines().save(late).await.unwrap();

    let mut done = sample_vaccine("P-3", "Cy", "BCG");
    done.status = Some("completed".to_string());
    db.vaccines().save(done).await.unwrap();

    let mut far = sample_vaccine("P-4", "Dee", "HepB");
    far.due_date = Some(Local::now().date_naive() + Duration::days(60));
    db.vaccines().save(far).await.unwrap();

    let stats = app.clone().oneshot(empty_request(Method::GET, "/stats")).await.unwrap();
    assert_eq!(stats.status(), StatusCode::OK);
    assert_eq!(
        read_json(stats).await,
        json!({ "total": 4, "completed": 1, "upcoming": 1, "overdue": 1 })
    );

    let reminders = app
        .clone()
        .oneshot(empty_request(Method::GET, "/reminders"))
        .await
        .unwrap();
    assert_eq!(reminders.status(), StatusCode::OK);

    let body = read_json(reminders).await;
    let due: Vec<(&str, i64)> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| (r["vaccineName"].as_str().unwrap(), r["daysUntilDue"].as_i64().unwrap()))
        .collect();
    assert_eq!(due, vec![("Polio", -4), ("MMR", 2)]);
}

#[tokio::test]
async fn test_missing_required_fields_are_bad_request() {
    let (db, app) = setup();

    let cases = [
        ("/", json!({ "patientName": "Ada" })),
        ("/", json!({ "patientName": "Ada", "vaccineName": "MMR", "dueDate": "soon" })),
        ("/log", json!({ "vaccine": "BCG" })),
    ];
    for (uri, body) in cases {
        let response = app
            .clone()
            .oneshot(json_request(Method::POST, uri, &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{} {}", uri, body);
        assert!(read_json(response).await["error"].is_string());
    }

    assert_eq!(db.vaccines().count().await.unwrap(), 0);
}
