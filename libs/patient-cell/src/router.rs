use axum::{routing::get, Router};

use shared_database::Database;

use crate::handlers::*;

pub fn patient_routes(db: Database) -> Router {
    Router::new()
        .route("/", get(list_patients).post(create_patient))
        .route("/search", get(search_patients))
        .route("/by-patient-id/{patient_id}", get(get_patient_by_patient_id))
        .route("/by-card-id/{card_id}", get(get_patient_by_card_id))
        .route("/{id}", get(get_patient).put(update_patient).delete(delete_patient))
        .with_state(db)
}
