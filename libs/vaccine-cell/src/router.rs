use axum::{
    routing::{get, post},
    Router,
};

use shared_database::Database;

use crate::handlers::*;

pub fn vaccine_routes(db: Database) -> Router {
    Router::new()
        .route("/", get(list_vaccines).post(create_vaccine))
        .route("/log", post(log_vaccination))
        .route("/stats", get(vaccine_stats))
        .route("/reminders", get(vaccine_reminders))
        .route("/{id}", get(get_vaccine).put(update_vaccine).delete(delete_vaccine))
        .with_state(db)
}
