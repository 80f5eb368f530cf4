use axum::{routing::get, Router};

use shared_database::Database;

use crate::handlers::*;

pub fn settings_routes(db: Database) -> Router {
    Router::new()
        .route("/", get(get_settings).put(update_settings))
        .with_state(db)
}
