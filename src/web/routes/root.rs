use std::sync::Arc;

use axum::{extract::State, response::Redirect, Json};
use serde_json::Value;

use crate::database::activity_registry::ActivityRegistry;

pub const INDEX_PATH: &str = "/static/index.html";

pub async fn index_redirect() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

pub async fn health_handler(State(registry): State<Arc<ActivityRegistry>>) -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "activities": registry.len(),
    }))
}
