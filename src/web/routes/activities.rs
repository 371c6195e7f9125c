use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::database::activity_registry::{ActivityRegistry, SignupError};
use crate::models::{ActivityMap, SignupConfirmation};
use crate::services::activities_service;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn activities_handler(
    State(registry): State<Arc<ActivityRegistry>>,
) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&registry))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Result<Json<SignupConfirmation>, (StatusCode, Json<Value>)> {
    let Query(query) = query.map_err(|rejection| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "detail": rejection.body_text() })),
        )
    })?;

    activities_service::signup(&registry, &activity_name, &query.email)
        .map(Json)
        .map_err(|e| {
            (
                signup_error_status(&e),
                Json(serde_json::json!({ "detail": e.to_string() })),
            )
        })
}

fn signup_error_status(err: &SignupError) -> StatusCode {
    match err {
        SignupError::ActivityNotFound => StatusCode::NOT_FOUND,
        SignupError::AlreadySignedUp | SignupError::ActivityFull => StatusCode::BAD_REQUEST,
    }
}
