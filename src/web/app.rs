use std::path::Path;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::database::activity_registry::ActivityRegistry;
use crate::web::middleware::request_log;
use crate::web::routes::{activities, root};

pub fn build_router(registry: Arc<ActivityRegistry>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(root::index_redirect))
        .route("/health", get(root::health_handler))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .nest_service("/static", get_service(ServeDir::new(static_dir.as_ref())))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(middleware::from_fn(request_log::log_requests))
        .layer(CatchPanicLayer::new())
        .with_state(registry)
}
