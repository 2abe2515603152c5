use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{get_handler, greeting_handler, health_handler, set_handler};
use crate::routes;
use crate::state::AppState;

/// Build the application router with all routes, docs and request tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(routes::ROOT, get(greeting_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::REDIS_SET, get(set_handler))
        .route(routes::REDIS_GET, get(get_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
