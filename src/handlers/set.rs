use crate::error::{in_band, ApiError, ErrorResponse};
use crate::models::SetQuery;
use crate::routes;
use crate::state::AppState;
use axum::extract::{rejection::QueryRejection, Query, State};

/// GET /redis/set handler - Store a string value
///
/// Store failures are answered with `200 OK` and an `ERROR: ...` body.
#[utoipa::path(
    get,
    path = routes::REDIS_SET,
    params(SetQuery),
    responses(
        (status = 200, description = "Confirmation, or in-band `ERROR: {kind}: {message}` on store failure", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing query parameter", body = ErrorResponse)
    ),
    tag = "redis"
)]
pub async fn set_handler(
    State(state): State<AppState>,
    query: Result<Query<SetQuery>, QueryRejection>,
) -> Result<String, ApiError> {
    let Query(SetQuery { key, value }) = query?;

    match state.store.set(&key, &value).await {
        Ok(()) => {
            tracing::info!("Stored value for key: {}", key);
            Ok(format!("OK, uloženo {}={}", key, value))
        }
        Err(e) => Ok(in_band("set", &key, &e)),
    }
}
