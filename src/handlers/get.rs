use crate::error::{in_band, ApiError, ErrorResponse};
use crate::models::{GetQuery, NOT_FOUND};
use crate::routes;
use crate::state::AppState;
use axum::extract::{rejection::QueryRejection, Query, State};

/// GET /redis/get handler - Read a string value
///
/// An absent key reads as the `null (nenalezeno)` sentinel, which cannot be
/// told apart from a stored value with that exact text.
#[utoipa::path(
    get,
    path = routes::REDIS_GET,
    params(GetQuery),
    responses(
        (status = 200, description = "Stored value, `null (nenalezeno)` when absent, or in-band `ERROR: {kind}: {message}` on store failure", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing query parameter", body = ErrorResponse)
    ),
    tag = "redis"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    query: Result<Query<GetQuery>, QueryRejection>,
) -> Result<String, ApiError> {
    let Query(GetQuery { key }) = query?;

    match state.store.get(&key).await {
        Ok(Some(value)) => {
            tracing::info!("Retrieved value for key: {}", key);
            Ok(value)
        }
        Ok(None) => {
            tracing::info!("Key not found: {}", key);
            Ok(NOT_FOUND.to_string())
        }
        Err(e) => Ok(in_band("get", &key, &e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::set::set_handler;
    use crate::store::testing::{FailingStore, MemoryStore};
    use crate::store::{KvStore, StoreError};
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn setup_test_app(store: Arc<dyn KvStore>) -> Router {
        Router::new()
            .route(routes::REDIS_SET, get(set_handler))
            .route(routes::REDIS_GET, get(get_handler))
            .with_state(AppState::new(store))
    }

    async fn call(app: &Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_set_then_get_scenario() {
        let app = setup_test_app(Arc::new(MemoryStore::default()));

        assert_eq!(
            call(&app, "/redis/set?key=a&value=1").await,
            (StatusCode::OK, "OK, uloženo a=1".to_string())
        );
        assert_eq!(
            call(&app, "/redis/get?key=a").await,
            (StatusCode::OK, "1".to_string())
        );
        assert_eq!(
            call(&app, "/redis/get?key=b").await,
            (StatusCode::OK, "null (nenalezeno)".to_string())
        );
    }

    #[tokio::test]
    async fn test_get_returns_latest_value() {
        let app = setup_test_app(Arc::new(MemoryStore::default()));

        call(&app, "/redis/set?key=k&value=first").await;
        call(&app, "/redis/set?key=k&value=second").await;
        call(&app, "/redis/set?key=k&value=second").await;

        let (_, body) = call(&app, "/redis/get?key=k").await;
        assert_eq!(body, "second");
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let app = setup_test_app(Arc::new(MemoryStore::default()));

        let (status, body) = call(&app, "/redis/get?key=never-set").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, NOT_FOUND);
    }

    #[tokio::test]
    async fn test_stored_sentinel_is_indistinguishable() {
        let store = Arc::new(MemoryStore::default());
        store.set("s", NOT_FOUND).await.unwrap();
        let app = setup_test_app(store);

        let (_, stored) = call(&app, "/redis/get?key=s").await;
        let (_, absent) = call(&app, "/redis/get?key=t").await;

        assert_eq!(stored, absent);
    }

    #[tokio::test]
    async fn test_get_store_failure_is_in_band() {
        let store = Arc::new(FailingStore(StoreError::Timeout(
            "Operation timed out".to_string(),
        )));
        let app = setup_test_app(store);

        let (status, body) = call(&app, "/redis/get?key=a").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ERROR: TimeoutError: Operation timed out");
    }

    #[tokio::test]
    async fn test_get_missing_key_param() {
        let app = setup_test_app(Arc::new(MemoryStore::default()));

        let (status, body) = call(&app, "/redis/get").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error_response: ErrorResponse = serde_json::from_str(&body).unwrap();
        assert!(error_response.error.contains("Invalid query parameter"));
    }
}
