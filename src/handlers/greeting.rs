use crate::models::{GreetingResponse, GREETING};
use crate::routes;
use axum::Json;

/// GET / handler - Fixed greeting
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Greeting", body = GreetingResponse)
    ),
    tag = "greeting"
)]
pub async fn greeting_handler() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: GREETING.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route(routes::ROOT, get(greeting_handler))
    }

    #[tokio::test]
    async fn test_greeting() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Hello from the cloud 👋" }));
    }

    #[tokio::test]
    async fn test_greeting_ignores_request_content() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/?name=someone&x=1")
                    .header("content-type", "application/json")
                    .body(Body::from("{\"ignored\": true}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let greeting: GreetingResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(greeting.message, GREETING);
    }
}
