use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::GreetingResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "redis-greeter API",
        version = "1.0.0",
        description = "A greeting plus string set/get over Redis. Store failures are reported in the response text with status 200."
    ),
    paths(
        handlers::greeting::greeting_handler,
        handlers::health::health_handler,
        handlers::set::set_handler,
        handlers::get::get_handler
    ),
    components(
        schemas(
            GreetingResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "greeting", description = "Static greeting"),
        (name = "health", description = "Health check operations"),
        (name = "redis", description = "Key-value operations against Redis")
    )
)]
pub struct ApiDoc;
