use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Hello from the cloud 👋";

/// Body returned by the absent-key read
pub const NOT_FOUND: &str = "null (nenalezeno)";

/// Response type for the greeting endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct GreetingResponse {
    pub message: String,
}

/// Query parameters for the set endpoint
#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SetQuery {
    /// Key to write
    pub key: String,
    /// Value to store under the key
    pub value: String,
}

/// Query parameters for the get endpoint
#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetQuery {
    /// Key to read
    pub key: String,
}
