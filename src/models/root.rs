use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Greeting returned by the root liveness endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}
