use crate::models::RootResponse;
use axum::Json;
use tracing::debug;

/// Root liveness endpoint returning the service greeting
pub async fn root() -> Json<RootResponse> {
    debug!("Root greeting requested");
    Json(RootResponse {
        message: "Smart Kitchen Assistant API".to_string(),
    })
}
