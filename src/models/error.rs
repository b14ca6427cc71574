use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for an error
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: u16,
    pub status: String,
    pub error: String,
}

impl ErrorResponse {
    /// Build an error payload mirroring the HTTP status it is sent with
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            status: status.to_string(),
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_mirrors_the_status() {
        let response = ErrorResponse::new(StatusCode::UNPROCESSABLE_ENTITY, "missing field");
        assert_eq!(response.code, 422);
        assert_eq!(response.status, "422 Unprocessable Entity");
        assert_eq!(response.error, "missing field");
    }
}
