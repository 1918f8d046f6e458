use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] np_core::Error);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            np_core::Error::NotFound(_) => StatusCode::NOT_FOUND,
            np_core::Error::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from(np_core::Error::NotFound("x".into())).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(np_core::Error::InvalidParameter("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(np_core::Error::Config("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
