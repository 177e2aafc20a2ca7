use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Domain errors surfaced to clients as `{"error": "<message>"}` bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("user not found")]
    UserNotFound,
    #[error("advertisement not found")]
    AdvertisementNotFound,
    // clients match on this exact message, typo included
    #[error("user alredy exists")]
    UserExists,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::UserNotFound | ApiError::AdvertisementNotFound => StatusCode::NOT_FOUND,
            ApiError::UserExists => StatusCode::CONFLICT,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "internal error");
            "internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            ApiError::UserNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::AdvertisementNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn conflict_maps_to_409() {
        assert_eq!(
            ApiError::UserExists.into_response().status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn credential_and_validation_statuses() {
        assert_eq!(
            ApiError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Validation("bad input".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn wire_messages_match_documented_bodies() {
        assert_eq!(ApiError::UserNotFound.to_string(), "user not found");
        assert_eq!(
            ApiError::AdvertisementNotFound.to_string(),
            "advertisement not found"
        );
        assert_eq!(ApiError::UserExists.to_string(), "user alredy exists");
    }

    #[test]
    fn internal_errors_map_to_500() {
        let err = ApiError::Internal(anyhow::anyhow!("boom"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
