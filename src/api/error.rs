use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use super::models::ErrorBody;
use crate::errors::QuizError;

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        match self {
            QuizError::Invalid(_) | QuizError::DuplicateKey { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody { error: self.to_string() }),
            )
                .into_response(),
            QuizError::NotFound | QuizError::MalformedRequest => StatusCode::NOT_FOUND.into_response(),
            QuizError::Storage(e) => {
                log::error!("Storage failure: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody { error: "Internal server error".to_string() }),
                )
                    .into_response()
            }
        }
    }
}
