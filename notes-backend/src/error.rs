use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::db::StoreError;

/// Failures a request handler can end with. Each maps to exactly one status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad path id or unreadable request body
    #[error("{0}")]
    MalformedRequest(String),

    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error("failed to encode response: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        ApiError::MalformedRequest(msg.into())
    }

    /// Short name of the failure, used as the first half of the response body
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MalformedRequest(_) => "MalformedRequest",
            ApiError::Storage(StoreError::Closed) => "StoreClosed",
            ApiError::Storage(_) => "StorageError",
            ApiError::Encoding(_) => "EncodingError",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) | ApiError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("[NOTES] {} : {}", self.kind(), self);
        } else {
            log::warn!("[NOTES] {} : {}", self.kind(), self);
        }

        // One line: newlines inside driver messages would break it
        let message = self.to_string().replace(['\r', '\n'], " ");
        HttpResponse::build(status)
            .content_type(ContentType::plaintext())
            .body(format!("{} : {}\n", self.kind(), message))
    }
}
