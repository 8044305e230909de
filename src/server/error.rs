use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorBody;

pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const INVALID_REQUEST_TYPE: &str = "Invalid request type";
pub const GENERATION_FAILED: &str = "Failed to generate content";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request type")]
    InvalidRequestType,

    /// Carries the underlying failure message as `details`.
    #[error("Failed to generate content: {0}")]
    Generation(String),
}

impl ApiError {
    pub fn body(&self) -> ErrorBody {
        match self {
            ApiError::MethodNotAllowed => ErrorBody::new(METHOD_NOT_ALLOWED),
            ApiError::InvalidRequestType => ErrorBody::new(INVALID_REQUEST_TYPE),
            ApiError::Generation(details) => {
                let details = if details.trim().is_empty() {
                    "An unknown error occurred"
                } else {
                    details.as_str()
                };
                ErrorBody::new(GENERATION_FAILED).with_details(details)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidRequestType => StatusCode::BAD_REQUEST,
            ApiError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}
