use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Model API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model returned no content")]
    EmptyResponse,

    #[error("Malformed model output: {0}")]
    MalformedOutput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => GenerationError::Api {
                status: status.as_u16(),
                message: e.to_string(),
            },
            None => GenerationError::Request(e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
