use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Body written to the intake output in place of a record.
    pub fn to_json(&self) -> Value {
        let message = match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Io(err) => err.to_string(),
            AppError::Internal(msg) => msg.clone(),
        };

        json!({
            "error": message
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(format!("malformed request: {err}"))
    }
}
