//! HTTP error mapping.
//!
//! Every failed request ends in one of the terminal states and a plain
//! `{message}` body: 400 for validation failures, 404 for missing posts,
//! 500 for storage failures. Storage detail is logged, never returned.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use quill_core::StoreError;
use quill_core::domain::ValidationError;
use quill_shared::MessageResponse;

/// Application-level error type mapped onto the response surface.
#[derive(Debug)]
pub enum AppError {
    /// Payload rejected by the validation gate.
    Validation(ValidationError),
    /// The requested post id does not exist.
    NotFound(&'static str),
    /// The store failed; `action` is the operation verb for the client
    /// message, `detail` stays server-side.
    Storage {
        action: &'static str,
        detail: String,
    },
}

impl AppError {
    /// Wrap a store failure for the given operation verb.
    pub fn storage(action: &'static str, err: StoreError) -> Self {
        Self::Storage {
            action,
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(err) => write!(f, "{err}"),
            AppError::NotFound(message) => f.write_str(message),
            AppError::Storage { action, .. } => {
                write!(f, "Server could not {action} post because database connection")
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Storage { action, detail } = self {
            tracing::error!("Storage failure during {action}: {detail}");
        }

        HttpResponse::build(self.status_code()).json(MessageResponse::new(self.to_string()))
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
