use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Recipe not found with id: {0}")]
    RecipeNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get a sanitized error message safe for logging
    /// Filters out potentially sensitive information
    pub fn log_safe(&self) -> String {
        match self {
            // Database errors might contain sensitive schema information
            Error::Database(_) => "Database operation failed".to_string(),
            Error::Migration(_) => "Database migration failed".to_string(),

            // HTTP errors might contain internal URLs
            Error::Http(_) => "External HTTP request failed".to_string(),

            Error::Internal(msg) => {
                let lower = msg.to_lowercase();
                if lower.contains("password") || lower.contains("secret") || lower.contains("token")
                {
                    "Internal error (details redacted)".to_string()
                } else {
                    format!("Internal error: {msg}")
                }
            }

            Error::RecipeNotFound(id) => format!("Recipe not found with id: {id}"),
            Error::Io(_) => "File system operation failed".to_string(),
            Error::Config(msg) => format!("Configuration error: {msg}"),
            Error::Validation(msg) => format!("Validation error: {msg}"),
        }
    }

    /// HTTP status this error maps to at the API boundary
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::RecipeNotFound(_) => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Http(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request error: {}", self.log_safe());
        } else {
            tracing::debug!("Request rejected: {}", self.log_safe());
        }

        let error_message = match &self {
            Error::RecipeNotFound(_) => self.to_string(),
            Error::Validation(msg) => msg.clone(),
            Error::Database(_) => "Database error".to_string(),
            Error::Http(_) => "External service error".to_string(),
            _ => "Internal server error".to_string(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
