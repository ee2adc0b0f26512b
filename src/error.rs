//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::graphql::types::RecordKind;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration is missing or invalid (e.g., empty endpoint URL)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The HTTP request to the GraphQL endpoint could not be sent or completed
    #[error("Transport error during {operation}: {source}")]
    Transport {
        /// Name of the GraphQL operation that was being executed
        operation: &'static str,
        /// Underlying reqwest error
        #[source]
        source: reqwest::Error,
    },

    /// The GraphQL endpoint returned a non-success HTTP status
    #[error("GraphQL endpoint returned status {status} for {operation}: {body}")]
    Status {
        /// Name of the GraphQL operation that was being executed
        operation: &'static str,
        /// HTTP status code returned by the endpoint
        status: u16,
        /// Error body returned by the endpoint
        body: String,
    },

    /// The GraphQL response carried an `errors` payload
    #[error("GraphQL operation {operation} failed: {}", .messages.join("; "))]
    Api {
        /// Name of the GraphQL operation that was being executed
        operation: &'static str,
        /// All error messages from the response payload
        messages: Vec<String>,
    },

    /// The GraphQL response body could not be interpreted
    #[error("Malformed response for {operation}: {detail}")]
    MalformedResponse {
        /// Name of the GraphQL operation that was being executed
        operation: &'static str,
        /// What was wrong with the body
        detail: String,
    },

    /// A create step's result lacked the record it was expected to return,
    /// so the dependent sequence cannot continue
    #[error("{operation} returned no {kind} record to continue with")]
    MissingIdentifier {
        /// Record kind the sequence needed an identifier for
        kind: RecordKind,
        /// Name of the create operation whose result was incomplete
        operation: &'static str,
    },

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::Transport { .. } => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::Status { .. } => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::Api { .. } => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::MalformedResponse { .. } => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::MissingIdentifier { .. } => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
