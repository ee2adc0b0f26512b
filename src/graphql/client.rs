//! GraphQL client
//!
//! Direct HTTP client for executing operations against the managed GraphQL
//! endpoint. The `GraphQlApi` trait is the seam the orchestrator consumes:
//! it is object-safe so tests can substitute a recording stub for the HTTP
//! implementation.

use crate::config::GraphQlConfig;
use crate::error::AppError;
use crate::graphql::operations::Operation;
use crate::graphql::types::{GraphQlRequest, GraphQlResponse};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// One authenticated request/response round trip per call
///
/// Implementations perform `execute(operation, variables) -> data` against a
/// schema exposing the five record kinds and their relations. The returned
/// value is the response's `data` object, keyed by operation name.
#[async_trait]
pub trait GraphQlApi: Send + Sync {
    /// Execute one GraphQL operation with the given variables
    async fn execute(&self, operation: &Operation, variables: Value) -> Result<Value, AppError>;
}

/// HTTP implementation of [`GraphQlApi`] backed by a shared reqwest client
pub struct HttpGraphQlClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpGraphQlClient {
    /// Build a client from configuration
    ///
    /// # Errors
    /// Returns `AppError::Config` if the endpoint or API key is empty, or if
    /// the underlying HTTP client cannot be constructed.
    pub fn new(config: &GraphQlConfig) -> Result<Self, AppError> {
        if config.endpoint.is_empty() {
            return Err(AppError::Config(
                "GRAPHQL_ENDPOINT is not set".to_string(),
            ));
        }
        if config.api_key.is_empty() {
            return Err(AppError::Config("GRAPHQL_API_KEY is not set".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl GraphQlApi for HttpGraphQlClient {
    async fn execute(&self, operation: &Operation, variables: Value) -> Result<Value, AppError> {
        let request_body = GraphQlRequest {
            query: operation.document,
            variables,
        };

        tracing::debug!(
            operation = operation.name,
            endpoint = %self.endpoint,
            "Executing GraphQL operation"
        );

        // POST using the shared client (connection pooling)
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|source| AppError::Transport {
                operation: operation.name,
                source,
            })?;

        // Check HTTP status
        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());

            tracing::error!(
                operation = operation.name,
                status_code = status_code,
                error_body = %error_body,
                "GraphQL endpoint returned error status"
            );

            return Err(AppError::Status {
                operation: operation.name,
                status: status_code,
                body: error_body,
            });
        }

        // Parse response body
        let response_body = response.text().await.map_err(|source| AppError::Transport {
            operation: operation.name,
            source,
        })?;

        let parsed: GraphQlResponse =
            serde_json::from_str(&response_body).map_err(|e| AppError::MalformedResponse {
                operation: operation.name,
                detail: format!("invalid JSON: {} - body: {}", e, response_body),
            })?;

        // GraphQL-level errors take precedence over partial data
        if let Some(errors) = parsed.errors {
            if !errors.is_empty() {
                let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
                tracing::error!(
                    operation = operation.name,
                    errors = ?messages,
                    "GraphQL operation returned errors"
                );
                return Err(AppError::Api {
                    operation: operation.name,
                    messages,
                });
            }
        }

        let data = parsed.data.ok_or_else(|| AppError::MalformedResponse {
            operation: operation.name,
            detail: "response contains no data".to_string(),
        })?;

        tracing::debug!(operation = operation.name, "GraphQL operation succeeded");

        Ok(data)
    }
}
