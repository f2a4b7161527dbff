//! Fly GraphQL client

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::config::api;
use crate::error::{FlyError, Result};

/// GraphQL response envelope
#[derive(Deserialize, Debug)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

/// Single entry of the GraphQL `errors` array
#[derive(Deserialize, Debug, Clone)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<GraphQlErrorExtensions>,
}

/// Error extensions (only the code is used)
#[derive(Deserialize, Debug, Clone)]
pub struct GraphQlErrorExtensions {
    pub code: Option<String>,
}

impl GraphQlError {
    fn is_not_found(&self) -> bool {
        self.extensions
            .as_ref()
            .and_then(|e| e.code.as_deref())
            .is_some_and(|code| code == api::NOT_FOUND_CODE)
    }
}

/// Map a non-empty GraphQL `errors` array to a `FlyError`
fn errors_to_fly_error(errors: &[GraphQlError]) -> FlyError {
    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");

    if errors.iter().any(GraphQlError::is_not_found) {
        FlyError::NotFound(message)
    } else {
        FlyError::GraphQl(message)
    }
}

/// Fly API client
pub struct FlyClient {
    client: Client,
    token: String,
    base_url: String,
}

impl FlyClient {
    /// Create a new client for the given API base URL
    pub fn new(token: String, base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the GraphQL endpoint
    pub(crate) fn graphql_url(&self) -> String {
        format!("{}{}", self.base_url, api::GRAPHQL_PATH)
    }

    /// Create a POST request builder with standard headers
    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
    }

    /// Execute a GraphQL document and decode its `data` field
    ///
    /// `error_context` describes the operation for error messages
    /// (e.g. "fetch organization 'acme'").
    pub async fn graphql<T>(
        &self,
        query: &str,
        variables: serde_json::Value,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.graphql_url();
        debug!("GraphQL request to {}: {}", url, error_context);

        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let response = self.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(FlyError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to {}", error_context),
            });
        }

        let envelope: GraphQlResponse = response.json().await?;

        if !envelope.errors.is_empty() {
            debug!(
                "GraphQL returned {} error(s) for {}",
                envelope.errors.len(),
                error_context
            );
            return Err(errors_to_fly_error(&envelope.errors));
        }

        let data = envelope.data.ok_or_else(|| {
            FlyError::GraphQl(format!("Empty response while trying to {}", error_context))
        })?;

        Ok(serde_json::from_value(data)?)
    }
}

#[cfg(test)]
impl FlyClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-token".to_string(), base_url.to_string())
    }
}
