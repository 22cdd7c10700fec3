//! HTTP client for the downstream GraphQL endpoint.

use serde::Deserialize;

use crate::config::GraphConfig;
use crate::error::{LoadError, Result};

/// Shape of a GraphQL HTTP response: optional data, optional errors.
#[derive(Debug, Deserialize)]
struct GraphResponse {
    #[serde(default)]
    #[allow(dead_code)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<GraphResponseError>>,
}

#[derive(Debug, Deserialize)]
struct GraphResponseError {
    message: String,
}

/// Thin client that POSTs `{query: <mutation>}` to a GraphQL endpoint.
///
/// Clone is cheap (reqwest's inner connection pool is shared).
#[derive(Clone)]
pub struct GraphClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphClient {
    pub fn new(config: &GraphConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one mutation. `Err` means this mutation failed, whether by
    /// transport or by remote validation; the caller decides whether to
    /// continue with siblings.
    pub async fn execute(&self, mutation: &str) -> Result<()> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&serde_json::json!({ "query": mutation }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::EndpointStatus {
                status: status.as_u16(),
            });
        }

        let body: GraphResponse = response.json().await?;
        if let Some(errors) = body.errors {
            if !errors.is_empty() {
                let messages: Vec<_> = errors.into_iter().map(|e| e.message).collect();
                return Err(LoadError::Remote(messages.join("; ")));
            }
        }

        Ok(())
    }
}
