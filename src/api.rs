//! HTTP client for the graph API.
//!
//! Three read-only operations against a fixed origin. Every call is a fresh
//! round trip: no retry, caching, batching, or authentication.

use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::models::{NodeSummary, NodeWithRelationships, RelationshipRow};

/// Client for the graph API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    origin: String,
}

impl ApiClient {
    /// Create a client against the given origin (e.g. `http://localhost:8199`).
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: origin.into(),
        }
    }

    /// List all nodes: `GET /api/nodes`.
    pub async fn list_nodes(&self) -> Result<Vec<NodeSummary>, AppError> {
        self.get_json("api/nodes").await
    }

    /// List all relationships: `GET /api/relationships`.
    pub async fn list_relationships(&self) -> Result<Vec<RelationshipRow>, AppError> {
        self.get_json("api/relationships").await
    }

    /// Fetch one node with its connections: `GET /api/nodes/{id}`.
    pub async fn node_with_relationships(
        &self,
        id: i64,
    ) -> Result<NodeWithRelationships, AppError> {
        self.get_json(&format!("api/nodes/{id}")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.compose_url(path);
        tracing::debug!("GET {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status { status, url });
        }
        Ok(response.json().await?)
    }

    fn compose_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.origin.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
