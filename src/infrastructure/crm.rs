//! # CRM API Client
//!
//! Bearer-authenticated client for the application-tracking service.
//! Every call is a single attempt: no retries, no timeout beyond what the
//! transport imposes. Non-2xx responses surface as `ApiError::Remote` with
//! the response body attached.

use reqwest::Client;
use serde::Serialize;

use crate::domain::config::Config;
use crate::domain::traits::CrmApi;
use crate::domain::types::{ApiError, Application, ApplicationStatus};
use async_trait::async_trait;

pub struct CrmClient {
    http: Client,
    base_url: String,
    token: String,
}

/// Body of the status-update endpoint. `comment` serializes as JSON null
/// when absent; the service expects the key to be present.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusUpdateRequest<'a> {
    status: ApplicationStatus,
    manager_id: &'a str,
    comment: Option<&'a str>,
}

impl CrmClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.api_base.clone(),
            token: config.api_token.clone(),
        }
    }

    /// Check the HTTP status and decode the JSON body.
    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error response".to_string());
            return Err(ApiError::Remote {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
}

#[async_trait]
impl CrmApi for CrmClient {
    async fn fetch_new(&self) -> Result<Vec<Application>, ApiError> {
        let url = format!("{}/applications/new", self.base_url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::read_json(response).await
    }

    async fn update_status(
        &self,
        app_id: &str,
        status: ApplicationStatus,
        manager_id: &str,
        comment: Option<&str>,
    ) -> Result<Application, ApiError> {
        let url = format!("{}/applications/{}/status", self.base_url, app_id);
        let body = StatusUpdateRequest {
            status,
            manager_id,
            comment,
        };
        tracing::info!("Updating application {} -> {}", app_id, status);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::read_json(response).await
    }
}
