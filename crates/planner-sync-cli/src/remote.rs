use async_trait::async_trait;
use planner_sync::orchestrator::{Credential, Orchestrator, OrchestratorError};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

/// [`Orchestrator`] implementation speaking HTTP to the orchestrator's REST
/// API.
pub struct RemoteOrchestrator {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CredentialResponse {
    username: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct ConstantResponse {
    value: String,
}

#[derive(Debug, Serialize)]
struct BulkEnqueueRequest<'a> {
    references: &'a [String],
    data: &'a [String],
}

impl RemoteOrchestrator {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key,
        }
    }

    /// Build from configuration, reading the API key from the configured
    /// environment variable when it is set.
    pub fn from_config(config: &AppConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env).ok();
        Self::new(&config.orchestrator_url, api_key)
    }

    fn authorize(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {key}"));
        }
        request
    }
}

#[async_trait]
impl Orchestrator for RemoteOrchestrator {
    async fn get_credential(&self, name: &str) -> Result<Credential, OrchestratorError> {
        let url = format!("{}/api/credentials/{name}", self.base_url);

        let failure = |reason: String| OrchestratorError::Credential {
            name: name.to_owned(),
            reason,
        };

        let response = self
            .authorize(self.http.get(&url))
            .send()
            .await
            .map_err(|e| failure(e.to_string()))?;

        if !response.status().is_success() {
            return Err(failure(format!("HTTP {}", response.status())));
        }

        let body: CredentialResponse = response
            .json()
            .await
            .map_err(|e| failure(e.to_string()))?;

        Ok(Credential {
            username: body.username,
            password: body.password,
        })
    }

    async fn get_constant(&self, name: &str) -> Result<String, OrchestratorError> {
        let url = format!("{}/api/constants/{name}", self.base_url);

        let failure = |reason: String| OrchestratorError::Constant {
            name: name.to_owned(),
            reason,
        };

        let response = self
            .authorize(self.http.get(&url))
            .send()
            .await
            .map_err(|e| failure(e.to_string()))?;

        if !response.status().is_success() {
            return Err(failure(format!("HTTP {}", response.status())));
        }

        let body: ConstantResponse = response
            .json()
            .await
            .map_err(|e| failure(e.to_string()))?;

        Ok(body.value)
    }

    async fn bulk_enqueue(
        &self,
        queue: &str,
        references: &[String],
        payloads: &[String],
    ) -> Result<(), OrchestratorError> {
        let url = format!("{}/api/queues/{queue}/elements", self.base_url);

        let response = self
            .authorize(self.http.post(&url).json(&BulkEnqueueRequest {
                references,
                data: payloads,
            }))
            .send()
            .await
            .map_err(|e| OrchestratorError::Queue(e.to_string()))?;

        if !response.status().is_success() {
            return Err(OrchestratorError::Queue(format!(
                "HTTP {}",
                response.status()
            )));
        }

        Ok(())
    }

    fn log_trace(&self, message: &str) {
        tracing::trace!("{message}");
    }
}
