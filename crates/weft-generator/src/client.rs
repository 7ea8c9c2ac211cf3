use std::time::Duration;

use reqwest::Client;
use tracing::{error, info, instrument};
use url::Url;

use crate::error::GeneratorError;
use crate::types::{ErrorResponse, GenerateRequest, GenerateResponse, GeneratedWorkflow};

/// Where the editor serves its generator route during local development.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/generate-workflow";

/// Generation is a model call and routinely takes several seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for [`GeneratorClient`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
  pub endpoint: Url,
  pub timeout: Duration,
}

impl GeneratorConfig {
  /// Parse `endpoint` and use the default timeout.
  pub fn new(endpoint: &str) -> Result<Self, GeneratorError> {
    let endpoint = Url::parse(endpoint).map_err(|source| GeneratorError::InvalidEndpoint {
      endpoint: endpoint.to_string(),
      source,
    })?;
    Ok(Self {
      endpoint,
      timeout: DEFAULT_TIMEOUT,
    })
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }
}

/// HTTP client for the graph generator.
#[derive(Debug, Clone)]
pub struct GeneratorClient {
  client: Client,
  endpoint: Url,
}

impl GeneratorClient {
  pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self {
      client,
      endpoint: config.endpoint,
    })
  }

  pub fn endpoint(&self) -> &Url {
    &self.endpoint
  }

  /// Ask the generator for a graph matching `prompt`.
  ///
  /// The returned proposal is unvalidated; see
  /// [`GeneratedWorkflow::into_graph`].
  #[instrument(name = "generator_generate", skip(self, prompt), fields(endpoint = %self.endpoint))]
  pub async fn generate(&self, prompt: &str) -> Result<GeneratedWorkflow, GeneratorError> {
    if prompt.trim().is_empty() {
      return Err(GeneratorError::EmptyPrompt);
    }

    info!(prompt_len = prompt.len(), "generation_requested");

    let response = self
      .client
      .post(self.endpoint.clone())
      .json(&GenerateRequest { prompt })
      .send()
      .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
      // Prefer the service's own message over the bare status line
      let message = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .and_then(|r| r.error)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
      error!(status = status.as_u16(), error = %message, "generation_failed");
      return Err(GeneratorError::Status {
        status: status.as_u16(),
        message,
      });
    }

    let response: GenerateResponse =
      serde_json::from_str(&body).map_err(|e| GeneratorError::MalformedResponse {
        message: e.to_string(),
      })?;

    let workflow = response.workflow;
    info!(
      nodes = workflow.nodes.len(),
      edges = workflow.edges.len(),
      "generation_completed"
    );
    Ok(workflow)
  }
}
