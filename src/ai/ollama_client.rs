// External dependencies
use anyhow::Context;
use log::{debug, info};
use reqwest::Client;
use std::time::Duration;
use url::Url;

// Internal dependencies
use super::error::{Result, SubmitError};
use super::request::GenerateRequest;
use super::response::ResponseHandler;
use crate::config::Settings;

pub struct OllamaClient {
    client: Client,
    handler: ResponseHandler,
}

// ============================================================================
// Client Implementation
// ============================================================================

impl OllamaClient {
    /// Creates a client with the stack's default timeout behaviour.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_timeout(None)
    }

    /// Creates a client honouring `connection.timeout_secs` (0 means none).
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let timeout = match settings.connection.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        Self::with_timeout(timeout)
    }

    fn with_timeout(timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            handler: ResponseHandler::new(),
        })
    }

    // ========================================================================
    // Generation
    // ========================================================================

    /// Sends one non-streaming generate request and returns the full text.
    pub async fn post_generate(&self, url: &str, request: &GenerateRequest) -> Result<String> {
        // Malformed host/port only surfaces here
        let url = Url::parse(url).map_err(|e| SubmitError::network(format!("{e}: {url}")))?;

        debug!(
            "Sending request to {url}, model: {}, prompt length: {}",
            request.model,
            request.prompt.len()
        );

        let response = self.client.post(url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!("Generate request failed: {status}");
            return Err(SubmitError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let text = self.handler.extract_text(&body)?;

        info!("Generation completed for model {}", request.model);
        Ok(text)
    }
}
