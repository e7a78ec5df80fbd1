//! HTTP client for the Takeoff generate endpoint.
//!
//! [`TakeoffClient`] implements the [`InferenceClient`] trait. It posts a
//! prompt together with [`GenerationParams`] to a running Takeoff instance
//! and returns the generated text.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::TakeoffError;
use crate::params::GenerationParams;

/// Interface for a single-shot text generation call against an inference
/// server.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, TakeoffError>;
}

/// Client bound to one Takeoff server instance over HTTP.
pub struct TakeoffClient {
    base_url: String,
    port: u16,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    text: &'a str,
    #[serde(flatten)]
    params: &'a GenerationParams,
}

impl TakeoffClient {
    /// Bind a client to `base_url:port`.
    ///
    /// Configuration is validated here; no request is made until
    /// [`InferenceClient::generate`] is called.
    pub fn new(base_url: impl Into<String>, port: u16) -> Result<Self, TakeoffError> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(TakeoffError::Config("base url must not be empty".into()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(TakeoffError::Config(format!(
                "base url must include an http scheme: {base_url}"
            )));
        }
        if port == 0 {
            return Err(TakeoffError::Config("port must be non-zero".into()));
        }
        Ok(Self {
            base_url,
            port,
            client: reqwest::Client::new(),
        })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}:{}/generate",
            self.base_url.trim_end_matches('/'),
            self.port
        )
    }
}

#[async_trait]
impl InferenceClient for TakeoffClient {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, TakeoffError> {
        let url = self.generate_url();
        log::debug!("POST {url}");
        let resp = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                text: prompt,
                params,
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TakeoffError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.json::<serde_json::Value>().await?;
        match body.get("text").and_then(|t| t.as_str()) {
            Some(text) => Ok(text.to_string()),
            None => Err(TakeoffError::MissingText),
        }
    }
}
