//! Generator component that runs prompts on a Takeoff server.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use takeoff::{GenerationParams, InferenceClient, TakeoffClient};

use crate::component::{Generator, OutputField, OutputKind, OutputSchema, Reply};
use crate::error::GeneratorError;

pub const DEFAULT_BASE_URL: &str = "http://localhost";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONSUMER_GROUP: &str = "primary";

static OUTPUT_SCHEMA: OutputSchema = OutputSchema {
    fields: &[
        OutputField {
            name: "replies",
            kind: OutputKind::StringList,
        },
        OutputField {
            name: "metadata",
            kind: OutputKind::MetadataList,
        },
    ],
};

/// Construction-time settings for a [`TakeoffGenerator`].
///
/// Immutable once the generator is built; call-time parameters are overlaid
/// per call and never written back.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub base_url: String,
    pub port: u16,
    pub consumer_group: String,
    pub generation_params: GenerationParams,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            port: DEFAULT_PORT,
            consumer_group: DEFAULT_CONSUMER_GROUP.to_string(),
            generation_params: GenerationParams::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_consumer_group(mut self, group: impl Into<String>) -> Self {
        self.consumer_group = group.into();
        self
    }

    pub fn with_generation_params(mut self, params: GenerationParams) -> Self {
        self.generation_params = params;
        self
    }
}

/// [`Generator`] implementation backed by one Takeoff server instance.
pub struct TakeoffGenerator {
    consumer_group: String,
    defaults: GenerationParams,
    client: Arc<dyn InferenceClient>,
}

impl std::fmt::Debug for TakeoffGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TakeoffGenerator")
            .field("consumer_group", &self.consumer_group)
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl TakeoffGenerator {
    /// Build a generator bound to the server described by `config`.
    ///
    /// Constructs the underlying [`TakeoffClient`]; no network activity
    /// happens until [`Generator::run`].
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        let client = TakeoffClient::new(config.base_url, config.port)
            .map_err(|e| GeneratorError::Config(e.to_string()))?;
        Ok(Self::from_client(
            Arc::new(client),
            config.consumer_group,
            config.generation_params,
        ))
    }

    /// Build a generator around an existing client backend.
    pub fn from_client(
        client: Arc<dyn InferenceClient>,
        consumer_group: impl Into<String>,
        defaults: GenerationParams,
    ) -> Self {
        Self {
            consumer_group: consumer_group.into(),
            defaults,
            client,
        }
    }

    /// Overlay call-time parameters on the defaults and force the routing
    /// label to this instance's consumer group.
    fn merged_params(&self, overrides: Option<&GenerationParams>) -> GenerationParams {
        let merged = match overrides {
            Some(overrides) => self.defaults.merge(overrides),
            None => self.defaults.clone(),
        };
        merged.with_consumer_group(self.consumer_group.clone())
    }
}

#[async_trait]
impl Generator for TakeoffGenerator {
    fn output_schema(&self) -> &'static OutputSchema {
        &OUTPUT_SCHEMA
    }

    async fn run(
        &self,
        prompt: &str,
        params: Option<GenerationParams>,
    ) -> Result<Reply, GeneratorError> {
        if prompt.trim().is_empty() {
            return Err(GeneratorError::EmptyPrompt);
        }
        let params = self.merged_params(params.as_ref());
        debug!("dispatching prompt to consumer group {}", self.consumer_group);
        let text = self.client.generate(prompt, &params).await?;
        Ok(Reply {
            replies: vec![text],
            metadata: Vec::new(),
        })
    }
}
