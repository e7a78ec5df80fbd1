//! The contract between generator components and the pipeline runtime.
//!
//! Components declare their output shape statically so the pipeline graph
//! can type-check connections before anything executes, and expose exactly
//! one typed call.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use takeoff::GenerationParams;

use crate::error::GeneratorError;

/// Output record produced by a generator component.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Reply {
    /// Generated texts, one entry per completion.
    pub replies: Vec<String>,
    /// Per-reply metadata, kept for framework compatibility.
    pub metadata: Vec<Map<String, Value>>,
}

/// Value kinds an output socket can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    StringList,
    MetadataList,
}

/// One named output socket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputField {
    pub name: &'static str,
    pub kind: OutputKind,
}

/// Static output declaration used by the pipeline graph for type checking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputSchema {
    pub fields: &'static [OutputField],
}

impl OutputSchema {
    pub fn field(&self, name: &str) -> Option<&OutputField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A text-generation pipeline component.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Output shape the pipeline graph should expect from [`Generator::run`].
    fn output_schema(&self) -> &'static OutputSchema;

    /// Generate a reply for `prompt`, overlaying `params` on the instance
    /// defaults for this call only.
    async fn run(
        &self,
        prompt: &str,
        params: Option<GenerationParams>,
    ) -> Result<Reply, GeneratorError>;
}
