//! Decoding parameters recognized by the Takeoff generate endpoint.

use serde::{Deserialize, Serialize};

/// Parameters forwarded with a generate request.
///
/// Every field is optional; `None` fields are omitted from the request body
/// entirely so the server falls back to its own defaults. Value validation
/// (ranges, combinations) is left to the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Softmax temperature applied during sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling_temperature: Option<f64>,
    /// Nucleus sampling probability threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling_topp: Option<f64>,
    /// Restrict sampling to the `k` most likely tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling_topk: Option<u32>,
    /// Upper bound on generated tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_new_tokens: Option<u32>,
    /// Lower bound on generated tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_new_tokens: Option<u32>,
    /// Penalty applied to tokens already present in the output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f64>,
    /// Forbid repeating n-grams of this size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_repeat_ngram_size: Option<u32>,
    /// Routing label selecting the server-side model pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_group: Option<String>,
}

impl GenerationParams {
    /// Parameters with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sampling_temperature(mut self, value: f64) -> Self {
        self.sampling_temperature = Some(value);
        self
    }

    pub fn with_sampling_topp(mut self, value: f64) -> Self {
        self.sampling_topp = Some(value);
        self
    }

    pub fn with_sampling_topk(mut self, value: u32) -> Self {
        self.sampling_topk = Some(value);
        self
    }

    pub fn with_max_new_tokens(mut self, value: u32) -> Self {
        self.max_new_tokens = Some(value);
        self
    }

    pub fn with_min_new_tokens(mut self, value: u32) -> Self {
        self.min_new_tokens = Some(value);
        self
    }

    pub fn with_repetition_penalty(mut self, value: f64) -> Self {
        self.repetition_penalty = Some(value);
        self
    }

    pub fn with_no_repeat_ngram_size(mut self, value: u32) -> Self {
        self.no_repeat_ngram_size = Some(value);
        self
    }

    pub fn with_consumer_group(mut self, group: impl Into<String>) -> Self {
        self.consumer_group = Some(group.into());
        self
    }

    /// Overlay `overrides` on top of `self`, field by field.
    ///
    /// `Some` fields in `overrides` win; `None` fields fall back to `self`.
    /// Neither input is modified.
    pub fn merge(&self, overrides: &GenerationParams) -> GenerationParams {
        GenerationParams {
            sampling_temperature: overrides.sampling_temperature.or(self.sampling_temperature),
            sampling_topp: overrides.sampling_topp.or(self.sampling_topp),
            sampling_topk: overrides.sampling_topk.or(self.sampling_topk),
            max_new_tokens: overrides.max_new_tokens.or(self.max_new_tokens),
            min_new_tokens: overrides.min_new_tokens.or(self.min_new_tokens),
            repetition_penalty: overrides.repetition_penalty.or(self.repetition_penalty),
            no_repeat_ngram_size: overrides
                .no_repeat_ngram_size
                .or(self.no_repeat_ngram_size),
            consumer_group: overrides
                .consumer_group
                .clone()
                .or_else(|| self.consumer_group.clone()),
        }
    }
}
