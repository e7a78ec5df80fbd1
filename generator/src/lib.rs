//! Pipeline generator component backed by a Takeoff inference server.
//!
//! The [`Generator`] trait is the contract a text-generation component
//! satisfies towards the pipeline runtime: a static output-shape declaration
//! plus a single typed `run` call. [`TakeoffGenerator`] implements it by
//! forwarding prompts to a [`takeoff::TakeoffClient`] and reshaping the
//! returned text into the framework's `{replies, metadata}` record.

pub mod adapter;
pub mod component;
pub mod error;

pub use adapter::{GeneratorConfig, TakeoffGenerator};
pub use component::{Generator, OutputField, OutputKind, OutputSchema, Reply};
pub use error::GeneratorError;
