//! HTTP client for a locally hosted Takeoff inference server.
//!
//! The crate defines an [`InferenceClient`] trait along with the concrete
//! [`TakeoffClient`] implementation. Generation parameters are expressed as
//! an explicit [`GenerationParams`] structure rather than free-form keyword
//! maps, so unrecognized keys are unrepresentable.

pub mod client;
pub mod error;
pub mod params;

pub use client::{InferenceClient, TakeoffClient};
pub use error::TakeoffError;
pub use params::GenerationParams;
