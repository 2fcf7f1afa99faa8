//! HTTP clients for the two external collaborators
//!
//! `ChatApiBackend` implements [`sakina_core::Generator`] against an
//! OpenAI-style chat completion endpoint with retries and a bounded reply
//! cache. `HttpClassifier` implements [`sakina_core::Classifier`] against
//! the model-serving sidecar.

pub mod backend;
pub mod cache;
pub mod classifier;

pub use backend::ChatApiBackend;
pub use cache::ResponseCache;
pub use classifier::HttpClassifier;
