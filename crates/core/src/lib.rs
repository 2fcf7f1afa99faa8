//! Core traits and types for the screening engine
//!
//! This crate provides foundational types used across all other crates:
//! - Depression labels and probability distributions
//! - The fixed Arabic symptom taxonomy and presence vectors
//! - Interview stages and per-user conversation state
//! - The append-only screening record handed to persistence
//! - Traits for the external classifier and text generator
//! - Error types

pub mod error;
pub mod interview;
pub mod label;
pub mod record;
pub mod symptom;
pub mod traits;

pub use error::{Error, Result};
pub use interview::{ConversationState, InterviewStage};
pub use label::{ClassifierVerdict, FusedDecision, Label, Probabilities};
pub use record::ScreeningRecord;
pub use symptom::{Symptom, SymptomVector};
pub use traits::{Classifier, Generator};
