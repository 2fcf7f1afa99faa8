//! Lexical screening layer
//!
//! Everything in this crate is pure and synchronous: Arabic normalization,
//! the keyword/pattern symptom matcher, the decision fusion policy, triage
//! reply shaping and the output sanitizer. Model calls live elsewhere.

pub mod fusion;
pub mod matcher;
pub mod normalize;
pub mod sanitizer;
pub mod triage;

pub use fusion::fuse;
pub use matcher::SymptomMatcher;
pub use normalize::normalize_arabic;
pub use sanitizer::sanitize_reply;
pub use triage::{triage_reply, TriageReply};
