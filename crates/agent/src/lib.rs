//! The screening agent
//!
//! Ties the lexical layer, the interview protocol and the two external
//! collaborators together into one engine. One call to
//! [`ScreeningEngine::handle_turn`] runs a full turn: classify, match, fuse,
//! assemble the prompt, generate, sanitize, advance the interview state and
//! emit the persistence record.

pub mod engine;
pub mod prompt;
pub mod protocol;
pub mod state;

pub use engine::{ScreeningEngine, ScreeningReply};
pub use prompt::PromptAssembler;
pub use protocol::{APOLOGY_FALLBACK, SYSTEM_PROMPT};
pub use state::StateStore;
