//! Interview stages and per-user conversation state
//!
//! A five-stage Arabic diagnostic interview. Stages are a fixed linear
//! progression with a per-stage question budget; the state machine advances
//! only after a turn completes successfully and saturates in the final stage.

use serde::{Deserialize, Serialize};

use crate::label::Label;

/// One stage of the staged diagnostic interview, in protocol order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStage {
    Opening,
    InitialAssessment,
    EmotionalExploration,
    CopingMechanisms,
    Closing,
}

impl InterviewStage {
    /// All stages in protocol order
    pub const ALL: [InterviewStage; 5] = [
        InterviewStage::Opening,
        InterviewStage::InitialAssessment,
        InterviewStage::EmotionalExploration,
        InterviewStage::CopingMechanisms,
        InterviewStage::Closing,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            InterviewStage::Opening => "Opening",
            InterviewStage::InitialAssessment => "Initial Assessment",
            InterviewStage::EmotionalExploration => "Emotional Exploration",
            InterviewStage::CopingMechanisms => "Coping Mechanisms",
            InterviewStage::Closing => "Closing",
        }
    }

    /// Arabic stage name surfaced in prompts and API payloads
    pub fn name_ar(&self) -> &'static str {
        match self {
            InterviewStage::Opening => "البداية",
            InterviewStage::InitialAssessment => "التقييم_الاولي",
            InterviewStage::EmotionalExploration => "الاستكشاف_العاطفي",
            InterviewStage::CopingMechanisms => "الآليات_التكيفية",
            InterviewStage::Closing => "الختام",
        }
    }

    /// Arabic guidance injected into the generation prompt for this stage
    pub fn guidance(&self) -> &'static str {
        match self {
            InterviewStage::Opening => "ابدأ بتحية تعاطفية واشرح الغرض من المحادثة",
            InterviewStage::InitialAssessment => {
                "اسأل عن المزاج العام، نمط النوم، الشهية، ومستويات الطاقة"
            }
            InterviewStage::EmotionalExploration => {
                "استكشاف أعمق للحالة العاطفية والمحفزات النفسية"
            }
            InterviewStage::CopingMechanisms => "مناقشة آليات التعامل الحالية والدعم الاجتماعي",
            InterviewStage::Closing => "تقديم تطمينات واقتراح خطوات تالية",
        }
    }

    /// Question budget before advancing to the next stage
    pub fn max_questions(&self) -> u32 {
        match self {
            InterviewStage::Opening => 1,
            InterviewStage::InitialAssessment => 3,
            InterviewStage::EmotionalExploration => 4,
            InterviewStage::CopingMechanisms => 2,
            InterviewStage::Closing => 1,
        }
    }

    /// The stage that follows this one, or None for the final stage
    pub fn next(&self) -> Option<InterviewStage> {
        match self {
            InterviewStage::Opening => Some(InterviewStage::InitialAssessment),
            InterviewStage::InitialAssessment => Some(InterviewStage::EmotionalExploration),
            InterviewStage::EmotionalExploration => Some(InterviewStage::CopingMechanisms),
            InterviewStage::CopingMechanisms => Some(InterviewStage::Closing),
            InterviewStage::Closing => None,
        }
    }
}

impl std::fmt::Display for InterviewStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-user interview state
///
/// Mutated only after a turn completes with a successful generation, so a
/// failed turn leaves the user exactly where they were.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationState {
    pub stage: InterviewStage,
    pub step: u32,
    pub history: Vec<String>,
    pub last_prediction: Option<Label>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self {
            stage: InterviewStage::Opening,
            step: 0,
            history: Vec::new(),
            last_prediction: None,
        }
    }

    /// Record one completed turn: append the user message, remember the
    /// fused label, and advance the stage machine when the budget is spent
    pub fn record_turn(&mut self, message: &str, label: Label) {
        self.history.push(message.to_string());
        self.last_prediction = Some(label);
        self.step += 1;

        if self.step >= self.stage.max_questions() {
            match self.stage.next() {
                Some(next) => {
                    self.stage = next;
                    self.step = 0;
                }
                // Terminal stage saturates; further turns stay in Closing
                None => self.step = self.stage.max_questions(),
            }
        }
    }

    /// The most recent user messages included in prompts (at most two)
    pub fn recent_history(&self) -> &[String] {
        let len = self.history.len();
        &self.history[len.saturating_sub(2)..]
    }

    /// Current position within the stage budget
    pub fn progress(&self) -> (u32, u32) {
        (self.step, self.stage.max_questions())
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}
