//! Generation prompt assembly
//!
//! Builds the Arabic user prompt for one turn: stage guidance, the fused
//! assessment, the last two user messages, the protocol rules and example
//! questions, then the current message. The assembled text is deterministic
//! for a given (state, decision, message) triple, which is what makes the
//! generator cache effective.

use sakina_core::{ConversationState, FusedDecision};

use crate::protocol::{EXAMPLE_QUESTIONS, PROTOCOL_RULES, SYSTEM_PROMPT};

#[derive(Debug, Clone, Copy, Default)]
pub struct PromptAssembler;

impl PromptAssembler {
    pub fn new() -> Self {
        Self
    }

    pub fn system_prompt(&self) -> &'static str {
        SYSTEM_PROMPT
    }

    /// Assemble the user prompt for the current turn
    pub fn build(
        &self,
        state: &ConversationState,
        decision: &FusedDecision,
        message: &str,
    ) -> String {
        let (step, max) = state.progress();
        let mut prompt = String::with_capacity(1024);

        prompt.push_str(&format!(
            "المرحلة الحالية: {} ({step} من {max})\n",
            state.stage.name_ar(),
        ));
        prompt.push_str(&format!("توجيه المرحلة: {}\n\n", state.stage.guidance()));

        prompt.push_str(&format!("التقييم الحالي: {}\n", decision.label));
        let flagged = decision.symptoms.flagged();
        if !flagged.is_empty() {
            let names: Vec<&str> = flagged.iter().map(|s| s.id()).collect();
            prompt.push_str(&format!("الأعراض الملحوظة: {}\n", names.join("، ")));
        }
        prompt.push('\n');

        let recent = state.recent_history();
        if !recent.is_empty() {
            prompt.push_str("آخر رسائل المستخدم:\n");
            for message in recent {
                prompt.push_str(&format!("- {message}\n"));
            }
            prompt.push('\n');
        }

        prompt.push_str("قواعد المقابلة:\n");
        for rule in PROTOCOL_RULES {
            prompt.push_str(&format!("- {rule}\n"));
        }
        prompt.push('\n');

        prompt.push_str("أمثلة على الأسئلة:\n");
        for question in EXAMPLE_QUESTIONS {
            prompt.push_str(&format!("- {question}\n"));
        }
        prompt.push('\n');

        prompt.push_str(&format!("رسالة المستخدم: {message}\n"));
        prompt.push_str("رد بسؤال واحد مناسب للمرحلة الحالية.");
        prompt
    }
}
