//! The screening engine
//!
//! One entry point, [`ScreeningEngine::handle_turn`], runs a complete turn.
//! The interview state is mutated only after the generator succeeds; a
//! failed generation returns the fixed apology and leaves the user exactly
//! where they were.

use std::sync::Arc;

use sakina_core::{
    Classifier, ClassifierVerdict, Error, FusedDecision, Generator, InterviewStage, Result,
    ScreeningRecord,
};
use sakina_screening::{fuse, sanitize_reply, triage_reply, SymptomMatcher, TriageReply};
use serde::Serialize;

use crate::prompt::PromptAssembler;
use crate::protocol::APOLOGY_FALLBACK;
use crate::state::StateStore;

/// Everything one turn produces
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReply {
    pub reply: String,
    pub triage: TriageReply,
    pub decision: FusedDecision,
    pub stage: InterviewStage,
    pub stage_ar: &'static str,
    pub step: u32,
    /// True when the apology fallback replaced a failed generation
    pub degraded: bool,
    #[serde(skip)]
    pub record: ScreeningRecord,
}

pub struct ScreeningEngine {
    classifier: Arc<dyn Classifier>,
    generator: Arc<dyn Generator>,
    matcher: SymptomMatcher,
    assembler: PromptAssembler,
    store: StateStore,
    max_tokens: u32,
}

impl ScreeningEngine {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        generator: Arc<dyn Generator>,
        max_tokens: u32,
    ) -> Self {
        Self {
            classifier,
            generator,
            matcher: SymptomMatcher::new(),
            assembler: PromptAssembler::new(),
            store: StateStore::new(),
            max_tokens,
        }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Reachability of (classifier, generator) for readiness reporting
    pub async fn collaborator_health(&self) -> (bool, bool) {
        (
            self.classifier.is_available().await,
            self.generator.is_available().await,
        )
    }

    /// Run one full screening turn for a user message
    pub async fn handle_turn(&self, user_id: &str, message: &str) -> Result<ScreeningReply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(Error::EmptyInput);
        }

        let verdict: Option<ClassifierVerdict> = match self.classifier.predict(message).await {
            Ok(v) => Some(v),
            Err(err) => {
                tracing::warn!(error = %err, "classifier unavailable, relying on overrides");
                None
            }
        };

        let symptoms = self.matcher.detect(message);
        let decision = fuse(&self.matcher, message, symptoms, verdict.as_ref())?;

        // Prompt is built from a snapshot; the state itself moves only after
        // a successful generation
        let snapshot = self.store.get(user_id).unwrap_or_default();
        let user_prompt = self.assembler.build(&snapshot, &decision, message);

        let (reply, degraded) = match self
            .generator
            .generate(self.assembler.system_prompt(), &user_prompt, self.max_tokens)
            .await
        {
            Ok(raw) => (sanitize_reply(&raw), false),
            Err(err) => {
                tracing::warn!(error = %err, "generator failed, using apology fallback");
                (APOLOGY_FALLBACK.to_string(), true)
            }
        };

        let (stage, step) = if degraded {
            (snapshot.stage, snapshot.step)
        } else {
            self.store.with_state(user_id, |state| {
                state.record_turn(message, decision.label);
                (state.stage, state.step)
            })
        };

        let triage = triage_reply(&decision);
        let record = ScreeningRecord::new(user_id, message, decision.label, decision.symptoms);

        tracing::info!(
            user_id,
            prediction = %decision.label,
            symptom_count = decision.symptom_count,
            stage = %stage,
            degraded,
            "screening turn completed"
        );

        Ok(ScreeningReply {
            reply,
            triage,
            decision,
            stage,
            stage_ar: stage.name_ar(),
            step,
            degraded,
            record,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sakina_core::{Label, Probabilities};

    struct FixedClassifier(Label);

    #[async_trait]
    impl Classifier for FixedClassifier {
        async fn predict(&self, _text: &str) -> Result<ClassifierVerdict> {
            let probabilities = match self.0 {
                Label::Depressed => Probabilities::new(0.2, 0.8),
                Label::NotDepressed => Probabilities::new(0.8, 0.2),
            };
            Ok(ClassifierVerdict::new(self.0, probabilities))
        }
    }

    struct EchoGenerator;

    #[async_trait]
    impl Generator for EchoGenerator {
        async fn generate(&self, _system: &str, _user: &str, _max_tokens: u32) -> Result<String> {
            Ok("كيف حالك اليوم؟".to_string())
        }

        fn model_name(&self) -> &str {
            "echo"
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl Generator for FailingGenerator {
        async fn generate(&self, _system: &str, _user: &str, _max_tokens: u32) -> Result<String> {
            Err(Error::GeneratorUnavailable("down".into()))
        }

        fn model_name(&self) -> &str {
            "failing"
        }
    }

    fn engine_with(classifier: Label) -> ScreeningEngine {
        ScreeningEngine::new(
            Arc::new(FixedClassifier(classifier)),
            Arc::new(EchoGenerator),
            150,
        )
    }

    #[tokio::test]
    async fn test_empty_input_rejected() {
        let engine = engine_with(Label::NotDepressed);
        let err = engine.handle_turn("user-1", "   ").await.unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[tokio::test]
    async fn test_successful_turn_advances_state() {
        let engine = engine_with(Label::NotDepressed);
        let reply = engine.handle_turn("user-1", "مرحبا").await.unwrap();

        assert_eq!(reply.reply, "كيف حالك اليوم؟");
        assert!(!reply.degraded);
        // Opening has a one-question budget
        assert_eq!(reply.stage, InterviewStage::InitialAssessment);
        assert_eq!(
            engine.store().get("user-1").unwrap().stage,
            InterviewStage::InitialAssessment
        );
    }

    #[tokio::test]
    async fn test_generator_failure_keeps_state_frozen() {
        let engine = ScreeningEngine::new(
            Arc::new(FixedClassifier(Label::NotDepressed)),
            Arc::new(FailingGenerator),
            150,
        );

        let reply = engine.handle_turn("user-1", "مرحبا").await.unwrap();
        assert!(reply.degraded);
        assert_eq!(reply.reply, APOLOGY_FALLBACK);
        assert_eq!(reply.stage, InterviewStage::Opening);
        assert!(engine.store().get("user-1").is_none());
    }

    #[tokio::test]
    async fn test_symptom_override_wins_over_classifier() {
        let engine = engine_with(Label::NotDepressed);
        let reply = engine
            .handle_turn("user-1", "أنا حزين ومتعب ولا أستطيع التركيز")
            .await
            .unwrap();

        assert_eq!(reply.decision.label, Label::Depressed);
        assert_eq!(reply.decision.symptom_count, 3);
        assert!(reply.triage.action.contains("أخصائي صحة نفسية"));
    }

    #[tokio::test]
    async fn test_record_mirrors_the_turn() {
        let engine = engine_with(Label::Depressed);
        let reply = engine.handle_turn("user-9", "أشعر بالحزن").await.unwrap();

        assert_eq!(reply.record.user_id, "user-9");
        assert_eq!(reply.record.prediction, Label::Depressed);
        assert_eq!(reply.record.message, "أشعر بالحزن");
    }
}
