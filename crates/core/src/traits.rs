//! Traits for the two external collaborators
//!
//! The engine never talks to a model endpoint directly. Both collaborators
//! sit behind async traits so tests inject deterministic mocks and the
//! backends stay swappable.

use async_trait::async_trait;

use crate::error::Result;
use crate::label::ClassifierVerdict;

/// External statistical depression classifier
///
/// Returns an opaque verdict over raw (unsanitized) input text. Failures
/// surface as [`Error::ClassifierUnavailable`](crate::Error) and the fusion
/// policy decides whether a lexical override can stand in.
#[async_trait]
pub trait Classifier: Send + Sync + 'static {
    async fn predict(&self, text: &str) -> Result<ClassifierVerdict>;

    /// Cheap reachability signal for readiness reporting
    async fn is_available(&self) -> bool {
        true
    }

    fn model_name(&self) -> &str {
        "classifier"
    }
}

/// External Arabic text generator behind the interview replies
#[async_trait]
pub trait Generator: Send + Sync + 'static {
    /// Generate a reply for an assembled (system, user) prompt pair
    async fn generate(&self, system_prompt: &str, user_prompt: &str, max_tokens: u32)
        -> Result<String>;

    /// Cheap reachability signal for readiness reporting
    async fn is_available(&self) -> bool {
        true
    }

    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::label::{Label, Probabilities};

    struct FixedClassifier {
        verdict: ClassifierVerdict,
    }

    #[async_trait]
    impl Classifier for FixedClassifier {
        async fn predict(&self, _text: &str) -> Result<ClassifierVerdict> {
            Ok(self.verdict.clone())
        }
    }

    struct OfflineGenerator;

    #[async_trait]
    impl Generator for OfflineGenerator {
        async fn generate(
            &self,
            _system_prompt: &str,
            _user_prompt: &str,
            _max_tokens: u32,
        ) -> Result<String> {
            Err(Error::GeneratorUnavailable("offline".into()))
        }

        fn model_name(&self) -> &str {
            "offline"
        }
    }

    #[tokio::test]
    async fn test_classifier_trait_object() {
        let classifier: Box<dyn Classifier> = Box::new(FixedClassifier {
            verdict: ClassifierVerdict::new(Label::Depressed, Probabilities::new(0.1, 0.9)),
        });

        let verdict = classifier.predict("أشعر بالحزن").await.unwrap();
        assert_eq!(verdict.label, Label::Depressed);
        assert_eq!(classifier.model_name(), "classifier");
    }

    #[tokio::test]
    async fn test_generator_failure_is_typed() {
        let generator: Box<dyn Generator> = Box::new(OfflineGenerator);
        let err = generator.generate("نظام", "مستخدم", 150).await.unwrap_err();
        assert!(matches!(err, Error::GeneratorUnavailable(_)));
    }
}
