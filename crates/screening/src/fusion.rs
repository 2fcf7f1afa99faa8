//! Decision fusion policy
//!
//! Combines the classifier verdict with the lexical evidence into one final
//! label. Overrides apply in a fixed order; the first that fires wins:
//!
//! 1. explicit wellbeing phrase forces Not Depressed
//! 2. three or more flagged symptoms force Depressed
//! 3. otherwise the classifier verdict stands
//!
//! When the classifier is unavailable the overrides can still decide on
//! their own; with neither override nor verdict there is no defensible
//! label and the turn fails.

use sakina_core::{
    ClassifierVerdict, Error, FusedDecision, Label, Probabilities, Result, SymptomVector,
};

use crate::matcher::SymptomMatcher;

/// Flagged-symptom count at or above which the lexical evidence outweighs
/// the classifier
pub const SYMPTOM_OVERRIDE_THRESHOLD: usize = 3;

const POSITIVE_OVERRIDE_PROBS: Probabilities = Probabilities {
    not_depressed: 0.9,
    depressed: 0.1,
};
const SYMPTOM_OVERRIDE_PROBS: Probabilities = Probabilities {
    not_depressed: 0.2,
    depressed: 0.8,
};

/// Fuse classifier verdict and lexical evidence into the final decision
pub fn fuse(
    matcher: &SymptomMatcher,
    text: &str,
    symptoms: SymptomVector,
    verdict: Option<&ClassifierVerdict>,
) -> Result<FusedDecision> {
    let symptom_count = symptoms.count();

    if matcher.is_positive(text) {
        tracing::debug!("wellbeing phrase override");
        return Ok(FusedDecision {
            label: Label::NotDepressed,
            probabilities: POSITIVE_OVERRIDE_PROBS,
            symptoms,
            symptom_count,
        });
    }

    if symptom_count >= SYMPTOM_OVERRIDE_THRESHOLD {
        tracing::debug!(symptom_count, "symptom count override");
        return Ok(FusedDecision {
            label: Label::Depressed,
            probabilities: SYMPTOM_OVERRIDE_PROBS,
            symptoms,
            symptom_count,
        });
    }

    match verdict {
        Some(v) => Ok(FusedDecision {
            label: v.label,
            probabilities: v.probabilities,
            symptoms,
            symptom_count,
        }),
        None => Err(Error::ClassifierUnavailable(
            "no verdict and no lexical override".into(),
        )),
    }
}
