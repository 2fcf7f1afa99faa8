//! Depression labels, probability pairs and fused decisions

use serde::{Deserialize, Serialize};

use crate::symptom::SymptomVector;

/// Final screening label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "Not Depressed")]
    NotDepressed,
    Depressed,
}

impl Label {
    /// Stable string form used in API payloads and CSV records
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::NotDepressed => "Not Depressed",
            Label::Depressed => "Depressed",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Two-class probability distribution; the pair sums to 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    #[serde(rename = "Not Depressed")]
    pub not_depressed: f32,
    #[serde(rename = "Depressed")]
    pub depressed: f32,
}

impl Probabilities {
    pub fn new(not_depressed: f32, depressed: f32) -> Self {
        Self {
            not_depressed,
            depressed,
        }
    }

    /// The label with the larger probability mass
    pub fn argmax(&self) -> Label {
        if self.depressed > self.not_depressed {
            Label::Depressed
        } else {
            Label::NotDepressed
        }
    }
}

/// Verdict produced by the external statistical classifier
///
/// Treated as opaque evidence by the fusion policy; never recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierVerdict {
    pub label: Label,
    pub probabilities: Probabilities,
}

impl ClassifierVerdict {
    pub fn new(label: Label, probabilities: Probabilities) -> Self {
        Self {
            label,
            probabilities,
        }
    }
}

/// Output of the decision fusion policy
///
/// The label is a pure function of (verdict, symptom vector, raw text); the
/// contributing symptom vector and its count ride along for triage, prompts
/// and persistence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FusedDecision {
    pub label: Label,
    pub probabilities: Probabilities,
    pub symptoms: SymptomVector,
    pub symptom_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_strings() {
        assert_eq!(Label::Depressed.as_str(), "Depressed");
        assert_eq!(Label::NotDepressed.as_str(), "Not Depressed");
    }

    #[test]
    fn test_argmax() {
        assert_eq!(Probabilities::new(0.2, 0.8).argmax(), Label::Depressed);
        assert_eq!(Probabilities::new(0.9, 0.1).argmax(), Label::NotDepressed);
    }

    #[test]
    fn test_probabilities_serde_keys() {
        let probs = Probabilities::new(0.25, 0.75);
        let json = serde_json::to_value(&probs).unwrap();
        assert_eq!(json["Not Depressed"], 0.25);
        assert_eq!(json["Depressed"], 0.75);
    }
}
