//! Structured triage reply shaping
//!
//! Alongside the generated conversational text, every turn carries a fixed
//! structured reply keyed off the fused decision. Suicidal ideation takes
//! priority over everything else.

use sakina_core::{FusedDecision, Label, Symptom};
use serde::Serialize;

/// Structured companion to the generated reply
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriageReply {
    pub immediate: String,
    pub follow_up: String,
    pub action: String,
}

/// Build the structured triage reply for a fused decision
pub fn triage_reply(decision: &FusedDecision) -> TriageReply {
    if decision.symptoms.contains(Symptom::SuicidalIdeation) {
        return TriageReply {
            immediate: "أنا قلق بشأن ما ذكرته من أفكار انتحارية. هذه علامة مهمة تحتاج إلى دعم فوري."
                .to_string(),
            follow_up: "هل يمكنك مشاركة المزيد عن هذه الأفكار؟".to_string(),
            action: "يوصى بالاتصال بخط المساعدة النفسية المحلي أو التوجه إلى أقرب مركز صحة نفسية"
                .to_string(),
        };
    }

    match decision.label {
        Label::Depressed => TriageReply {
            immediate: depressed_summary(decision),
            follow_up: "كيف تؤثر هذه المشاعر على حياتك اليومية؟".to_string(),
            action: "قد يكون من المفيد التحدث مع أخصائي صحة نفسية".to_string(),
        },
        Label::NotDepressed => TriageReply {
            immediate: "شكرًا لمشاركة مشاعرك.".to_string(),
            follow_up: "هل هناك أي شيء آخر تريد التحدث عنه؟".to_string(),
            action: "استمر في مراقبة مشاعرك ولا تتردد في طلب المساعدة إذا احتجت".to_string(),
        },
    }
}

/// Acknowledgement lines for the flagged categories that have one
fn depressed_summary(decision: &FusedDecision) -> String {
    let mut lines = vec!["أنا ألاحظ بعض العلامات التي قد تحتاج إلى انتباه:".to_string()];

    for symptom in decision.symptoms.flagged() {
        if let Some(line) = acknowledgement(symptom) {
            lines.push(line.to_string());
        }
    }
    lines.join(" ")
}

fn acknowledgement(symptom: Symptom) -> Option<&'static str> {
    match symptom {
        Symptom::Worthlessness => Some("أنا أسمع أنك تشعر بعدم القيمة."),
        Symptom::PoorConcentration => Some("يبدو أنك تواجه صعوبة في التركيز."),
        Symptom::LowEnergy => Some("أرى أن طاقتك منخفضة مؤخرًا."),
        Symptom::SleepProblems => Some("لاحظت أنك تعاني من مشاكل في النوم."),
        Symptom::AppetiteProblems => Some("يبدو أن شهيتك قد تغيرت."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sakina_core::{Probabilities, SymptomVector};

    fn decision(label: Label, symptoms: SymptomVector) -> FusedDecision {
        FusedDecision {
            label,
            probabilities: Probabilities::new(0.2, 0.8),
            symptom_count: symptoms.count(),
            symptoms,
        }
    }

    #[test]
    fn test_suicidal_ideation_takes_priority() {
        let mut symptoms = SymptomVector::new();
        symptoms.set(Symptom::SuicidalIdeation);
        symptoms.set(Symptom::LowEnergy);

        // Priority holds even when the fused label is Not Depressed
        let reply = triage_reply(&decision(Label::NotDepressed, symptoms));
        assert!(reply.immediate.contains("أفكار انتحارية"));
        assert!(reply.action.contains("خط المساعدة"));
    }

    #[test]
    fn test_depressed_reply_acknowledges_flagged_symptoms() {
        let mut symptoms = SymptomVector::new();
        symptoms.set(Symptom::SleepProblems);
        symptoms.set(Symptom::LowEnergy);

        let reply = triage_reply(&decision(Label::Depressed, symptoms));
        assert!(reply.immediate.contains("مشاكل في النوم"));
        assert!(reply.immediate.contains("طاقتك منخفضة"));
        assert!(reply.action.contains("أخصائي صحة نفسية"));
    }

    #[test]
    fn test_depressed_without_acknowledged_symptoms() {
        let mut symptoms = SymptomVector::new();
        symptoms.set(Symptom::Irritability); // no acknowledgement line

        let reply = triage_reply(&decision(Label::Depressed, symptoms));
        assert_eq!(reply.immediate, "أنا ألاحظ بعض العلامات التي قد تحتاج إلى انتباه:");
    }

    #[test]
    fn test_not_depressed_reply() {
        let reply = triage_reply(&decision(Label::NotDepressed, SymptomVector::new()));
        assert_eq!(reply.immediate, "شكرًا لمشاركة مشاعرك.");
    }
}
