//! Keyword and pattern symptom matcher
//!
//! Two lexical passes over the normalized input: a substring keyword table
//! covering all fourteen categories, and a compiled phrase-pattern table for
//! the five categories where keyword hits alone proved too noisy. A separate
//! positive-phrase table backs the wellbeing override in the fusion policy.
//! All tables are normalized and compiled once at first use.

use once_cell::sync::Lazy;
use regex::Regex;
use sakina_core::{Symptom, SymptomVector};

use crate::normalize::normalize_arabic;

/// Keyword table in taxonomy order, normalized at build time
static KEYWORDS: Lazy<Vec<(Symptom, Vec<String>)>> = Lazy::new(|| {
    let raw: [(Symptom, &[&str]); Symptom::COUNT] = [
        (
            Symptom::LossOfInterest,
            &["لا اهتمام", "ملل", "لا أهتم", "فقدان الاهتمام", "عدم اهتمام"],
        ),
        (
            Symptom::DepressedMood,
            &["حزين", "اكتئاب", "بائس", "كئيب", "تعيس", "حزن"],
        ),
        (
            Symptom::SleepProblems,
            &["أرق", "لا أنام", "نوم متقطع", "صعوبة النوم", "أستيقظ ليلا", "نوم سيء"],
        ),
        (
            Symptom::LowEnergy,
            &["إرهاق", "تعب", "لا طاقة", "إعياء", "مرهق", "خمول"],
        ),
        (
            Symptom::AppetiteProblems,
            &["فقدان شهية", "لا أريد أكل", "شهية زائدة", "أكل كثير", "أكل قليل", "اضطراب الشهية"],
        ),
        (
            Symptom::Worthlessness,
            &["عديم القيمة", "لا فائدة", "بلا قيمة", "لا يستحق", "تافه", "شعور بعدم الجدوى"],
        ),
        (
            Symptom::PoorConcentration,
            &["لا أركز", "تشتت انتباه", "ضعف تركيز", "نسيان", "شرود", "صعوبة التركيز"],
        ),
        (
            Symptom::Restlessness,
            &["تململ", "بطء حركة", "لا أستقر", "حركة زائدة", "بطء", "قلق حركي"],
        ),
        (
            Symptom::SuicidalIdeation,
            &["أريد الموت", "انتحار", "لا أريد العيش", "إنهاء حياتي", "الموت أفضل", "تفكير في الموت"],
        ),
        (
            Symptom::Irritability,
            &["غضب سريع", "انفعال", "عصبية", "صراخ", "غضب", "تهيج"],
        ),
        (
            Symptom::SexualProblems,
            &["ضعف جنسي", "لا رغبة جنسية", "برود جنسي", "اضطراب جنسي"],
        ),
        (
            Symptom::PsychomotorSlowing,
            &["حركة بطيئة", "كسل حركي", "بطء في الحركة", "خمول حركي"],
        ),
        (
            Symptom::ShortReplies,
            &["إجابات قصيرة", "لا أحب الكلام", "ردود مختصرة", "تكلم قليل"],
        ),
        (
            Symptom::MonotoneVoice,
            &["صوت ممل", "لا تعابير صوتية", "صوت رتيب", "نبرة واحدة"],
        ),
    ];

    raw.into_iter()
        .map(|(symptom, keywords)| {
            let normalized = keywords.iter().map(|k| normalize_arabic(k)).collect();
            (symptom, normalized)
        })
        .collect()
});

/// Compiled phrase patterns for the harder-to-catch categories
///
/// Pattern strings are authored in normalized form (bare alif, no tashkeel)
/// and matched against the normalized input.
static PATTERNS: Lazy<Vec<(Symptom, Regex)>> = Lazy::new(|| {
    let raw: [(Symptom, &[&str]); 5] = [
        (
            Symptom::Worthlessness,
            &["عديم القيمة", "بلا قيمة", "لا فائدة", "لا اشعر بقيمتي", "اشعر بعدم القيمة"],
        ),
        (
            Symptom::PoorConcentration,
            &["لا استطيع التركيز", "ضعف تركيز", "لا اركز", "تشتت انتباه", "صعوبة التركيز"],
        ),
        (
            Symptom::LowEnergy,
            &["طاقتي منخفضة", "لا طاقة", "اشعر بالتعب", "ارهاق", "خمول"],
        ),
        (
            Symptom::SleepProblems,
            &["مشاكل في النوم", "اعاني من النوم", "ارق", "نوم متقطع", "صعوبة النوم"],
        ),
        (
            Symptom::AppetiteProblems,
            &["مشاكل في الشهية", "اضطراب الشهية", "لا اشتهي الاكل", "شهيتي تغيرت"],
        ),
    ];

    raw.into_iter()
        .map(|(symptom, phrases)| {
            let alternation = phrases
                .iter()
                .map(|p| regex::escape(p))
                .collect::<Vec<_>>()
                .join("|");
            let re = Regex::new(&alternation).expect("static pattern table compiles");
            (symptom, re)
        })
        .collect()
});

/// Wellbeing phrases that trigger the positive override
static POSITIVE_PHRASES: Lazy<Vec<String>> = Lazy::new(|| {
    ["بخير", "أنا بخير", "تمام", "لا أشعر بالحزن", "سعيد", "مرتاح"]
        .iter()
        .map(|p| normalize_arabic(p))
        .collect()
});

/// Stateless lexical symptom detector over the static tables
#[derive(Debug, Clone, Copy, Default)]
pub struct SymptomMatcher;

impl SymptomMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Flag every category whose keyword or phrase table hits the input
    pub fn detect(&self, text: &str) -> SymptomVector {
        let normalized = normalize_arabic(text);
        let mut vector = SymptomVector::new();

        for (symptom, keywords) in KEYWORDS.iter() {
            if keywords.iter().any(|k| normalized.contains(k.as_str())) {
                vector.set(*symptom);
            }
        }
        for (symptom, pattern) in PATTERNS.iter() {
            if pattern.is_match(&normalized) {
                vector.set(*symptom);
            }
        }

        if !vector.is_empty() {
            tracing::debug!(count = vector.count(), "lexical symptoms detected");
        }
        vector
    }

    /// Whether the input contains an explicit wellbeing phrase
    pub fn is_positive(&self, text: &str) -> bool {
        let normalized = normalize_arabic(text);
        POSITIVE_PHRASES
            .iter()
            .any(|p| normalized.contains(p.as_str()))
    }
}
