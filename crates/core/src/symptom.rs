//! The fixed Arabic symptom taxonomy and presence vectors
//!
//! Fourteen PHQ-style symptom categories. The Arabic identifiers are stable
//! strings: they key the detection output, the API payload and the CSV
//! columns, in this exact order. The set is closed and defined once.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One symptom category of the taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symptom {
    LossOfInterest,
    DepressedMood,
    SleepProblems,
    LowEnergy,
    AppetiteProblems,
    Worthlessness,
    PoorConcentration,
    Restlessness,
    SuicidalIdeation,
    Irritability,
    SexualProblems,
    PsychomotorSlowing,
    ShortReplies,
    MonotoneVoice,
}

impl Symptom {
    pub const COUNT: usize = 14;

    /// All categories in taxonomy order
    pub const ALL: [Symptom; Self::COUNT] = [
        Symptom::LossOfInterest,
        Symptom::DepressedMood,
        Symptom::SleepProblems,
        Symptom::LowEnergy,
        Symptom::AppetiteProblems,
        Symptom::Worthlessness,
        Symptom::PoorConcentration,
        Symptom::Restlessness,
        Symptom::SuicidalIdeation,
        Symptom::Irritability,
        Symptom::SexualProblems,
        Symptom::PsychomotorSlowing,
        Symptom::ShortReplies,
        Symptom::MonotoneVoice,
    ];

    /// Stable Arabic identifier used as map key and CSV column name
    pub fn id(&self) -> &'static str {
        match self {
            Symptom::LossOfInterest => "عدم الاهتمام",
            Symptom::DepressedMood => "الشعور بالاكتئاب",
            Symptom::SleepProblems => "مشاكل النوم",
            Symptom::LowEnergy => "طاقة منخفضة",
            Symptom::AppetiteProblems => "مشاكل في الشهية",
            Symptom::Worthlessness => "الشعور بعدم القيمة",
            Symptom::PoorConcentration => "ضعف التركيز",
            Symptom::Restlessness => "التململ أو البطء",
            Symptom::SuicidalIdeation => "أفكار انتحارية",
            Symptom::Irritability => "الانفعال",
            Symptom::SexualProblems => "مشاكل جنسية",
            Symptom::PsychomotorSlowing => "تباطؤ الحركات",
            Symptom::ShortReplies => "الرد بجمل قصيرة",
            Symptom::MonotoneVoice => "نبرة صوت رتيبة",
        }
    }

    /// Position within the taxonomy order
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Binary presence flags for one input text
///
/// Always carries exactly one flag per taxonomy category, including absent
/// ones, so downstream maps and CSV rows have a fixed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SymptomVector {
    flags: [bool; Symptom::COUNT],
}

impl SymptomVector {
    /// All-zero vector
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, symptom: Symptom) {
        self.flags[symptom.index()] = true;
    }

    pub fn contains(&self, symptom: Symptom) -> bool {
        self.flags[symptom.index()]
    }

    /// Number of flagged categories
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Iterate all categories with their flags, in taxonomy order
    pub fn iter(&self) -> impl Iterator<Item = (Symptom, bool)> + '_ {
        Symptom::ALL
            .iter()
            .map(move |s| (*s, self.flags[s.index()]))
    }

    /// Only the flagged categories, in taxonomy order
    pub fn flagged(&self) -> Vec<Symptom> {
        self.iter()
            .filter_map(|(s, present)| present.then_some(s))
            .collect()
    }
}

impl Serialize for SymptomVector {
    /// Serialized as an ordered map of identifier -> 0/1, matching the
    /// taxonomy order
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Symptom::COUNT))?;
        for (symptom, present) in self.iter() {
            map.serialize_entry(symptom.id(), &(present as u8))?;
        }
        map.end()
    }
}
