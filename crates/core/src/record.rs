//! The append-only screening record handed to persistence

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::label::Label;
use crate::symptom::{Symptom, SymptomVector};

/// One completed screening turn, as written to the daily logbook
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningRecord {
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub message: String,
    pub prediction: Label,
    pub symptoms: SymptomVector,
}

impl ScreeningRecord {
    pub fn new(user_id: &str, message: &str, prediction: Label, symptoms: SymptomVector) -> Self {
        Self {
            timestamp: Utc::now(),
            user_id: user_id.to_string(),
            message: message.to_string(),
            prediction,
            symptoms,
        }
    }

    /// CSV header row: four fixed columns plus one per taxonomy category
    pub fn csv_header() -> String {
        let mut header = String::from("timestamp,user_id,message,prediction");
        for symptom in Symptom::ALL {
            header.push(',');
            header.push_str(&csv_field(symptom.id()));
        }
        header
    }

    /// One CSV data row matching [`csv_header`](Self::csv_header)
    pub fn csv_row(&self) -> String {
        let mut row = format!(
            "{},{},{},{}",
            self.timestamp.to_rfc3339(),
            csv_field(&self.user_id),
            csv_field(&self.message),
            self.prediction.as_str()
        );
        for (_, present) in self.symptoms.iter() {
            row.push(',');
            row.push(if present { '1' } else { '0' });
        }
        row
    }
}

/// Quote a field when it contains a delimiter, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
