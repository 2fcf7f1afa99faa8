//! Daily CSV logbook
//!
//! One file per UTC day under the configured directory, named
//! `screenings-YYYY-MM-DD.csv`. The header is written when a file is first
//! created; rows are appended as turns complete. Logging failures are
//! reported but never fail a screening turn.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use parking_lot::Mutex;
use sakina_core::{Result, ScreeningRecord};

pub struct Logbook {
    dir: PathBuf,
    // Serializes header checks and appends across handlers
    write_lock: Mutex<()>,
}

impl Logbook {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        std::fs::create_dir_all(dir.as_ref())?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        })
    }

    fn path_for_today(&self) -> PathBuf {
        let day = Utc::now().format("%Y-%m-%d");
        self.dir.join(format!("screenings-{day}.csv"))
    }

    /// Whether the logbook directory still accepts writes
    pub fn is_writable(&self) -> bool {
        std::fs::metadata(&self.dir)
            .map(|m| m.is_dir() && !m.permissions().readonly())
            .unwrap_or(false)
    }

    /// Append one record to today's file, creating it with a header first
    pub fn append(&self, record: &ScreeningRecord) -> Result<()> {
        let path = self.path_for_today();
        let _guard = self.write_lock.lock();

        let is_new = !path.exists();
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

        if is_new {
            writeln!(file, "{}", ScreeningRecord::csv_header())?;
        }
        writeln!(file, "{}", record.csv_row())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sakina_core::{Label, Symptom, SymptomVector};

    fn sample_record() -> ScreeningRecord {
        let mut symptoms = SymptomVector::new();
        symptoms.set(Symptom::DepressedMood);
        ScreeningRecord::new("user-1", "أشعر بالحزن", Label::Depressed, symptoms)
    }

    #[test]
    fn test_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let logbook = Logbook::new(dir.path()).unwrap();

        logbook.append(&sample_record()).unwrap();
        logbook.append(&sample_record()).unwrap();

        let path = logbook.path_for_today();
        let contents = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("timestamp,user_id,message,prediction"));
        assert!(lines[1].contains("Depressed"));
    }

    #[test]
    fn test_writable_after_creation() {
        let dir = tempfile::tempdir().unwrap();
        let logbook = Logbook::new(dir.path()).unwrap();
        assert!(logbook.is_writable());
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("logs/daily");
        let logbook = Logbook::new(&nested).unwrap();

        logbook.append(&sample_record()).unwrap();
        assert!(nested.exists());
    }
}
