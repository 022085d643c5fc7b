use crate::domain::model::{PuzzleId, Solution};
use crate::utils::error::{PuzzleError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub puzzle: PuzzleId,
    pub input_path: String,
    pub answer: u64,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<bool>,
}

/// JSON summary of one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub name: String,
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<ReportEntry>,
}

impl RunReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generated_at: Utc::now(),
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, solution: &Solution, expected: Option<u64>) {
        self.entries.push(ReportEntry {
            puzzle: solution.puzzle,
            input_path: solution.input_path.clone(),
            answer: solution.answer,
            duration_ms: solution.duration.as_millis() as u64,
            expected,
            matched: expected.map(|e| e == solution.answer),
        });
    }

    pub fn all_matched(&self) -> bool {
        self.entries.iter().all(|e| e.matched.unwrap_or(true))
    }

    /// Fails on the first entry whose answer differs from its expected value.
    pub fn verify(&self) -> Result<()> {
        for entry in &self.entries {
            if let Some(expected) = entry.expected.filter(|&e| e != entry.answer) {
                return Err(PuzzleError::AnswerMismatchError {
                    puzzle: entry.puzzle.to_string(),
                    expected,
                    actual: entry.answer,
                });
            }
        }
        Ok(())
    }

    pub fn total_duration_ms(&self) -> u64 {
        self.entries.iter().map(|e| e.duration_ms).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let write_error = |source| PuzzleError::ReportWriteError {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(path, self.to_json()?).map_err(write_error)?;
        tracing::info!("📊 Report written to: {}", path.display());
        Ok(())
    }
}
