use crate::error::app_err::AppErr;
use std::fmt;
use std::path::PathBuf;

/// Outcome of one eligible file: the written output path, or the
/// error that stopped it. Failures never abort the batch.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub file_name: String,
    pub outcome: Result<PathBuf, AppErr>,
}

/// One entry per eligible input file, in directory-listing order
/// (filesystem-dependent, not sorted). Ineligible entries never appear.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub entries: Vec<FileReport>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome.is_ok())
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.entries {
            match &e.outcome {
                Ok(path) => writeln!(f, "✅ Processed: {} → {}", e.file_name, path.display())?,
                Err(err) => writeln!(f, "❌ Error processing {}: {err}", e.file_name)?,
            }
        }
        writeln!(f, "{} ok, {} failed, {} eligible", self.succeeded(), self.failed(), self.entries.len())
    }
}
