// phototools/src/core/mod.rs
use std::path::{Path, PathBuf};
use thiserror::Error;

mod processor;

pub use processor::{ResizePipeline, ResizeTarget};

#[derive(Error, Debug)]
pub enum PhotoToolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("unreadable file: {0}")]
    UnreadableFile(String),

    #[error("no EXIF timestamp")]
    MissingExifTimestamp,

    #[error("name collision: {0}")]
    NameCollision(String),

    #[error("unwritable output: {0}")]
    UnwritableOutput(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, PhotoToolError>;

/// Per-file result of one batch iteration. Used for console reporting only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Renamed { from: String, to: String },
    Skipped { reason: &'static str },
    /// `scaled` is false on the quality-only re-encode path.
    Resized { width: u32, height: u32, scaled: bool },
    Thumbnailed { width: u32, height: u32 },
    Failed { reason: String },
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failures: Vec<(PathBuf, String)>,
}

impl RunSummary {
    pub fn record(&mut self, path: &Path, outcome: &Outcome) {
        match outcome {
            Outcome::Renamed { .. }
            | Outcome::Resized { .. }
            | Outcome::Thumbnailed { .. } => self.processed += 1,
            Outcome::Skipped { .. } => self.skipped += 1,
            Outcome::Failed { reason } => {
                self.failures.push((path.to_path_buf(), reason.clone()));
            }
        }
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Final console report. Skipped and failed files are counted separately.
    pub fn report(&self) {
        println!();
        println!(
            "Done. {} processed, {} skipped, {} failed",
            self.processed,
            self.skipped,
            self.failed()
        );

        if !self.failures.is_empty() {
            println!("\nFailures:");
            for (path, reason) in &self.failures {
                println!("  {}: {}", path.display(), reason);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_outcomes_separately() {
        let mut summary = RunSummary::default();
        let path = Path::new("a.jpg");

        summary.record(
            path,
            &Outcome::Resized {
                width: 10,
                height: 10,
                scaled: true,
            },
        );
        summary.record(path, &Outcome::Skipped { reason: "already renamed" });
        summary.record(
            path,
            &Outcome::Failed {
                reason: "boom".to_string(),
            },
        );

        assert_eq!(summary.processed, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed(), 1);
        assert!(!summary.is_clean());
    }
}
