// phototools/src/processors/batch.rs
use crate::core::{Outcome, PhotoToolError, Result, RunSummary};
use crate::utils::is_jpeg_path;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// JPEG files directly inside `dir` (non-recursive), in sorted path order.
pub fn collect_jpeg_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(PhotoToolError::InvalidParameter(format!(
            "source directory does not exist: {}",
            dir.display()
        )));
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| is_jpeg_path(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    paths.sort();
    Ok(paths)
}

/// Apply `op` to each file in turn. A failure on one file never aborts the
/// batch; it is reported and recorded, and processing continues.
pub fn run<F>(files: &[PathBuf], mut op: F) -> RunSummary
where
    F: FnMut(&Path) -> Result<Outcome>,
{
    let mut summary = RunSummary::default();

    for path in files {
        let outcome = match op(path) {
            Ok(outcome) => outcome,
            Err(e) => Outcome::Failed {
                reason: e.to_string(),
            },
        };

        report_file(path, &outcome);
        summary.record(path, &outcome);
    }

    summary
}

fn report_file(path: &Path, outcome: &Outcome) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match outcome {
        Outcome::Renamed { from, to } => println!("✓ Renamed: {} -> {}", from, to),
        Outcome::Skipped { reason } => println!("○ Skipped: {} ({})", name, reason),
        Outcome::Resized {
            width,
            height,
            scaled: true,
        } => println!("✓ Resized: {} ({}x{})", name, width, height),
        Outcome::Resized {
            width,
            height,
            scaled: false,
        } => println!(
            "✓ Optimized: {} ({}x{}, no resize needed)",
            name, width, height
        ),
        Outcome::Thumbnailed { width, height } => {
            println!("✓ Thumbnail: {} ({}x{})", name, width, height)
        }
        Outcome::Failed { reason } => println!("✗ Failed: {} ({})", name, reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn collects_only_jpegs_non_recursively_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.jpg"), b"x").unwrap();
        fs::write(dir.path().join("a.JPEG"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.jpg"), b"x").unwrap();

        let files = collect_jpeg_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.JPEG", "b.jpg"]);
    }

    #[test]
    fn missing_source_directory_is_fatal() {
        let err = collect_jpeg_files(Path::new("/no/such/directory")).unwrap_err();
        assert!(matches!(err, PhotoToolError::InvalidParameter(_)));
    }

    #[test]
    fn one_failure_does_not_abort_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("a.jpg");
        let bad = dir.path().join("b.jpg");
        fs::write(&good, b"x").unwrap();
        fs::write(&bad, b"x").unwrap();

        let files = vec![good.clone(), bad.clone()];
        let summary = run(&files, |path| {
            if path == bad {
                Err(PhotoToolError::UnreadableFile("corrupt".to_string()))
            } else {
                Ok(Outcome::Resized {
                    width: 1,
                    height: 1,
                    scaled: true,
                })
            }
        });

        assert_eq!(summary.processed, 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.failures[0].0, bad);
    }
}
