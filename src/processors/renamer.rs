// phototools/src/processors/renamer.rs
use crate::core::{Outcome, PhotoToolError, Result};
use crate::processors::ExifReader;
use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// EXIF timestamps are naive local time in EST. The original tooling shifted
/// them to UTC with a fixed +5h, ignoring DST; that behavior is kept as-is.
const EST_TO_UTC_HOURS: i64 = 5;

/// Fresh-suffix attempts before a collision is reported as a failure.
const MAX_SUFFIX_ATTEMPTS: usize = 16;

static RENAMED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{8}-\d{6}-[0-9a-f]{4}\.jpg$").unwrap());

/// Renames a photo in place to `{YYYYMMDD-HHMMSS}-{4hex}.jpg`, derived from
/// its EXIF capture time.
pub struct Renamer {
    exif: ExifReader,
}

impl Renamer {
    pub fn new() -> Self {
        Self {
            exif: ExifReader::new(),
        }
    }

    pub fn process(&self, path: &Path) -> Result<Outcome> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                PhotoToolError::InvalidParameter(format!(
                    "invalid file name: {}",
                    path.display()
                ))
            })?;

        // Already-conforming names make repeat runs idempotent.
        if matches_renamed_pattern(file_name) {
            return Ok(Outcome::Skipped {
                reason: "already renamed",
            });
        }

        let captured = self.exif.capture_datetime(path)?;
        let stamp = utc_basename(captured);

        let suffixes = std::iter::repeat_with(random_hex_suffix).take(MAX_SUFFIX_ATTEMPTS);
        self.rename_with_suffixes(path, file_name, &stamp, suffixes)
    }

    fn rename_with_suffixes<I>(
        &self,
        path: &Path,
        file_name: &str,
        stamp: &str,
        suffixes: I,
    ) -> Result<Outcome>
    where
        I: IntoIterator<Item = String>,
    {
        for suffix in suffixes {
            let candidate = format!("{}-{}.jpg", stamp, suffix);
            let target = path.with_file_name(&candidate);

            // Never silently overwrite an existing file.
            if target.exists() {
                log::debug!("Suffix collision on {}, retrying", candidate);
                continue;
            }

            fs::rename(path, &target)?;
            log::debug!("Renamed {} -> {}", path.display(), candidate);

            return Ok(Outcome::Renamed {
                from: file_name.to_string(),
                to: candidate,
            });
        }

        Err(PhotoToolError::NameCollision(stamp.to_string()))
    }
}

impl Default for Renamer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn matches_renamed_pattern(file_name: &str) -> bool {
    RENAMED_PATTERN.is_match(file_name)
}

/// `YYYYMMDD-HHMMSS` basename for a naive EST capture time, shifted to UTC.
pub fn utc_basename(captured: NaiveDateTime) -> String {
    let utc = captured + Duration::hours(EST_TO_UTC_HOURS);
    utc.format("%Y%m%d-%H%M%S").to_string()
}

/// 4 uniform, independent lowercase hex characters.
fn random_hex_suffix() -> String {
    format!("{:04x}", rand::thread_rng().gen::<u16>())
}
