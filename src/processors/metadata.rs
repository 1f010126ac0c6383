// phototools/src/processors/metadata.rs
use crate::core::{PhotoToolError, Result};
use chrono::NaiveDateTime;
use exif::{Exif, In, Reader, Tag};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Capture-time tags in priority order: when the shutter fired, then the
/// generic file timestamp.
const DATETIME_TAGS: &[Tag] = &[Tag::DateTimeOriginal, Tag::DateTime];

pub struct ExifReader;

impl ExifReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, path: &Path) -> Result<Option<Exif>> {
        let file = File::open(path)?;
        let mut bufreader = BufReader::new(&file);

        match Reader::new().read_from_container(&mut bufreader) {
            Ok(exif) => {
                log::debug!("Found EXIF data in {}", path.display());
                Ok(Some(exif))
            }
            Err(exif::Error::NotFound(_)) => {
                log::debug!("No EXIF data found in {}", path.display());
                Ok(None)
            }
            Err(e) => {
                log::warn!("Failed to read EXIF from {}: {}", path.display(), e);
                Err(PhotoToolError::UnreadableFile(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        }
    }

    /// EXIF orientation value 1-8, defaulting to 1 (upright) when the tag or
    /// the whole EXIF segment is absent or unreadable.
    pub fn orientation(&self, path: &Path) -> u32 {
        let exif = match self.read(path) {
            Ok(Some(exif)) => exif,
            _ => return 1,
        };

        exif.get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .unwrap_or(1)
    }

    /// Naive capture timestamp from `DateTimeOriginal`, falling back to
    /// `DateTime`. The value carries no timezone; callers decide how to
    /// interpret it.
    pub fn capture_datetime(&self, path: &Path) -> Result<NaiveDateTime> {
        let exif = self
            .read(path)?
            .ok_or(PhotoToolError::MissingExifTimestamp)?;

        for tag in DATETIME_TAGS {
            if let Some(field) = exif.get_field(*tag, In::PRIMARY) {
                if let Some(raw) = ascii_field_to_string(field) {
                    if let Some(datetime) = parse_exif_datetime(&raw) {
                        return Ok(datetime);
                    }
                    log::warn!(
                        "Unparseable {} value {:?} in {}",
                        tag,
                        raw,
                        path.display()
                    );
                }
            }
        }

        Err(PhotoToolError::MissingExifTimestamp)
    }
}

impl Default for ExifReader {
    fn default() -> Self {
        Self::new()
    }
}

fn ascii_field_to_string(field: &exif::Field) -> Option<String> {
    match field.value {
        exif::Value::Ascii(ref lines) => lines.first().map(|bytes| {
            String::from_utf8_lossy(bytes)
                .trim_matches(char::from(0))
                .trim()
                .to_string()
        }),
        _ => None,
    }
}

/// EXIF datetime format is `YYYY:MM:DD HH:MM:SS`; some writers use dashes.
fn parse_exif_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y:%m:%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_colon_separated_exif_datetime() {
        let dt = parse_exif_datetime("2024:01:23 09:30:00").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 23));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (9, 30, 0));
    }

    #[test]
    fn parses_dash_separated_exif_datetime() {
        assert!(parse_exif_datetime("2024-01-23 09:30:00").is_some());
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(parse_exif_datetime("not a date").is_none());
        assert!(parse_exif_datetime("2024:13:45 99:99:99").is_none());
    }

    #[test]
    fn missing_exif_yields_missing_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.jpg");
        image::RgbImage::new(4, 4).save(&path).unwrap();

        let err = ExifReader::new().capture_datetime(&path).unwrap_err();
        assert!(matches!(err, PhotoToolError::MissingExifTimestamp));
    }
}
