// phototools/src/processors/encoder.rs
use crate::core::{PhotoToolError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct Encoder {
    quality: u8,
}

impl Encoder {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    /// Encode as JPEG at the configured quality. The in-memory image carries
    /// no metadata, so the written file has no EXIF segment.
    pub fn save(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        log::debug!(
            "Saving JPEG to {} at quality {}",
            path.display(),
            self.quality
        );

        let file = File::create(path).map_err(|e| {
            PhotoToolError::UnwritableOutput(format!("{}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);

        let encoder = JpegEncoder::new_with_quality(&mut writer, self.quality);
        image.write_with_encoder(encoder)?;
        writer.flush()?;

        log::debug!("Saved {}", path.display());
        Ok(())
    }
}
