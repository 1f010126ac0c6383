// phototools/src/processors/loader.rs
use crate::core::{PhotoToolError, Result};
use crate::processors::ExifReader;
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

pub struct Loader {
    exif: ExifReader,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            exif: ExifReader::new(),
        }
    }

    /// Decode an image and rotate/flip its pixels so they are stored upright,
    /// per the file's EXIF orientation tag. The returned image carries no
    /// metadata; re-encoding it produces an EXIF-free file.
    pub fn load_upright(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        let orientation = self.exif.orientation(path);

        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| {
                PhotoToolError::UnreadableFile(format!("{}: {}", path.display(), e))
            })?;

        let image = apply_orientation(image, orientation);

        let (width, height) = image.dimensions();
        log::debug!(
            "Loaded {}: {}x{} (orientation {})",
            path.display(),
            width,
            height,
            orientation
        );

        Ok(image)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// EXIF orientation values 2-8 encode the transform needed to display the
/// stored pixels upright. 1 and anything out of range are the identity.
pub fn apply_orientation(image: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => image.fliph(),
        3 => image.rotate180(),
        4 => image.flipv(),
        5 => image.rotate90().fliph(),
        6 => image.rotate90(),
        7 => image.rotate270().fliph(),
        8 => image.rotate270(),
        _ => image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_one() -> DynamicImage {
        DynamicImage::ImageRgb8(image::RgbImage::new(2, 1))
    }

    #[test]
    fn rotation_orientations_swap_dimensions() {
        for orientation in [5, 6, 7, 8] {
            let rotated = apply_orientation(two_by_one(), orientation);
            assert_eq!(rotated.dimensions(), (1, 2), "orientation {orientation}");
        }
    }

    #[test]
    fn flip_and_identity_orientations_keep_dimensions() {
        for orientation in [0, 1, 2, 3, 4, 9] {
            let kept = apply_orientation(two_by_one(), orientation);
            assert_eq!(kept.dimensions(), (2, 1), "orientation {orientation}");
        }
    }

    #[test]
    fn load_upright_rejects_non_image_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        let err = Loader::new().load_upright(&path).unwrap_err();
        assert!(matches!(err, PhotoToolError::UnreadableFile(_)));
    }
}
