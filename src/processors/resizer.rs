// phototools/src/processors/resizer.rs
use image::{imageops::FilterType, DynamicImage, GenericImageView};

/// The dimension whose target size drives the scale factor for a thumbnail;
/// the other dimension follows proportionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorDimension {
    Width,
    Height,
}

pub struct Resizer {
    filter: FilterType,
}

impl Resizer {
    pub fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }

    pub fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        if (width, height) == image.dimensions() {
            log::debug!("Image dimensions unchanged, skipping resample");
            return image.clone();
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );

        // Both dimensions were computed from one scale factor, so exact
        // resize cannot distort the aspect ratio beyond rounding.
        image.resize_exact(width, height, self.filter)
    }

    /// Dimensions that cap the longest edge at `max_size`, or `None` when the
    /// image already fits.
    pub fn fit_longest_edge(width: u32, height: u32, max_size: u32) -> Option<(u32, u32)> {
        let longest = width.max(height);
        if longest <= max_size {
            return None;
        }

        let scale = max_size as f64 / longest as f64;
        Some(scaled_dimensions(width, height, scale))
    }

    /// Dimensions scaling the anchor dimension to exactly `target`, the other
    /// proportionally.
    pub fn scale_to_anchor(
        width: u32,
        height: u32,
        anchor: AnchorDimension,
        target: u32,
    ) -> (u32, u32) {
        let scale = match anchor {
            AnchorDimension::Width => target as f64 / width as f64,
            AnchorDimension::Height => target as f64 / height as f64,
        };
        scaled_dimensions(width, height, scale)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

fn scaled_dimensions(width: u32, height: u32, scale: f64) -> (u32, u32) {
    let new_width = (width as f64 * scale).round().max(1.0) as u32;
    let new_height = (height as f64 * scale).round().max(1.0) as u32;
    (new_width, new_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_edge_shrinks_landscape() {
        assert_eq!(
            Resizer::fit_longest_edge(6000, 4000, 3000),
            Some((3000, 2000))
        );
    }

    #[test]
    fn longest_edge_shrinks_portrait() {
        assert_eq!(
            Resizer::fit_longest_edge(4000, 6000, 3000),
            Some((2000, 3000))
        );
    }

    #[test]
    fn image_within_limit_needs_no_resize() {
        assert_eq!(Resizer::fit_longest_edge(2000, 1000, 3000), None);
        assert_eq!(Resizer::fit_longest_edge(3000, 3000, 3000), None);
    }

    #[test]
    fn odd_ratios_round_to_nearest() {
        // 3000 / 4501 * 3001 = 2000.2... -> 2000
        assert_eq!(
            Resizer::fit_longest_edge(3001, 4501, 3000),
            Some((2000, 3000))
        );
    }

    #[test]
    fn height_anchor_drives_width() {
        assert_eq!(
            Resizer::scale_to_anchor(3000, 1500, AnchorDimension::Height, 200),
            (400, 200)
        );
    }

    #[test]
    fn width_anchor_drives_height() {
        assert_eq!(
            Resizer::scale_to_anchor(1500, 3000, AnchorDimension::Width, 200),
            (200, 400)
        );
    }

    #[test]
    fn anchor_scale_may_upscale() {
        assert_eq!(
            Resizer::scale_to_anchor(50, 100, AnchorDimension::Height, 200),
            (100, 200)
        );
    }

    #[test]
    fn degenerate_dimension_clamps_to_one() {
        assert_eq!(
            Resizer::scale_to_anchor(1, 4000, AnchorDimension::Height, 200),
            (1, 200)
        );
    }

    #[test]
    fn resize_skips_identical_dimensions() {
        let image = DynamicImage::ImageRgb8(image::RgbImage::new(8, 4));
        let out = Resizer::new().resize(&image, 8, 4);
        assert_eq!(out.dimensions(), (8, 4));
    }
}
