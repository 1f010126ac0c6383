// phototools/src/core/processor.rs
use super::{Outcome, PhotoToolError, Result};
use crate::processors::{AnchorDimension, Encoder, Loader, Resizer};
use image::GenericImageView;
use std::path::{Path, PathBuf};

/// How output dimensions are derived from the (orientation-corrected) input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeTarget {
    /// Cap `max(width, height)` at the given size; smaller images pass
    /// through unresized but are still re-encoded at the configured quality.
    LongestEdge(u32),
    /// Scale so the anchor dimension hits the given size exactly, the other
    /// dimension following proportionally.
    Anchor(AnchorDimension, u32),
}

/// Load → orient upright → scale → encode → write, for one file.
///
/// Output files keep the input filename, carry no EXIF, and overwrite any
/// existing file of the same name in the output directory.
pub struct ResizePipeline {
    loader: Loader,
    resizer: Resizer,
    encoder: Encoder,
    target: ResizeTarget,
    output_dir: PathBuf,
}

impl ResizePipeline {
    pub fn new(target: ResizeTarget, quality: u8, output_dir: PathBuf) -> Self {
        Self {
            loader: Loader::new(),
            resizer: Resizer::new(),
            encoder: Encoder::new(quality),
            target,
            output_dir,
        }
    }

    pub fn process(&self, input_path: &Path) -> Result<Outcome> {
        let file_name = input_path.file_name().ok_or_else(|| {
            PhotoToolError::InvalidParameter(format!(
                "invalid file name: {}",
                input_path.display()
            ))
        })?;

        let image = self.loader.load_upright(input_path)?;
        let (width, height) = image.dimensions();

        let (image, outcome) = match self.target {
            ResizeTarget::LongestEdge(max_size) => {
                match Resizer::fit_longest_edge(width, height, max_size) {
                    Some((new_w, new_h)) => {
                        let resized = self.resizer.resize(&image, new_w, new_h);
                        (
                            resized,
                            Outcome::Resized {
                                width: new_w,
                                height: new_h,
                                scaled: true,
                            },
                        )
                    }
                    None => (
                        image,
                        Outcome::Resized {
                            width,
                            height,
                            scaled: false,
                        },
                    ),
                }
            }
            ResizeTarget::Anchor(anchor, size) => {
                let (new_w, new_h) = Resizer::scale_to_anchor(width, height, anchor, size);
                let resized = self.resizer.resize(&image, new_w, new_h);
                (
                    resized,
                    Outcome::Thumbnailed {
                        width: new_w,
                        height: new_h,
                    },
                )
            }
        };

        let output_path = self.output_dir.join(file_name);
        self.encoder.save(&image, &output_path)?;

        Ok(outcome)
    }
}
