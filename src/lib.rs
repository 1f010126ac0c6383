mod core;
mod processors;
mod utils;

pub use crate::core::{
    Outcome, PhotoToolError, ResizePipeline, ResizeTarget, Result, RunSummary,
};
pub use crate::processors::{
    apply_orientation, batch, AnchorDimension, Encoder, ExifReader, Loader, Renamer, Resizer,
};
pub use crate::utils::{init_logger, is_jpeg_path, normalized};

// Re-export commonly used types
pub use image::DynamicImage;
