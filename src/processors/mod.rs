// phototools/src/processors/mod.rs
pub mod batch;
mod encoder;
mod loader;
mod metadata;
mod renamer;
mod resizer;

pub use encoder::Encoder;
pub use loader::{apply_orientation, Loader};
pub use metadata::ExifReader;
pub use renamer::Renamer;
pub use resizer::{AnchorDimension, Resizer};
