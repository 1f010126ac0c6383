use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use phototools::{batch, init_logger, normalized, AnchorDimension, ResizePipeline, ResizeTarget};
use std::path::PathBuf;

/// Generate thumbnails from JPEG files: scale one anchor dimension to a
/// fixed size, the other following proportionally, and strip EXIF metadata.
#[derive(Parser)]
#[command(name = "generate_thumbs", version)]
struct Cli {
    /// Which dimension the target size applies to
    #[arg(long, value_enum, default_value = "height")]
    dimension: Dimension,

    /// Target size of the anchor dimension, in pixels
    #[arg(long = "pixels", value_name = "DIMENSION_SIZE_IN_PIXELS", default_value_t = 200)]
    pixels: u32,

    /// JPEG quality of the output
    #[arg(long, value_name = "QUALITY", default_value_t = 80,
          value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory containing the source JPEGs [default: current directory]
    source_dir: Option<PathBuf>,

    /// Directory the thumbnails are written to [default: SOURCE_DIR/thumbs]
    output_dir: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Dimension {
    Width,
    Height,
}

impl From<Dimension> for AnchorDimension {
    fn from(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Width => AnchorDimension::Width,
            Dimension::Height => AnchorDimension::Height,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let source = match cli.source_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    let output = cli.output_dir.unwrap_or_else(|| source.join("thumbs"));

    if normalized(&source) == normalized(&output) {
        bail!("source and output directories cannot be the same");
    }

    let files = batch::collect_jpeg_files(&source)
        .with_context(|| format!("cannot list {}", source.display()))?;

    if files.is_empty() {
        println!("No JPEG files found in {}", source.display());
        return Ok(());
    }

    std::fs::create_dir_all(&output)
        .with_context(|| format!("cannot create output directory {}", output.display()))?;

    println!("Found {} image(s) to process\n", files.len());

    let pipeline = ResizePipeline::new(
        ResizeTarget::Anchor(cli.dimension.into(), cli.pixels),
        cli.quality,
        output.clone(),
    );
    let summary = batch::run(&files, |path| pipeline.process(path));
    summary.report();
    println!("Thumbnails saved to: {}", output.display());

    if !summary.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}
