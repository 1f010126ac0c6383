use anyhow::{bail, Context, Result};
use clap::Parser;
use phototools::{batch, init_logger, normalized, ResizePipeline, ResizeTarget};
use std::path::PathBuf;

/// Resize JPEG files for web display: cap the longest edge, re-encode at
/// reduced quality, and strip EXIF metadata. Images already within the limit
/// are re-encoded without resizing.
#[derive(Parser)]
#[command(name = "resize_images", version)]
struct Cli {
    /// Maximum size of the longest edge, in pixels
    #[arg(long = "pixels", value_name = "MAX_SIZE_IN_PIXELS", default_value_t = 3000)]
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

    /// Directory the resized copies are written to [default: SOURCE_DIR/resized]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let source = match cli.source_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    let output = cli.output_dir.unwrap_or_else(|| source.join("resized"));

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

    println!(
        "Found {} image(s) to process (max {}px, quality {})\n",
        files.len(),
        cli.pixels,
        cli.quality
    );

    let pipeline = ResizePipeline::new(
        ResizeTarget::LongestEdge(cli.pixels),
        cli.quality,
        output.clone(),
    );
    let summary = batch::run(&files, |path| pipeline.process(path));
    summary.report();
    println!("Resized images saved to: {}", output.display());

    if !summary.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}
