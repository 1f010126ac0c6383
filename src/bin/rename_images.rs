use anyhow::{Context, Result};
use clap::Parser;
use phototools::{batch, init_logger, Renamer};

/// Rename JPEG files in the current directory to
/// {YYYYMMDD-HHMMSS}-{4hex}.jpg, using their EXIF capture time shifted from
/// EST to UTC. Files already named that way are skipped, so the command can
/// be re-run safely.
#[derive(Parser)]
#[command(name = "rename_images", version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let dir = std::env::current_dir().context("cannot determine current directory")?;
    let files = batch::collect_jpeg_files(&dir)
        .with_context(|| format!("cannot list {}", dir.display()))?;

    if files.is_empty() {
        println!("No JPEG files found in {}", dir.display());
        return Ok(());
    }

    println!("Found {} image(s) to process\n", files.len());

    let renamer = Renamer::new();
    let summary = batch::run(&files, |path| renamer.process(path));
    summary.report();

    if !summary.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}
