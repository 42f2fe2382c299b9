//! vertical_to_horizontal - Restack a vertical strip of 64x64 tiles horizontally
//!
//! The last tile of the vertical strip becomes the first tile of the output.

use clap::Parser;
use image::ImageFormat;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tilevox::{commit_file, vertical_to_horizontal};
use tilevox_cli::default_horizontal_path;

#[derive(Parser)]
#[command(name = "vertical_to_horizontal")]
#[command(version)]
#[command(about = "Convert a vertical strip of 64x64 tiles into a horizontal one", long_about = None)]
struct Cli {
    /// Path to vertical sliced PNG (width=64, height multiple of 64)
    input: PathBuf,

    /// Output PNG path (default: input name with _h suffix)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Don't print progress to stderr
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: Cli) -> Result<PathBuf, Box<dyn Error>> {
    let img = image::open(&cli.input)
        .map_err(|e| format!("Failed to open '{}': {}", cli.input.display(), e))?;

    let horizontal = vertical_to_horizontal(&img)?;

    if !cli.quiet {
        eprintln!(
            "Restacked '{}' ({}x{}, {:?}) into {} tiles",
            cli.input.display(),
            img.width(),
            img.height(),
            img.color(),
            horizontal.width() / 64
        );
    }

    let output = cli
        .output
        .unwrap_or_else(|| default_horizontal_path(&cli.input));
    let format = ImageFormat::from_path(&output)?;
    commit_file(&output, |tmp| Ok(horizontal.save_with_format(tmp, format)?))?;

    if !cli.quiet {
        eprintln!(
            "Written {}x{} to '{}'",
            horizontal.width(),
            horizontal.height(),
            output.display()
        );
    }

    Ok(output)
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(output) => {
            println!("{}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
