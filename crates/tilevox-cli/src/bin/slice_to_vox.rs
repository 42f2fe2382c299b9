//! slice_to_vox - Turn a horizontal strip of 64x64 slices into a `.vox` model
//!
//! Each 64-pixel-wide tile of the input is one depth layer of the model.

use clap::Parser;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tilevox::{commit_file, slices_to_vox};
use tilevox_cli::default_vox_path;

#[derive(Parser)]
#[command(name = "slice_to_vox")]
#[command(version)]
#[command(about = "Convert a sliced PNG strip into a MagicaVoxel .vox model", long_about = None)]
struct Cli {
    /// Path to sliced PNG (64px tall, width multiple of 64)
    input: PathBuf,

    /// Output .vox path (default: input with .vox extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Don't print progress to stderr
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: Cli) -> Result<PathBuf, Box<dyn Error>> {
    let img = image::open(&cli.input)
        .map_err(|e| format!("Failed to open '{}': {}", cli.input.display(), e))?;
    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();

    let model = slices_to_vox(rgba_img.as_raw(), width as usize, height as usize)?;

    if !cli.quiet {
        eprintln!(
            "Encoded '{}' ({}x{}) as {} slices",
            cli.input.display(),
            width,
            height,
            model.depth()
        );
    }

    let bytes = model.to_bytes();

    let output = cli.output.unwrap_or_else(|| default_vox_path(&cli.input));
    commit_file(&output, |tmp| {
        let mut file = std::fs::File::create(tmp)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        Ok(())
    })?;

    if !cli.quiet {
        eprintln!(
            "Written {} voxels, {} colors ({} bytes) to '{}'",
            model.voxels().len(),
            model.colors().len(),
            bytes.len(),
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
