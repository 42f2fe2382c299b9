//! # tilevox
//!
//! Tools for sprite sheets made of 64x64 tiles.
//!
//! ## Features
//!
//! - **Encoder**: turns a horizontal strip of depth slices into a MagicaVoxel
//!   `.vox` model (`SIZE`, `XYZI` and `RGBA` chunks under `MAIN`)
//! - **Strip**: restacks a vertical tile strip into a horizontal one (and back),
//!   reversing tile order and keeping the pixel format
//!
//! ## Quick Start
//!
//! ### Encoding slices to a voxel model
//!
//! ```ignore
//! use tilevox::slices_to_vox;
//!
//! let img = image::open("tree.png")?.to_rgba8();
//! let (width, height) = img.dimensions();
//! let model = slices_to_vox(img.as_raw(), width as usize, height as usize)?;
//! std::fs::write("tree.vox", model.to_bytes())?;
//! ```
//!
//! ### Restacking a vertical strip
//!
//! ```ignore
//! use tilevox::vertical_to_horizontal;
//!
//! let strip = image::open("walk_v.png")?;
//! vertical_to_horizontal(&strip)?.save("walk_h.png")?;
//! ```

use thiserror::Error;

pub mod chunk;
pub mod encoder;
pub mod output;
pub mod palette;
pub mod strip;

pub use chunk::Chunk;
pub use encoder::{slices_to_vox, slices_to_vox_image, VoxModel, Voxel};
pub use output::commit_file;
pub use palette::{ColorRegistry, Rgba};
pub use strip::{horizontal_to_vertical, vertical_to_horizontal};

/// Edge length of one square tile (and of one voxel slice) in pixels.
pub const TILE_SIZE: usize = 64;

/// Errors that can occur while converting tiles.
#[derive(Debug, Error)]
pub enum TileError {
    /// Image dimensions don't fit the 64-pixel tile grid
    #[error("invalid image shape {width}x{height}: {expected}")]
    InvalidShape {
        width: usize,
        height: usize,
        expected: &'static str,
    },

    /// More distinct opaque colors than the voxel palette can hold
    #[error("more than {limit} colors detected (palette index 0 is reserved)")]
    PaletteOverflow { limit: usize },

    /// Buffer size doesn't match expected size for dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Image library failure while copying or saving pixels
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// I/O failure while writing output
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for tile operations.
pub type Result<T> = core::result::Result<T, TileError>;
