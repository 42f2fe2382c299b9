//! Slice-strip to MagicaVoxel `.vox` encoder.
//!
//! The input is a horizontal strip of 64x64 tiles. Tile `z` becomes depth
//! layer `z` of a 64x64xN model; every opaque pixel becomes one voxel.

use std::io::{self, Write};

use image::RgbaImage;

use crate::chunk::Chunk;
use crate::palette::{ColorRegistry, Rgba, PALETTE_LEN};
use crate::{Result, TileError, TILE_SIZE};

/// File magic at the start of every `.vox` file.
pub const VOX_MAGIC: &[u8; 4] = b"VOX ";

/// Format version written after the magic.
pub const VOX_VERSION: u32 = 150;

/// Offset from registry index to voxel color index.
pub const PALETTE_INDEX_OFFSET: u8 = 2;

/// Largest depth a model can have, since `z` is stored as a byte.
const MAX_DEPTH: usize = 256;

/// One occupied cell of the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Voxel {
    pub x: u8,
    pub y: u8,
    pub z: u8,
    /// Palette index in range 2..=255
    pub color_index: u8,
}

/// A single-model voxel file held in memory.
#[derive(Clone, Debug)]
pub struct VoxModel {
    size: [u32; 3],
    voxels: Vec<Voxel>,
    registry: ColorRegistry,
}

impl VoxModel {
    /// Model extent as `[x, y, z]`.
    pub fn size(&self) -> [u32; 3] {
        self.size
    }

    pub fn depth(&self) -> u32 {
        self.size[2]
    }

    /// Voxels in discovery order.
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Distinct colors in discovery order.
    pub fn colors(&self) -> &[Rgba] {
        self.registry.colors()
    }

    /// The full 256-entry palette as stored in the `RGBA` chunk.
    pub fn palette(&self) -> [Rgba; PALETTE_LEN] {
        self.registry.rgba_entries()
    }

    pub fn size_chunk(&self) -> Chunk {
        let mut content = Vec::with_capacity(12);
        for axis in self.size {
            content.extend_from_slice(&axis.to_le_bytes());
        }
        Chunk::new(b"SIZE", content)
    }

    pub fn xyzi_chunk(&self) -> Chunk {
        let mut content = Vec::with_capacity(4 + self.voxels.len() * 4);
        content.extend_from_slice(&(self.voxels.len() as u32).to_le_bytes());
        for v in &self.voxels {
            content.extend_from_slice(&[v.x, v.y, v.z, v.color_index]);
        }
        Chunk::new(b"XYZI", content)
    }

    pub fn rgba_chunk(&self) -> Chunk {
        let content = self
            .palette()
            .iter()
            .flat_map(|c| c.to_bytes())
            .collect();
        Chunk::new(b"RGBA", content)
    }

    /// The `MAIN` chunk holding `SIZE`, `XYZI` and `RGBA`.
    pub fn main_chunk(&self) -> Chunk {
        Chunk::with_children(
            b"MAIN",
            &[self.size_chunk(), self.xyzi_chunk(), self.rgba_chunk()],
        )
    }

    /// Writes the complete file: magic, version, `MAIN`.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(VOX_MAGIC)?;
        w.write_all(&VOX_VERSION.to_le_bytes())?;
        self.main_chunk().write_to(w)
    }

    #[must_use = "this returns the encoded file"]
    pub fn to_bytes(&self) -> Vec<u8> {
        let main = self.main_chunk();
        let mut out = Vec::with_capacity(8 + main.encoded_len());
        out.extend_from_slice(VOX_MAGIC);
        out.extend_from_slice(&VOX_VERSION.to_le_bytes());
        out.extend_from_slice(&main.to_bytes());
        out
    }
}

/// Build a voxel model from a horizontal strip of 64x64 slices.
///
/// # Arguments
/// * `rgba` - Raw RGBA pixel data (4 bytes per pixel: R, G, B, A)
/// * `width` - Strip width in pixels, a multiple of 64
/// * `height` - Strip height in pixels, must be 64
///
/// # Returns
/// A model of size 64x64x(width/64). Pixels with alpha 0 are empty space.
/// Image rows are flipped so that row 0 ends up at the top (`y = 63`).
///
/// # Errors
/// [`TileError::InvalidShape`] when the strip doesn't fit the tile grid and
/// [`TileError::PaletteOverflow`] past 254 distinct opaque colors.
#[must_use = "this returns the encoded model"]
pub fn slices_to_vox(rgba: &[u8], width: usize, height: usize) -> Result<VoxModel> {
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .unwrap_or(usize::MAX);
    if rgba.len() != expected {
        return Err(TileError::BufferSizeMismatch {
            expected,
            actual: rgba.len(),
        });
    }
    if height != TILE_SIZE || width == 0 || width % TILE_SIZE != 0 {
        return Err(TileError::InvalidShape {
            width,
            height,
            expected: "image must be 64px tall and width multiple of 64",
        });
    }
    let depth = width / TILE_SIZE;
    if depth > MAX_DEPTH {
        return Err(TileError::InvalidShape {
            width,
            height,
            expected: "at most 256 slices fit in a model",
        });
    }

    let mut registry = ColorRegistry::new();
    let mut voxels = Vec::new();

    for z in 0..depth {
        let x0 = z * TILE_SIZE;
        for y in 0..TILE_SIZE {
            let row = (y * width + x0) * 4;
            for (x, px) in rgba[row..row + TILE_SIZE * 4].chunks_exact(4).enumerate() {
                let color = Rgba::from_slice(px);
                if color.is_empty() {
                    continue;
                }
                let index = registry.register(color)?;
                voxels.push(Voxel {
                    x: x as u8,
                    y: (TILE_SIZE - 1 - y) as u8,
                    z: z as u8,
                    color_index: index + PALETTE_INDEX_OFFSET,
                });
            }
        }
    }

    Ok(VoxModel {
        size: [TILE_SIZE as u32, TILE_SIZE as u32, depth as u32],
        voxels,
        registry,
    })
}

/// Build a voxel model from a decoded RGBA image.
pub fn slices_to_vox_image(img: &RgbaImage) -> Result<VoxModel> {
    let (width, height) = img.dimensions();
    slices_to_vox(img.as_raw(), width as usize, height as usize)
}
