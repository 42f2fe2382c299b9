//! Restacking of 64x64 tile strips between vertical and horizontal layout.
//!
//! Tile order is reversed on the way through: the last tile of the source
//! becomes the first tile of the output. Pixels are copied in their native
//! format, so a 16-bit grayscale strip stays 16-bit grayscale.

use image::{imageops, DynamicImage, GenericImage, ImageBuffer, Pixel};

use crate::{Result, TileError, TILE_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    VerticalToHorizontal,
    HorizontalToVertical,
}

impl Direction {
    /// Validates the source dimensions and returns the tile count.
    fn tile_count(self, width: u32, height: u32) -> Result<u32> {
        let tile = TILE_SIZE as u32;
        let (fixed, stacked, expected) = match self {
            Direction::VerticalToHorizontal => (
                width,
                height,
                "vertical strip of 64x64 tiles needs width=64 and height multiple of 64",
            ),
            Direction::HorizontalToVertical => (
                height,
                width,
                "horizontal strip of 64x64 tiles needs height=64 and width multiple of 64",
            ),
        };
        if fixed != tile || stacked == 0 || stacked % tile != 0 {
            return Err(TileError::InvalidShape {
                width: width as usize,
                height: height as usize,
                expected,
            });
        }
        Ok(stacked / tile)
    }

    /// Top-left corner of tile `i` in a strip laid out along this direction's source axis.
    fn source_origin(self, i: u32) -> (u32, u32) {
        let offset = i * TILE_SIZE as u32;
        match self {
            Direction::VerticalToHorizontal => (0, offset),
            Direction::HorizontalToVertical => (offset, 0),
        }
    }

    fn target_origin(self, i: u32) -> (u32, u32) {
        let offset = i * TILE_SIZE as u32;
        match self {
            Direction::VerticalToHorizontal => (offset, 0),
            Direction::HorizontalToVertical => (0, offset),
        }
    }
}

/// Convert a vertical strip (64 wide, 64*N tall) into a horizontal strip
/// (64*N wide, 64 tall) with the tile order reversed.
///
/// # Errors
/// [`TileError::InvalidShape`] unless the width is exactly 64 and the height
/// a non-zero multiple of 64.
pub fn vertical_to_horizontal(img: &DynamicImage) -> Result<DynamicImage> {
    restack_dynamic(img, Direction::VerticalToHorizontal)
}

/// Convert a horizontal strip back into a vertical one, reversing tile order.
///
/// This undoes [`vertical_to_horizontal`].
pub fn horizontal_to_vertical(img: &DynamicImage) -> Result<DynamicImage> {
    restack_dynamic(img, Direction::HorizontalToVertical)
}

fn restack_dynamic(img: &DynamicImage, direction: Direction) -> Result<DynamicImage> {
    let count = direction.tile_count(img.width(), img.height())?;

    macro_rules! restack_variants {
        ($($variant:ident),*) => {
            match img {
                $(DynamicImage::$variant(buf) => DynamicImage::$variant(restack(buf, count, direction)?),)*
                other => DynamicImage::ImageRgba32F(restack(&other.to_rgba32f(), count, direction)?),
            }
        };
    }

    Ok(restack_variants!(
        ImageLuma8,
        ImageLumaA8,
        ImageRgb8,
        ImageRgba8,
        ImageLuma16,
        ImageLumaA16,
        ImageRgb16,
        ImageRgba16,
        ImageRgb32F,
        ImageRgba32F
    ))
}

fn restack<P: Pixel>(
    src: &ImageBuffer<P, Vec<P::Subpixel>>,
    count: u32,
    direction: Direction,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>> {
    let tile = TILE_SIZE as u32;
    let (width, height) = match direction {
        Direction::VerticalToHorizontal => (tile * count, tile),
        Direction::HorizontalToVertical => (tile, tile * count),
    };
    let mut out = ImageBuffer::new(width, height);

    for i in 0..count {
        let (sx, sy) = direction.source_origin(count - 1 - i);
        let (dx, dy) = direction.target_origin(i);
        let view = imageops::crop_imm(src, sx, sy, tile, tile);
        out.copy_from(&*view, dx, dy)?;
    }

    Ok(out)
}
