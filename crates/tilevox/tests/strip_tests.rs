use image::{ColorType, DynamicImage, GenericImageView, GrayImage, ImageBuffer, Luma, Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use tilevox::*;

/// Vertical strip whose tile `i` is filled with a color derived from `i`.
fn numbered_vertical(tiles: u32) -> RgbaImage {
    RgbaImage::from_fn(64, tiles * 64, |_, y| tile_color(y / 64))
}

fn tile_color(i: u32) -> Rgba<u8> {
    Rgba([i as u8 * 40, 255 - i as u8, 7, 255])
}

#[test]
fn test_three_tiles_reversed() {
    let img = DynamicImage::ImageRgba8(numbered_vertical(3));
    let out = vertical_to_horizontal(&img).unwrap();

    assert_eq!(out.dimensions(), (192, 64));
    for (i, expected) in [2, 1, 0].into_iter().enumerate() {
        let x0 = i as u32 * 64;
        assert_eq!(out.get_pixel(x0, 0), tile_color(expected));
        assert_eq!(out.get_pixel(x0 + 63, 63), tile_color(expected));
    }
}

#[test]
fn test_tile_contents_are_copied_intact() {
    let mut src = RgbaImage::new(64, 128);
    src.put_pixel(5, 7, Rgba([1, 2, 3, 4]));
    src.put_pixel(60, 64 + 2, Rgba([9, 9, 9, 9]));

    let out = vertical_to_horizontal(&DynamicImage::ImageRgba8(src)).unwrap();
    // Tile 1 moved to the front, tile 0 to the back
    assert_eq!(out.get_pixel(60, 2), Rgba([9, 9, 9, 9]));
    assert_eq!(out.get_pixel(64 + 5, 7), Rgba([1, 2, 3, 4]));
}

#[test]
fn test_single_tile_is_unchanged() {
    let src = numbered_vertical(1);
    let out = vertical_to_horizontal(&DynamicImage::ImageRgba8(src.clone())).unwrap();
    assert_eq!(out.to_rgba8(), src);
}

#[test]
fn test_pixel_format_is_preserved() {
    let gray = GrayImage::from_fn(64, 128, |_, y| Luma([(y / 64) as u8 * 100]));
    let out = vertical_to_horizontal(&DynamicImage::ImageLuma8(gray)).unwrap();
    assert_eq!(out.color(), ColorType::L8);
    assert_eq!(out.as_luma8().unwrap().get_pixel(0, 0), &Luma([100]));

    let deep: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_fn(64, 128, |_, y| Luma([1000 + (y / 64) as u16]));
    let out = vertical_to_horizontal(&DynamicImage::ImageLuma16(deep)).unwrap();
    assert_eq!(out.color(), ColorType::L16);
    assert_eq!(out.as_luma16().unwrap().get_pixel(0, 0), &Luma([1001]));
    assert_eq!(out.as_luma16().unwrap().get_pixel(64, 0), &Luma([1000]));
}

#[test]
fn test_round_trip_restores_tile_order() {
    let src = numbered_vertical(5);
    let img = DynamicImage::ImageRgba8(src.clone());

    let horizontal = vertical_to_horizontal(&img).unwrap();
    let vertical = horizontal_to_vertical(&horizontal).unwrap();

    assert_eq!(vertical.dimensions(), (64, 320));
    assert_eq!(vertical.to_rgba8(), src);
}

#[test]
fn test_invalid_vertical_shapes() {
    for (w, h) in [(100, 64), (64, 100), (128, 128), (64, 0)] {
        let img = DynamicImage::new_rgba8(w, h);
        assert!(
            matches!(
                vertical_to_horizontal(&img),
                Err(TileError::InvalidShape { .. })
            ),
            "{w}x{h} should be rejected"
        );
    }
}

#[test]
fn test_invalid_horizontal_shapes() {
    for (w, h) in [(64, 128), (100, 64), (0, 64), (128, 128), (64, 100)] {
        let img = DynamicImage::new_rgba8(w, h);
        assert!(
            matches!(
                horizontal_to_vertical(&img),
                Err(TileError::InvalidShape { .. })
            ),
            "{w}x{h} should be rejected"
        );
    }
}
