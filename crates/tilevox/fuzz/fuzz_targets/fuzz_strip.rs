#![no_main]

use arbitrary::Arbitrary;
use image::{DynamicImage, RgbaImage};
use libfuzzer_sys::fuzz_target;
use tilevox::{horizontal_to_vertical, vertical_to_horizontal};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    width: u8,
    height: u16,
    pixels: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let width = input.width as u32 % 130;
    let height = input.height as u32 % 520;
    if input.pixels.is_empty() {
        return;
    }

    let len = (width * height * 4) as usize;
    let raw: Vec<u8> = input.pixels.iter().copied().cycle().take(len).collect();
    let Some(img) = RgbaImage::from_raw(width, height, raw) else {
        return;
    };
    let img = DynamicImage::ImageRgba8(img);

    // Restacking twice must give back the input
    if let Ok(horizontal) = vertical_to_horizontal(&img) {
        let back = horizontal_to_vertical(&horizontal).expect("restacked strip is valid");
        assert_eq!(back, img);
    }
});
