#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tilevox::slices_to_vox;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    slices: u8,
    height: u8,
    pixels: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let width = (input.slices as usize % 8) * 64;
    let height = input.height as usize % 80;

    let expected_size = width * height * 4;
    if input.pixels.is_empty() {
        return;
    }

    // Tile the fuzz bytes over the whole buffer so large images still vary
    let pixels: Vec<u8> = input.pixels.iter().copied().cycle().take(expected_size).collect();

    // The encoder should never panic
    if let Ok(model) = slices_to_vox(&pixels, width, height) {
        let bytes = model.to_bytes();
        assert_eq!(&bytes[..4], b"VOX ");
        assert!(model.voxels().iter().all(|v| v.color_index >= 2));
    }
});
