//! Insertion-ordered color registry backing the voxel palette.

use std::collections::HashMap;

use crate::{Result, TileError};

/// Maximum number of distinct colors a model may register.
///
/// Voxels reference `registry index + 2`, so 254 colors end at palette
/// index 255 while slot 0 stays reserved.
pub const MAX_COLORS: usize = 254;

/// Number of entries in a `.vox` palette.
pub const PALETTE_LEN: usize = 256;

/// A single 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, used for palette slot 0 and padding.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from the first four bytes of an RGBA pixel.
    pub(crate) fn from_slice(px: &[u8]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }

    /// True for pixels that represent empty space.
    pub const fn is_empty(&self) -> bool {
        self.a == 0
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Duplicate-free set of colors, each with a stable index in discovery order.
#[derive(Clone, Debug, Default)]
pub struct ColorRegistry {
    lookup: HashMap<Rgba, u8>,
    colors: Vec<Rgba>,
}

impl ColorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `color`, registering it first if it is new.
    ///
    /// Fails with [`TileError::PaletteOverflow`] when a new color would push
    /// the registry past [`MAX_COLORS`]; the registry is unchanged then.
    pub fn register(&mut self, color: Rgba) -> Result<u8> {
        if let Some(&index) = self.lookup.get(&color) {
            return Ok(index);
        }
        if self.colors.len() >= MAX_COLORS {
            return Err(TileError::PaletteOverflow { limit: MAX_COLORS });
        }
        let index = self.colors.len() as u8;
        self.lookup.insert(color, index);
        self.colors.push(color);
        Ok(index)
    }

    pub fn index_of(&self, color: &Rgba) -> Option<u8> {
        self.lookup.get(color).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Registered colors in discovery order.
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Expands the registry into a full 256-entry palette.
    ///
    /// Slot 0 is always transparent, registered colors follow from slot 1,
    /// and unused slots are zero.
    pub fn rgba_entries(&self) -> [Rgba; PALETTE_LEN] {
        let mut entries = [Rgba::TRANSPARENT; PALETTE_LEN];
        for (slot, color) in entries[1..].iter_mut().zip(&self.colors) {
            *slot = *color;
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_keeps_first_index() {
        let mut registry = ColorRegistry::new();
        let red = Rgba::new(255, 0, 0, 255);
        let green = Rgba::new(0, 255, 0, 255);

        assert_eq!(registry.register(red).unwrap(), 0);
        assert_eq!(registry.register(green).unwrap(), 1);
        assert_eq!(registry.register(red).unwrap(), 0);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.colors(), &[red, green]);
    }

    #[test]
    fn test_alpha_is_part_of_identity() {
        let mut registry = ColorRegistry::new();
        registry.register(Rgba::new(10, 20, 30, 255)).unwrap();
        registry.register(Rgba::new(10, 20, 30, 128)).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_overflow_leaves_registry_intact() {
        let mut registry = ColorRegistry::new();
        for i in 0..MAX_COLORS {
            registry.register(Rgba::new(i as u8, 0, 0, 255)).unwrap();
        }

        let extra = Rgba::new(0, 1, 0, 255);
        assert!(matches!(
            registry.register(extra),
            Err(TileError::PaletteOverflow { limit: MAX_COLORS })
        ));
        assert_eq!(registry.len(), MAX_COLORS);
        assert_eq!(registry.index_of(&extra), None);

        // Known colors still resolve when full
        assert_eq!(registry.register(Rgba::new(3, 0, 0, 255)).unwrap(), 3);
    }

    #[test]
    fn test_from_slice_reads_one_pixel() {
        let color = Rgba::from_slice(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(color, Rgba::new(1, 2, 3, 4));
        assert!(!color.is_empty());
        assert!(Rgba::from_slice(&[9, 9, 9, 0]).is_empty());
    }

    #[test]
    fn test_rgba_entries_layout() {
        let mut registry = ColorRegistry::new();
        let blue = Rgba::new(0, 0, 255, 255);
        registry.register(blue).unwrap();

        let entries = registry.rgba_entries();
        assert_eq!(entries[0], Rgba::TRANSPARENT);
        assert_eq!(entries[1], blue);
        assert!(entries[2..].iter().all(|c| *c == Rgba::TRANSPARENT));
    }
}
