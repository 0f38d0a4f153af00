//! Shared test infrastructure for palette-animator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette_animator::{PaletteBuffer, Rgb555};

// ============================================================================
// Mock Display Palette
// ============================================================================

pub const DISPLAY_LEN: usize = 64;

/// Display palette that records every write for testing
pub struct MockDisplay {
    colors: [Rgb555; DISPLAY_LEN],
    writes: heapless::Vec<(usize, Rgb555), 512>,
}

impl MockDisplay {
    /// All colors set to `fill`
    pub fn filled(fill: Rgb555) -> Self {
        Self {
            colors: [fill; DISPLAY_LEN],
            writes: heapless::Vec::new(),
        }
    }

    /// `colors` loaded at `offset`, everything else black
    pub fn with_colors(offset: usize, colors: &[Rgb555]) -> Self {
        let mut display = Self::filled(Rgb555::BLACK);
        display.colors[offset..offset + colors.len()].copy_from_slice(colors);
        display
    }

    pub fn colors(&self) -> &[Rgb555] {
        &self.colors
    }

    pub fn at(&self, index: usize) -> Rgb555 {
        self.colors[index]
    }

    pub fn writes(&self) -> &[(usize, Rgb555)] {
        &self.writes
    }

    /// Indices written since the last call to `clear_writes`
    pub fn written_indices(&self) -> heapless::Vec<usize, 512> {
        self.writes.iter().map(|&(index, _)| index).collect()
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl PaletteBuffer for MockDisplay {
    fn len(&self) -> usize {
        DISPLAY_LEN
    }

    fn color(&self, index: usize) -> Option<Rgb555> {
        self.colors.get(index).copied()
    }

    fn set_color(&mut self, index: usize, color: Rgb555) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = color;
        }
        let _ = self.writes.push((index, color));
    }
}

// ============================================================================
// Test Colors
// ============================================================================

pub const ORANGE: Rgb555 = Rgb555::new(31, 16, 0);
pub const TEAL: Rgb555 = Rgb555::new(0, 16, 16);
pub const PURPLE: Rgb555 = Rgb555::new(16, 0, 24);
pub const DARK: Rgb555 = Rgb555::new(2, 3, 4);

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Tick `update` exactly `frames` times
pub fn tick<F: FnMut()>(frames: usize, mut update: F) {
    for _ in 0..frames {
        update();
    }
}
