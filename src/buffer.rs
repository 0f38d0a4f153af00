//! Display palette abstraction.
//!
//! Animators never address a fixed global palette. The engine hands them
//! something implementing [`PaletteBuffer`] each frame instead, which keeps
//! several animators independent and lets tests use a plain array.

use crate::colors::Rgb555;

/// Total palette RAM entries: 256 background colors followed by 256 object colors.
pub const PLTT_SIZE: usize = 512;

/// Colors per 4bpp palette bank.
pub const BANK_SIZE: usize = 16;

/// First palette index of background bank `bank`.
#[must_use]
pub const fn bg_pltt_id(bank: usize) -> usize {
    bank * BANK_SIZE
}

/// First palette index of object bank `bank`.
#[must_use]
pub const fn obj_pltt_id(bank: usize) -> usize {
    PLTT_SIZE / 2 + bank * BANK_SIZE
}

/// Trait for a palette the animators read from and publish into.
///
/// Implement this for your engine's palette buffers.
pub trait PaletteBuffer {
    /// Number of addressable colors.
    fn len(&self) -> usize;

    /// Returns true if the buffer holds no colors.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the color at `index`, or `None` past the end.
    fn color(&self, index: usize) -> Option<Rgb555>;

    /// Publishes the color at `index`. Writes past the end are ignored.
    fn set_color(&mut self, index: usize, color: Rgb555);

    /// Loads the color at `index` as the new base color.
    ///
    /// Buffers that keep separate base and displayed colors write both;
    /// everything else publishes as [`set_color`](Self::set_color) does.
    fn load_color(&mut self, index: usize, color: Rgb555) {
        self.set_color(index, color);
    }
}

impl PaletteBuffer for [Rgb555] {
    fn len(&self) -> usize {
        <[Rgb555]>::len(self)
    }

    fn color(&self, index: usize) -> Option<Rgb555> {
        self.get(index).copied()
    }

    fn set_color(&mut self, index: usize, color: Rgb555) {
        if let Some(slot) = self.get_mut(index) {
            *slot = color;
        }
    }
}

impl<const N: usize> PaletteBuffer for [Rgb555; N] {
    fn len(&self) -> usize {
        N
    }

    fn color(&self, index: usize) -> Option<Rgb555> {
        self.as_slice().color(index)
    }

    fn set_color(&mut self, index: usize, color: Rgb555) {
        self.as_mut_slice().set_color(index, color);
    }
}

impl<const N: usize> PaletteBuffer for heapless::Vec<Rgb555, N> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn color(&self, index: usize) -> Option<Rgb555> {
        self.as_slice().color(index)
    }

    fn set_color(&mut self, index: usize, color: Rgb555) {
        self.as_mut_slice().set_color(index, color);
    }
}

/// The engine's pair of palette buffers.
///
/// `unfaded` holds the colors as loaded; `faded` is what gets copied to
/// palette RAM at vblank after screen fades are applied. Animators snapshot
/// from `unfaded` and publish into `faded`.
///
/// As a [`PaletteBuffer`] it reads `unfaded`, publishes into `faded`, and
/// loads into both.
#[derive(Clone)]
pub struct DualPalette<const N: usize = PLTT_SIZE> {
    unfaded: [Rgb555; N],
    faded: [Rgb555; N],
}

impl<const N: usize> DualPalette<N> {
    /// Creates a palette pair with every color black.
    pub const fn new() -> Self {
        Self {
            unfaded: [Rgb555::BLACK; N],
            faded: [Rgb555::BLACK; N],
        }
    }

    /// Writes `colors` into both buffers starting at `offset`, clipped to the end.
    pub fn load(&mut self, offset: usize, colors: &[Rgb555]) {
        for (i, &color) in colors.iter().enumerate() {
            self.load_color(offset + i, color);
        }
    }

    pub fn unfaded(&self) -> &[Rgb555; N] {
        &self.unfaded
    }

    pub fn unfaded_mut(&mut self) -> &mut [Rgb555; N] {
        &mut self.unfaded
    }

    pub fn faded(&self) -> &[Rgb555; N] {
        &self.faded
    }

    pub fn faded_mut(&mut self) -> &mut [Rgb555; N] {
        &mut self.faded
    }
}

impl<const N: usize> Default for DualPalette<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PaletteBuffer for DualPalette<N> {
    fn len(&self) -> usize {
        N
    }

    fn color(&self, index: usize) -> Option<Rgb555> {
        self.unfaded.color(index)
    }

    fn set_color(&mut self, index: usize, color: Rgb555) {
        self.faded.set_color(index, color);
    }

    fn load_color(&mut self, index: usize, color: Rgb555) {
        self.unfaded.set_color(index, color);
        self.faded.set_color(index, color);
    }
}
