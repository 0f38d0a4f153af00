//! Palette animator: blends a palette region toward target colors.
//!
//! Provides [`PaletteAnimator`], which owns the target, current and original
//! colors of one contiguous palette region and publishes interpolated colors
//! into a [`PaletteBuffer`] once per frame. Without a sequence every color
//! except index 0 blends together; with a [`ColorSequence`] one color blends
//! at a time, in sequence order.

use crate::buffer::PaletteBuffer;
use crate::colors::Rgb555;
use crate::sequence::ColorSequence;
use crate::types::{AnimationMode, AnimatorError};
use heapless::Vec;

/// Region-relative index of the transparent color.
pub const TRANSPARENT_INDEX: usize = 0;

/// Animation session for one contiguous palette region.
///
/// The three color buffers always have the same length (`color_count`) and
/// belong to this animator alone. The display palette is borrowed per call
/// and only `[offset, offset + color_count)` of it is ever written.
///
/// # Type Parameters
/// * `N` - Maximum number of colors in the region
/// * `S` - Maximum number of indices in a sequence
#[derive(Debug, Clone)]
pub struct PaletteAnimator<const N: usize, const S: usize> {
    target: Vec<Rgb555, N>,
    current: Vec<Rgb555, N>,
    original: Vec<Rgb555, N>,
    offset: usize,
    sequence: Option<ColorSequence<S>>,
    step: u8,
    total_steps: u8,
    active: bool,
}

impl<const N: usize, const S: usize> PaletteAnimator<N, S> {
    /// Creates an active animator in simultaneous mode.
    ///
    /// Copies `target[..size]` and snapshots the colors currently in
    /// `source[offset..offset + size]` as both the current and original
    /// palettes. `source` is only read.
    ///
    /// A `total_steps` of 0 is accepted; the first update then lands on the
    /// target directly.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `size` is larger than `N`
    /// * `TargetTooShort` - `target` holds fewer than `size` colors
    /// * `RegionOutOfBounds` - the region does not fit in `source`
    pub fn new<B: PaletteBuffer + ?Sized>(
        target: &[Rgb555],
        offset: usize,
        size: usize,
        total_steps: u8,
        source: &B,
    ) -> Result<Self, AnimatorError> {
        let result = Self::build(target, offset, size, total_steps, source);
        match &result {
            Ok(_) => debug!("palette animator created: offset={} size={}", offset, size),
            Err(_) => warn!("palette animator rejected: offset={} size={}", offset, size),
        }
        result
    }

    fn build<B: PaletteBuffer + ?Sized>(
        target: &[Rgb555],
        offset: usize,
        size: usize,
        total_steps: u8,
        source: &B,
    ) -> Result<Self, AnimatorError> {
        if size > N {
            return Err(AnimatorError::CapacityExceeded {
                requested: size,
                capacity: N,
            });
        }

        if target.len() < size {
            return Err(AnimatorError::TargetTooShort {
                required: size,
                provided: target.len(),
            });
        }

        let out_of_bounds = AnimatorError::RegionOutOfBounds {
            offset,
            size,
            palette_len: source.len(),
        };
        if offset.checked_add(size).is_none_or(|end| end > source.len()) {
            return Err(out_of_bounds);
        }

        let mut snapshot: Vec<Rgb555, N> = Vec::new();
        for i in offset..offset + size {
            let color = source.color(i).ok_or(out_of_bounds)?;
            let _ = snapshot.push(color);
        }

        let mut target_colors: Vec<Rgb555, N> = Vec::new();
        let _ = target_colors.extend_from_slice(&target[..size]);

        Ok(Self {
            target: target_colors,
            current: snapshot.clone(),
            original: snapshot,
            offset,
            sequence: None,
            step: 0,
            total_steps,
            active: true,
        })
    }

    /// Replaces the sequence with one built from `indexes`.
    ///
    /// Indices at or past [`color_count`](Self::color_count) are accepted and
    /// skipped during updates. Resets the step counter and reactivates.
    ///
    /// # Errors
    /// * `EmptySequence` - `indexes` is empty
    /// * `CapacityExceeded` - more than `S` indices
    ///
    /// On error the previous sequence and all other state are left untouched.
    pub fn set_sequence(&mut self, indexes: &[u8], delay: u8) -> Result<(), AnimatorError> {
        match ColorSequence::new(indexes, delay) {
            Ok(sequence) => {
                self.load_sequence(sequence);
                Ok(())
            }
            Err(err) => {
                warn!("sequence rejected, keeping previous configuration");
                Err(err)
            }
        }
    }

    /// Installs a prebuilt sequence, rewound to its first index.
    pub fn load_sequence(&mut self, mut sequence: ColorSequence<S>) {
        sequence.rewind();
        debug!(
            "sequence installed: len={} delay={}",
            sequence.len(),
            sequence.delay()
        );
        self.sequence = Some(sequence);
        self.step = 0;
        self.active = true;
    }

    /// Drops the sequence and returns to simultaneous mode.
    pub fn clear_sequence(&mut self) {
        self.sequence = None;
        self.step = 0;
    }

    /// Desaturates the region at once.
    ///
    /// Every color except index 0 is recomputed from the original snapshot
    /// with [`Rgb555::to_grayscale`] and published immediately. The animator
    /// stays active, so later updates blend from gray toward the target; a
    /// loaded sequence is rewound and drives that blend again.
    pub fn start_grayscale<B: PaletteBuffer + ?Sized>(&mut self, display: &mut B) {
        if let Some(sequence) = self.sequence.as_mut() {
            sequence.rewind();
        }

        for i in TRANSPARENT_INDEX + 1..self.color_count() {
            self.current[i] = self.original[i].to_grayscale();
            display.set_color(self.offset + i, self.current[i]);
        }

        self.step = 0;
        self.active = true;
    }

    /// Primes a full-region fade in from black.
    ///
    /// Clears any sequence, publishes black for every color except index 0,
    /// and restarts the transition so updates blend toward the target.
    pub fn start_fade_in<B: PaletteBuffer + ?Sized>(&mut self, display: &mut B) {
        self.sequence = None;
        for i in TRANSPARENT_INDEX + 1..self.color_count() {
            self.current[i] = Rgb555::BLACK;
            display.set_color(self.offset + i, Rgb555::BLACK);
        }

        self.step = 0;
        self.active = true;
    }

    /// Primes an index-driven fade.
    ///
    /// Rewinds the loaded sequence, or installs palette order
    /// (`1..color_count`, no delay) when none is loaded. A region with no
    /// color besides index 0 has nothing to traverse and stays in
    /// simultaneous mode.
    ///
    /// # Errors
    /// * `CapacityExceeded` - palette order does not fit in `S`
    pub fn start_sequential(&mut self) -> Result<(), AnimatorError> {
        if let Some(sequence) = self.sequence.as_mut() {
            sequence.rewind();
        } else if self.color_count() > TRANSPARENT_INDEX + 1 {
            let mut builder = ColorSequence::<S>::builder();
            for i in TRANSPARENT_INDEX + 1..self.color_count() {
                let index = u8::try_from(i).map_err(|_| AnimatorError::CapacityExceeded {
                    requested: self.color_count(),
                    capacity: usize::from(u8::MAX) + 1,
                })?;
                builder = builder.index(index)?;
            }
            self.sequence = Some(builder.build()?);
        }

        self.step = 0;
        self.active = true;
        Ok(())
    }

    /// Advances the animation by one frame, publishing changed colors.
    ///
    /// Does nothing once the animator is inactive.
    pub fn update<B: PaletteBuffer + ?Sized>(&mut self, display: &mut B) {
        if !self.active {
            return;
        }

        // blend with the advanced step so the last tick lands on the target
        let next = self.step.saturating_add(1);

        if let Some(sequence) = self.sequence.as_mut() {
            if !sequence.tick_delay() {
                return;
            }

            if let Some(index) = sequence.current() {
                let i = usize::from(index);
                if i < self.current.len() {
                    self.current[i] = self.current[i].lerp(self.target[i], next, self.total_steps);
                    display.set_color(self.offset + i, self.current[i]);
                }
            }

            self.step = next;
            if self.step >= self.total_steps {
                self.step = 0;
                if sequence.advance() {
                    self.active = false;
                    debug!("sequence exhausted at offset={}", self.offset);
                }
            }
        } else {
            for i in TRANSPARENT_INDEX + 1..self.current.len() {
                self.current[i] = self.current[i].lerp(self.target[i], next, self.total_steps);
                display.set_color(self.offset + i, self.current[i]);
            }

            self.step = next;
            if self.step >= self.total_steps {
                self.active = false;
                debug!("fade finished at offset={}", self.offset);
            }
        }
    }

    /// Returns true if the next update will do work.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn mode(&self) -> AnimationMode {
        match self.sequence {
            Some(_) => AnimationMode::Sequence,
            None => AnimationMode::Simultaneous,
        }
    }

    /// Returns a reference to the loaded sequence, if any.
    pub fn sequence(&self) -> Option<&ColorSequence<S>> {
        self.sequence.as_ref()
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn total_steps(&self) -> u8 {
        self.total_steps
    }

    /// Base position of the region in the display palette.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of colors managed, fixed at creation.
    pub fn color_count(&self) -> usize {
        self.current.len()
    }

    /// Last values computed for each color.
    pub fn current_colors(&self) -> &[Rgb555] {
        &self.current
    }

    pub fn target_colors(&self) -> &[Rgb555] {
        &self.target
    }

    /// Snapshot taken from the display palette at creation.
    pub fn original_colors(&self) -> &[Rgb555] {
        &self.original
    }
}
