//! Looping color cycling for twinkling star fields.
//!
//! [`StarAnimation`] snapshots a palette region once and then, forever, moves
//! each animated color along its own cyclic list of snapshot colors. Unlike
//! [`PaletteAnimator`](crate::PaletteAnimator) it never finishes on its own;
//! call [`StarAnimation::stop`] to freeze it.

use crate::buffer::{PaletteBuffer, bg_pltt_id};
use crate::colors::Rgb555;
use crate::effect::PaletteEffect;
use crate::types::AnimatorError;
use heapless::Vec;

/// Background bank holding the title screen star colors.
pub const STAR_BANK: usize = 14;

pub const COLOR_IDX_BACKGROUND: u8 = 2;
pub const COLOR_IDX_DIM: u8 = 3;
pub const COLOR_IDX_MEDIUM: u8 = 4;
pub const COLOR_IDX_BRIGHT: u8 = 5;

/// Star animation for the title screen: bank 14, colors 3-5 cycling through 2-5.
pub type TitleScreenStars = StarAnimation<6, 3, 6>;

/// Timing for a [`StarAnimation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StarAnimationConfig {
    /// Frames per progress step.
    pub frame_divider: u8,

    /// Progress steps per transition between two sequence entries.
    pub transition_frames: u8,
}

impl Default for StarAnimationConfig {
    fn default() -> Self {
        Self {
            frame_divider: 2,
            transition_frames: 32,
        }
    }
}

/// One animated color and the cycle it follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwinkleChannel<const S: usize> {
    target: u8,
    sequence: Vec<u8, S>,
    current_index: usize,
}

impl<const S: usize> TwinkleChannel<S> {
    /// Region-relative index this channel writes.
    pub fn target(&self) -> u8 {
        self.target
    }

    /// Region-relative indices of the saved colors, visited cyclically.
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn position(&self) -> usize {
        self.current_index
    }

    fn endpoints(&self) -> (usize, usize) {
        let len = self.sequence.len();
        let from = self.sequence[self.current_index];
        let to = self.sequence[(self.current_index + 1) % len];
        (usize::from(from), usize::from(to))
    }

    fn advance(&mut self) {
        self.current_index = (self.current_index + 1) % self.sequence.len();
    }
}

/// Endless palette cycling over a snapshot of one region.
///
/// # Type Parameters
/// * `N` - Maximum number of colors in the region
/// * `C` - Maximum number of animated channels
/// * `S` - Maximum length of a channel's cycle
#[derive(Debug, Clone)]
pub struct StarAnimation<const N: usize, const C: usize, const S: usize> {
    saved: Vec<Rgb555, N>,
    offset: usize,
    channels: Vec<TwinkleChannel<S>, C>,
    config: StarAnimationConfig,
    frame_counter: u8,
    progress: u8,
    active: bool,
}

impl<const N: usize, const C: usize, const S: usize> StarAnimation<N, C, S> {
    /// Snapshots `source[offset..offset + size]` and starts with no channels.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `size` is larger than `N`
    /// * `RegionOutOfBounds` - the region does not fit in `source`
    pub fn new<B: PaletteBuffer + ?Sized>(
        offset: usize,
        size: usize,
        source: &B,
        config: StarAnimationConfig,
    ) -> Result<Self, AnimatorError> {
        if size > N {
            return Err(AnimatorError::CapacityExceeded {
                requested: size,
                capacity: N,
            });
        }

        let out_of_bounds = AnimatorError::RegionOutOfBounds {
            offset,
            size,
            palette_len: source.len(),
        };
        let mut saved: Vec<Rgb555, N> = Vec::new();
        for i in 0..size {
            let color = offset
                .checked_add(i)
                .and_then(|index| source.color(index))
                .ok_or(out_of_bounds)?;
            let _ = saved.push(color);
        }

        Ok(Self {
            saved,
            offset,
            channels: Vec::new(),
            config,
            frame_counter: 0,
            progress: 0,
            active: true,
        })
    }

    /// Adds a channel writing region index `target`, cycling through `sequence`.
    ///
    /// # Errors
    /// * `EmptySequence` - `sequence` is empty
    /// * `IndexOutOfRange` - `target` or a sequence entry is outside the region
    /// * `CapacityExceeded` - more than `S` entries, or already `C` channels
    pub fn add_channel(&mut self, target: u8, sequence: &[u8]) -> Result<(), AnimatorError> {
        if sequence.is_empty() {
            return Err(AnimatorError::EmptySequence);
        }

        let color_count = self.saved.len();
        if let Some(&index) = core::iter::once(&target)
            .chain(sequence)
            .find(|&&index| usize::from(index) >= color_count)
        {
            return Err(AnimatorError::IndexOutOfRange { index, color_count });
        }

        let mut entries: Vec<u8, S> = Vec::new();
        entries
            .extend_from_slice(sequence)
            .map_err(|_| AnimatorError::CapacityExceeded {
                requested: sequence.len(),
                capacity: S,
            })?;

        self.channels
            .push(TwinkleChannel {
                target,
                sequence: entries,
                current_index: 0,
            })
            .map_err(|_| AnimatorError::CapacityExceeded {
                requested: C + 1,
                capacity: C,
            })
    }

    /// Advances one frame and writes every channel's blended color.
    ///
    /// Does nothing while stopped.
    pub fn update<B: PaletteBuffer + ?Sized>(&mut self, display: &mut B) {
        if !self.active {
            return;
        }

        self.frame_counter = self.frame_counter.saturating_add(1);
        if self.frame_counter >= self.config.frame_divider {
            self.frame_counter = 0;
            self.progress = self.progress.saturating_add(1);

            if self.progress >= self.config.transition_frames {
                self.progress = 0;
                for channel in self.channels.iter_mut() {
                    channel.advance();
                }
                trace!("star cycle advanced");
            }
        }

        for channel in &self.channels {
            let (from, to) = channel.endpoints();
            let color = self.saved[from].lerp(
                self.saved[to],
                self.progress,
                self.config.transition_frames,
            );
            display.load_color(self.offset + usize::from(channel.target), color);
        }
    }

    /// Freezes the animation on the colors last written.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Continues from where [`stop`](Self::stop) left off.
    pub fn resume(&mut self) {
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Progress steps into the current transition.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn channels(&self) -> &[TwinkleChannel<S>] {
        &self.channels
    }

    /// Colors captured from the region at creation.
    pub fn saved_colors(&self) -> &[Rgb555] {
        &self.saved
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn config(&self) -> StarAnimationConfig {
        self.config
    }
}

impl TitleScreenStars {
    /// The title screen preset, reading bank [`STAR_BANK`] from `source`.
    ///
    /// Color 3 cycles 4,5,4,3,2; color 4 cycles 5,4,3,2,3,4; color 5 cycles
    /// 4,3,2,3,4.
    pub fn title_screen<B: PaletteBuffer + ?Sized>(source: &B) -> Result<Self, AnimatorError> {
        let mut stars = Self::new(
            bg_pltt_id(STAR_BANK),
            usize::from(COLOR_IDX_BRIGHT) + 1,
            source,
            StarAnimationConfig::default(),
        )?;

        stars.add_channel(
            COLOR_IDX_DIM,
            &[
                COLOR_IDX_MEDIUM,
                COLOR_IDX_BRIGHT,
                COLOR_IDX_MEDIUM,
                COLOR_IDX_DIM,
                COLOR_IDX_BACKGROUND,
            ],
        )?;
        stars.add_channel(
            COLOR_IDX_MEDIUM,
            &[
                COLOR_IDX_BRIGHT,
                COLOR_IDX_MEDIUM,
                COLOR_IDX_DIM,
                COLOR_IDX_BACKGROUND,
                COLOR_IDX_DIM,
                COLOR_IDX_MEDIUM,
            ],
        )?;
        stars.add_channel(
            COLOR_IDX_BRIGHT,
            &[
                COLOR_IDX_MEDIUM,
                COLOR_IDX_DIM,
                COLOR_IDX_BACKGROUND,
                COLOR_IDX_DIM,
                COLOR_IDX_MEDIUM,
            ],
        )?;

        Ok(stars)
    }
}

impl<const N: usize, const C: usize, const S: usize> PaletteEffect for StarAnimation<N, C, S> {
    fn update<B: PaletteBuffer + ?Sized>(&mut self, display: &mut B) {
        StarAnimation::update(self, display);
    }

    fn is_active(&self) -> bool {
        StarAnimation::is_active(self)
    }
}
