//! Core types shared by the animators.

/// How a [`PaletteAnimator`](crate::PaletteAnimator) walks its colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationMode {
    /// Every color except index 0 blends together each tick.
    Simultaneous,

    /// One color at a time, in the order of the loaded sequence.
    Sequence,
}

/// Liveness of an animator handle that may not exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimatorStatus {
    /// No animator has been created, or it was destroyed.
    NotCreated,

    /// The next update will do work.
    Active,

    /// The current transition has run to completion.
    Finished,
}

/// Errors from building animators and sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimatorError {
    /// More entries requested than the fixed storage can hold.
    CapacityExceeded { requested: usize, capacity: usize },

    /// Fewer target colors supplied than the region size.
    TargetTooShort { required: usize, provided: usize },

    /// The region does not fit inside the display palette.
    RegionOutOfBounds {
        offset: usize,
        size: usize,
        palette_len: usize,
    },

    /// No indices provided.
    EmptySequence,

    /// A color index falls outside the managed region.
    IndexOutOfRange { index: u8, color_count: usize },
}

impl core::fmt::Display for AnimatorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AnimatorError::CapacityExceeded { requested, capacity } => {
                write!(
                    f,
                    "capacity exceeded: requested {} entries, capacity is {}",
                    requested, capacity
                )
            }
            AnimatorError::TargetTooShort { required, provided } => {
                write!(
                    f,
                    "target palette too short: need {} colors, got {}",
                    required, provided
                )
            }
            AnimatorError::RegionOutOfBounds {
                offset,
                size,
                palette_len,
            } => {
                write!(
                    f,
                    "palette region {}..{} exceeds palette of {} colors",
                    offset,
                    offset + size,
                    palette_len
                )
            }
            AnimatorError::EmptySequence => {
                write!(f, "sequence must have at least one index")
            }
            AnimatorError::IndexOutOfRange { index, color_count } => {
                write!(
                    f,
                    "color index {} out of range for {} colors",
                    index, color_count
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnimatorError {}
