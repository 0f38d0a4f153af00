#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Rgb555`**: A packed 15-bit palette color with channel-wise `lerp` and `to_grayscale`
//! - **`PaletteBuffer`**: Trait to implement for the palette your engine displays
//! - **`PaletteAnimator`**: Blends one palette region toward target colors, one frame per `update`
//! - **`ColorSequence`**: Palette indices animated one at a time, with a per-step delay
//! - **`AnimatorSlot`**: Zero-or-one animator, with no-op calls while empty and a tri-state `status`
//! - **`StarAnimation`**: Endless cyclic color blending for twinkling backgrounds
//! - **`PaletteEffect`**: Common per-frame interface of the animators
//! - **`AnimatorAction`**: Commands that can be sent to control a slot
//!
//! Colors never leave the 5-bit-per-channel domain: interpolation is integer
//! arithmetic with truncating division, matching what palette RAM can hold.

#[macro_use]
mod fmt;

pub mod colors;
pub mod buffer;
pub mod types;
pub mod sequence;
pub mod animator;
pub mod effect;
pub mod slot;
pub mod command;
pub mod stars;

pub use colors::Rgb555;
pub use buffer::{DualPalette, PaletteBuffer, PLTT_SIZE, bg_pltt_id, obj_pltt_id};
pub use types::{AnimationMode, AnimatorError, AnimatorStatus};
pub use sequence::{ColorSequence, SequenceBuilder};
pub use animator::{PaletteAnimator, TRANSPARENT_INDEX};
pub use effect::{PaletteEffect, run_until_idle};
pub use slot::AnimatorSlot;
pub use command::{AnimatorAction, AnimatorCommand};
pub use stars::{StarAnimation, StarAnimationConfig, TitleScreenStars, TwinkleChannel};

/// Animator sized for one 4bpp palette bank.
pub type BankAnimator = PaletteAnimator<16, 16>;
