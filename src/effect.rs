//! Frame-driven palette effects.

use crate::animator::PaletteAnimator;
use crate::buffer::PaletteBuffer;

/// Trait for anything the engine updates once per vertical blank.
pub trait PaletteEffect {
    /// Advances one frame, publishing into `display`.
    fn update<B: PaletteBuffer + ?Sized>(&mut self, display: &mut B);

    /// Returns true if the next update will do work.
    fn is_active(&self) -> bool;
}

impl<const N: usize, const S: usize> PaletteEffect for PaletteAnimator<N, S> {
    fn update<B: PaletteBuffer + ?Sized>(&mut self, display: &mut B) {
        PaletteAnimator::update(self, display);
    }

    fn is_active(&self) -> bool {
        PaletteAnimator::is_active(self)
    }
}

/// Updates `effect` until it goes idle, at most `max_frames` times.
///
/// # Returns
/// * `Some(frames)` - Number of updates that did work before going idle
/// * `None` - Still active after `max_frames` updates
pub fn run_until_idle<E, B>(effect: &mut E, display: &mut B, max_frames: usize) -> Option<usize>
where
    E: PaletteEffect + ?Sized,
    B: PaletteBuffer + ?Sized,
{
    for frame in 0..max_frames {
        if !effect.is_active() {
            return Some(frame);
        }
        effect.update(display);
    }

    if effect.is_active() { None } else { Some(max_frames) }
}
