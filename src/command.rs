//! Command-based control for animator slots.

use crate::sequence::ColorSequence;

/// Actions for controlling an [`AnimatorSlot`](crate::AnimatorSlot).
#[derive(Debug, Clone)]
pub enum AnimatorAction<const S: usize> {
    /// Install sequence.
    SetSequence(ColorSequence<S>),
    /// Drop sequence, back to simultaneous mode.
    ClearSequence,
    /// Grayscale preset.
    Grayscale,
    /// Fade-in preset.
    FadeIn,
    /// Sequential preset.
    Sequential,
    /// Destroy animator.
    Destroy,
}

/// Command targeting a specific animator slot.
#[derive(Debug, Clone)]
pub struct AnimatorCommand<Id, const S: usize> {
    pub slot_id: Id,
    pub action: AnimatorAction<S>,
}

impl<Id, const S: usize> AnimatorCommand<Id, S> {
    /// Creates command.
    pub fn new(slot_id: Id, action: AnimatorAction<S>) -> Self {
        Self { slot_id, action }
    }
}
