//! Optional animator handle for engine code.
//!
//! Engine callbacks often poll an animation that may not have been created
//! yet or was already torn down. [`AnimatorSlot`] holds at most one
//! [`PaletteAnimator`] and turns every operation on an empty slot into a
//! no-op (or `false`), so callers never branch on presence themselves.

use crate::animator::PaletteAnimator;
use crate::buffer::PaletteBuffer;
use crate::colors::Rgb555;
use crate::command::AnimatorAction;
use crate::effect::PaletteEffect;
use crate::types::{AnimatorError, AnimatorStatus};

/// Holds zero or one palette animator.
///
/// # Type Parameters
/// * `N` - Maximum number of colors in the region
/// * `S` - Maximum number of indices in a sequence
#[derive(Debug, Clone)]
pub struct AnimatorSlot<const N: usize, const S: usize> {
    animator: Option<PaletteAnimator<N, S>>,
}

impl<const N: usize, const S: usize> AnimatorSlot<N, S> {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self { animator: None }
    }

    /// Builds an animator into the slot.
    ///
    /// Any animator already held is replaced only if construction succeeds.
    ///
    /// # Errors
    /// Same as [`PaletteAnimator::new`].
    pub fn create<B: PaletteBuffer + ?Sized>(
        &mut self,
        target: &[Rgb555],
        offset: usize,
        size: usize,
        total_steps: u8,
        source: &B,
    ) -> Result<(), AnimatorError> {
        let animator = PaletteAnimator::new(target, offset, size, total_steps, source)?;
        self.animator = Some(animator);
        Ok(())
    }

    /// Drops the held animator, if any.
    pub fn destroy(&mut self) {
        if self.animator.take().is_some() {
            trace!("animator slot destroyed");
        }
    }

    /// Handles an action by dispatching to the matching method.
    ///
    /// # Returns
    /// * `Ok(())` - Action applied, or the slot is empty
    /// * `Err` - The sequential preset did not fit the sequence capacity
    pub fn handle_action<B: PaletteBuffer + ?Sized>(
        &mut self,
        action: AnimatorAction<S>,
        display: &mut B,
    ) -> Result<(), AnimatorError> {
        match action {
            AnimatorAction::SetSequence(sequence) => {
                if let Some(animator) = self.animator.as_mut() {
                    animator.load_sequence(sequence);
                }
            }
            AnimatorAction::ClearSequence => {
                if let Some(animator) = self.animator.as_mut() {
                    animator.clear_sequence();
                }
            }
            AnimatorAction::Grayscale => self.start_grayscale(display),
            AnimatorAction::FadeIn => self.start_fade_in(display),
            AnimatorAction::Sequential => self.start_sequential()?,
            AnimatorAction::Destroy => self.destroy(),
        }
        Ok(())
    }

    /// See [`PaletteAnimator::set_sequence`]. `Ok(())` on an empty slot.
    pub fn set_sequence(&mut self, indexes: &[u8], delay: u8) -> Result<(), AnimatorError> {
        match self.animator.as_mut() {
            Some(animator) => animator.set_sequence(indexes, delay),
            None => Ok(()),
        }
    }

    pub fn start_grayscale<B: PaletteBuffer + ?Sized>(&mut self, display: &mut B) {
        if let Some(animator) = self.animator.as_mut() {
            animator.start_grayscale(display);
        }
    }

    pub fn start_fade_in<B: PaletteBuffer + ?Sized>(&mut self, display: &mut B) {
        if let Some(animator) = self.animator.as_mut() {
            animator.start_fade_in(display);
        }
    }

    /// See [`PaletteAnimator::start_sequential`]. `Ok(())` on an empty slot.
    pub fn start_sequential(&mut self) -> Result<(), AnimatorError> {
        match self.animator.as_mut() {
            Some(animator) => animator.start_sequential(),
            None => Ok(()),
        }
    }

    /// Updates the held animator; does nothing on an empty slot.
    pub fn update<B: PaletteBuffer + ?Sized>(&mut self, display: &mut B) {
        if let Some(animator) = self.animator.as_mut() {
            animator.update(display);
        }
    }

    /// Returns false on an empty slot.
    pub fn is_active(&self) -> bool {
        self.animator.as_ref().is_some_and(PaletteAnimator::is_active)
    }

    pub fn is_created(&self) -> bool {
        self.animator.is_some()
    }

    /// Tri-state liveness of the slot.
    pub fn status(&self) -> AnimatorStatus {
        match &self.animator {
            None => AnimatorStatus::NotCreated,
            Some(animator) if animator.is_active() => AnimatorStatus::Active,
            Some(_) => AnimatorStatus::Finished,
        }
    }

    pub fn get(&self) -> Option<&PaletteAnimator<N, S>> {
        self.animator.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut PaletteAnimator<N, S>> {
        self.animator.as_mut()
    }
}

impl<const N: usize, const S: usize> Default for AnimatorSlot<N, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const S: usize> From<PaletteAnimator<N, S>> for AnimatorSlot<N, S> {
    fn from(animator: PaletteAnimator<N, S>) -> Self {
        Self {
            animator: Some(animator),
        }
    }
}

impl<const N: usize, const S: usize> PaletteEffect for AnimatorSlot<N, S> {
    fn update<B: PaletteBuffer + ?Sized>(&mut self, display: &mut B) {
        AnimatorSlot::update(self, display);
    }

    fn is_active(&self) -> bool {
        AnimatorSlot::is_active(self)
    }
}
