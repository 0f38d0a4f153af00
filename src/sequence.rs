use crate::types::AnimatorError;
use heapless::Vec;

/// An ordered list of palette indices animated one color at a time.
///
/// Indices are relative to the owning animator's region. The cursor only
/// moves forward after `delay` idle ticks have elapsed and the current color
/// has finished its transition; once it walks off the end the sequence is
/// exhausted.
///
/// # Type Parameters
/// * `S` - Maximum number of indices this sequence can hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSequence<const S: usize> {
    indexes: Vec<u8, S>,
    current_index: usize,
    delay: u8,
    current_delay: u8,
}

impl<const S: usize> ColorSequence<S> {
    /// Creates a rewound sequence from `indexes`.
    ///
    /// # Errors
    /// * `EmptySequence` - `indexes` is empty
    /// * `CapacityExceeded` - more than `S` indices
    pub fn new(indexes: &[u8], delay: u8) -> Result<Self, AnimatorError> {
        Self::builder().indexes(indexes)?.delay(delay).build()
    }

    /// Creates a new sequence builder.
    pub fn builder() -> SequenceBuilder<S> {
        SequenceBuilder::new()
    }

    /// The palette-relative indices, in traversal order.
    pub fn indexes(&self) -> &[u8] {
        &self.indexes
    }

    /// Returns the number of indices in this sequence.
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    /// Always false for a built sequence; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    /// Idle ticks inserted before each blend tick.
    pub fn delay(&self) -> u8 {
        self.delay
    }

    pub fn current_delay(&self) -> u8 {
        self.current_delay
    }

    /// Cursor into [`indexes`](Self::indexes).
    pub fn position(&self) -> usize {
        self.current_index
    }

    /// Index under the cursor, or `None` once exhausted.
    pub fn current(&self) -> Option<u8> {
        self.indexes.get(self.current_index).copied()
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.indexes.len()
    }

    /// Moves the cursor and delay counter back to the start.
    pub fn rewind(&mut self) {
        self.current_index = 0;
        self.current_delay = 0;
    }

    /// Counts one tick against the delay.
    ///
    /// Returns true when the delay has elapsed and this tick should blend;
    /// the counter is reset in that case.
    pub(crate) fn tick_delay(&mut self) -> bool {
        if self.current_delay < self.delay {
            self.current_delay += 1;
            return false;
        }

        self.current_delay = 0;
        true
    }

    /// Moves to the next index. Returns true when that exhausts the sequence.
    pub(crate) fn advance(&mut self) -> bool {
        self.current_index += 1;
        self.is_exhausted()
    }
}

/// Builder for constructing validated color sequences.
#[derive(Debug)]
pub struct SequenceBuilder<const S: usize> {
    indexes: Vec<u8, S>,
    delay: u8,
}

impl<const S: usize> SequenceBuilder<S> {
    /// Creates a new empty builder with no delay.
    pub fn new() -> Self {
        Self {
            indexes: Vec::new(),
            delay: 0,
        }
    }

    /// Appends one palette index.
    ///
    /// # Errors
    /// * `CapacityExceeded` - the builder already holds `S` indices
    pub fn index(mut self, index: u8) -> Result<Self, AnimatorError> {
        let requested = self.indexes.len() + 1;
        self.indexes
            .push(index)
            .map_err(|_| AnimatorError::CapacityExceeded {
                requested,
                capacity: S,
            })?;
        Ok(self)
    }

    /// Appends several palette indices.
    ///
    /// # Errors
    /// * `CapacityExceeded` - the indices do not fit in `S`
    pub fn indexes(mut self, indexes: &[u8]) -> Result<Self, AnimatorError> {
        let requested = self.indexes.len() + indexes.len();
        self.indexes
            .extend_from_slice(indexes)
            .map_err(|_| AnimatorError::CapacityExceeded {
                requested,
                capacity: S,
            })?;
        Ok(self)
    }

    /// Sets the number of idle ticks before each blend tick.
    ///
    /// Default is 0.
    pub fn delay(mut self, delay: u8) -> Self {
        self.delay = delay;
        self
    }

    /// Builds and validates the sequence.
    ///
    /// # Errors
    /// * `EmptySequence` - No indices were added
    pub fn build(self) -> Result<ColorSequence<S>, AnimatorError> {
        if self.indexes.is_empty() {
            return Err(AnimatorError::EmptySequence);
        }

        Ok(ColorSequence {
            indexes: self.indexes,
            current_index: 0,
            delay: self.delay,
            current_delay: 0,
        })
    }
}

impl<const S: usize> Default for SequenceBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
