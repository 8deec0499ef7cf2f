//! # Ring Index Space
//!
//! Wraparound arithmetic for a power-of-two ring addressed by two cursors.
//!
//! `head` is the next slot to write and `tail` the next slot to read. The
//! ring is empty when they are equal and full when advancing `head` would
//! land on `tail`, so one slot always stays unused. That keeps full and
//! empty distinguishable without a third counter.

use crate::bits;
use crate::config::RingConfig;
use crate::error::{RingError, RingResult};

/// Cursor arithmetic for a ring of `capacity` slots.
///
/// Owns no storage. All methods are O(1), branch-free mask operations and
/// expect cursors in `[0, capacity)`.
///
/// ```rust
/// use bedrock_core::RingIndex;
///
/// let ring = RingIndex::new(8).unwrap();
/// assert!(ring.is_empty(0, 0));
/// assert!(ring.is_full(7, 0));
/// assert_eq!(ring.count(7, 0), 7);
/// assert_eq!(ring.retreat(0), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RingIndex {
    /// `capacity - 1`.
    mask: usize,
}

impl RingIndex {
    /// Creates the index space for `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::CapacityTooSmall`] below 2 slots and
    /// [`RingError::CapacityNotPowerOfTwo`] for any other non-power-of-two.
    pub const fn new(capacity: usize) -> RingResult<Self> {
        if capacity < 2 {
            return Err(RingError::CapacityTooSmall(capacity));
        }
        if !bits::is_power_of_two(capacity) {
            return Err(RingError::CapacityNotPowerOfTwo(capacity));
        }
        Ok(Self { mask: capacity - 1 })
    }

    /// Creates the index space sized by a config section.
    ///
    /// # Errors
    ///
    /// Same as [`RingIndex::new`].
    pub const fn from_config(config: &RingConfig) -> RingResult<Self> {
        Self::new(config.capacity)
    }

    /// Total slot count.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.mask + 1
    }

    /// Slots that can hold data at once (`capacity - 1`).
    #[inline]
    #[must_use]
    pub const fn usable(&self) -> usize {
        self.mask
    }

    /// `(index + 1) mod capacity`.
    #[inline]
    #[must_use]
    pub const fn advance(&self, index: usize) -> usize {
        index.wrapping_add(1) & self.mask
    }

    /// `(index - 1) mod capacity`.
    #[inline]
    #[must_use]
    pub const fn retreat(&self, index: usize) -> usize {
        index.wrapping_sub(1) & self.mask
    }

    /// Whether writing one more element would collide with `tail`.
    #[inline]
    #[must_use]
    pub const fn is_full(&self, head: usize, tail: usize) -> bool {
        self.advance(head) == tail
    }

    /// Whether there is nothing to read.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self, head: usize, tail: usize) -> bool {
        head == tail
    }

    /// Occupied slots: `(head - tail) mod capacity`.
    #[inline]
    #[must_use]
    pub const fn count(&self, head: usize, tail: usize) -> usize {
        head.wrapping_sub(tail) & self.mask
    }

    /// Slots still writable before the ring is full.
    #[inline]
    #[must_use]
    pub const fn free(&self, head: usize, tail: usize) -> usize {
        self.mask - self.count(head, tail)
    }
}
