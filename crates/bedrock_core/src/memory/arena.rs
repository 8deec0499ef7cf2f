//! # Arena Allocator
//!
//! A bump allocator over a fixed byte region that is freed all at once.

use std::cmp::Ordering;
use std::fmt;

use crate::bits;
use crate::config::ArenaConfig;
use crate::error::{ArenaError, ArenaResult};
use crate::memory::primitives::{mem_compare, mem_copy, mem_set};

/// A byte span handed out by [`Arena::allocate`].
///
/// The range is an `(offset, len)` pair into the arena buffer, stamped with
/// the arena generation it was issued in. It stays valid until the next
/// [`Arena::reset`]; afterwards every accessor rejects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArenaRange {
    offset: usize,
    len: usize,
    generation: u64,
}

impl ArenaRange {
    /// Byte offset of the first byte.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Requested length in bytes (before alignment padding).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the range covers zero bytes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset one past the last byte.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Arena generation this range was issued in.
    #[inline]
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// A bump-pointer arena allocator.
///
/// Allocations are O(1): the request is rounded up to the arena alignment
/// and the cursor advances by that amount. There is no per-allocation
/// bookkeeping and no individual free; [`Arena::reset`] releases everything.
///
/// # Thread Safety
///
/// Mutation goes through `&mut self`. Wrap the arena in a lock, or use
/// [`SharedArena`](crate::memory::SharedArena), to share it.
///
/// # Example
///
/// ```rust
/// use bedrock_core::Arena;
///
/// let mut arena = Arena::with_alignment(16, 4).unwrap();
/// let range = arena.allocate(5).unwrap();
/// assert_eq!((range.offset(), range.len()), (0, 5));
/// assert_eq!(arena.used(), 8);
///
/// assert!(arena.allocate(9).is_err());
/// assert_eq!(arena.used(), 8);
///
/// arena.reset();
/// assert_eq!(arena.used(), 0);
/// ```
pub struct Arena {
    /// The backing storage. Zeroed at creation and on every reset.
    storage: Box<[u8]>,
    /// Next free byte. Always `<= storage.len()`.
    cursor: usize,
    /// Power of two that allocation sizes are rounded up to.
    alignment: usize,
    /// Bumped on every reset to invalidate outstanding ranges.
    generation: u64,
}

impl Arena {
    /// Alignment used by [`Arena::new`].
    pub const DEFAULT_ALIGNMENT: usize = ArenaConfig::DEFAULT_ALIGNMENT;

    /// Creates a new arena with the specified capacity in bytes and the
    /// default 4-byte alignment.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Total size in bytes, a multiple of 4
    ///
    /// # Errors
    ///
    /// Same as [`Arena::with_alignment`].
    pub fn new(capacity: usize) -> ArenaResult<Self> {
        Self::with_alignment(capacity, Self::DEFAULT_ALIGNMENT)
    }

    /// Creates a new arena with an explicit alignment.
    ///
    /// The capacity must be a whole number of alignment units, so that any
    /// request of at most `capacity` bytes fits in a freshly reset arena.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidAlignment`] unless `alignment` is a
    /// non-zero power of two, and [`ArenaError::CapacityNotAligned`] when
    /// `capacity` is not a multiple of it.
    pub fn with_alignment(capacity: usize, alignment: usize) -> ArenaResult<Self> {
        if !bits::is_power_of_two(alignment) {
            tracing::warn!(alignment, "rejected arena alignment");
            return Err(ArenaError::InvalidAlignment(alignment));
        }
        if !bits::is_aligned(capacity, alignment) {
            tracing::warn!(capacity, alignment, "rejected arena capacity");
            return Err(ArenaError::CapacityNotAligned {
                capacity,
                alignment,
            });
        }
        Ok(Self::build(capacity, alignment))
    }

    /// Creates an arena sized by a config section.
    ///
    /// # Errors
    ///
    /// Same as [`Arena::with_alignment`].
    pub fn from_config(config: &ArenaConfig) -> ArenaResult<Self> {
        Self::with_alignment(config.capacity, config.alignment)
    }

    fn build(capacity: usize, alignment: usize) -> Self {
        tracing::debug!(capacity, alignment, "arena created");
        Self {
            storage: vec![0u8; capacity].into_boxed_slice(),
            cursor: 0,
            alignment,
            generation: 0,
        }
    }

    /// Returns the total capacity in bytes.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the configured alignment.
    #[inline]
    #[must_use]
    pub const fn alignment(&self) -> usize {
        self.alignment
    }

    /// Returns the current used space in bytes, padding included.
    #[inline]
    #[must_use]
    pub const fn used(&self) -> usize {
        self.cursor
    }

    /// Returns the remaining free space in bytes.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.cursor
    }

    /// Returns how many times the arena has been reset.
    #[inline]
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `allocate(size)` would succeed right now.
    #[must_use]
    pub fn can_allocate(&self, size: usize) -> bool {
        self.aligned_end(size).is_some()
    }

    /// Cursor position after placing `size` bytes, if it fits.
    fn aligned_end(&self, size: usize) -> Option<usize> {
        let aligned = bits::checked_align_up(size, self.alignment)?;
        let end = self.cursor.checked_add(aligned)?;
        (end <= self.capacity()).then_some(end)
    }

    /// Bump-allocates `size` bytes.
    ///
    /// The cursor advances by `size` rounded up to the alignment; the
    /// returned range covers exactly `size` bytes starting at the old cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::OutOfMemory`] when the aligned size does not fit
    /// in the remaining space. The cursor is left unchanged.
    pub fn allocate(&mut self, size: usize) -> ArenaResult<ArenaRange> {
        let Some(end) = self.aligned_end(size) else {
            let aligned = bits::checked_align_up(size, self.alignment).unwrap_or(usize::MAX);
            tracing::warn!(
                requested = size,
                aligned,
                remaining = self.remaining(),
                "arena out of memory"
            );
            return Err(ArenaError::OutOfMemory {
                requested: size,
                aligned,
                remaining: self.remaining(),
            });
        };

        let range = ArenaRange {
            offset: self.cursor,
            len: size,
            generation: self.generation,
        };
        self.cursor = end;
        tracing::trace!(offset = range.offset, len = size, cursor = end, "arena allocate");
        Ok(range)
    }

    /// Resets the arena, invalidating all previous allocations.
    ///
    /// The cursor returns to zero and every byte is cleared. Ranges issued
    /// before the reset are rejected by all accessors from now on.
    pub fn reset(&mut self) {
        mem_set(&mut self.storage, 0);
        self.cursor = 0;
        self.generation = self.generation.wrapping_add(1);
        tracing::debug!(generation = self.generation, "arena reset");
    }

    /// Borrows the bytes of a live range.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::StaleRange`] for ranges issued before the last
    /// reset and [`ArenaError::Unallocated`] for ranges reaching past the
    /// bytes handed out in this generation (e.g. from another arena).
    pub fn bytes(&self, range: &ArenaRange) -> ArenaResult<&[u8]> {
        self.check(range)?;
        Ok(&self.storage[range.offset..range.end()])
    }

    /// Mutably borrows the bytes of a live range.
    ///
    /// # Errors
    ///
    /// Same as [`Arena::bytes`].
    pub fn bytes_mut(&mut self, range: &ArenaRange) -> ArenaResult<&mut [u8]> {
        self.check(range)?;
        Ok(&mut self.storage[range.offset..range.end()])
    }

    /// Copies `src` into a live range, truncating to the shorter of the two.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Same as [`Arena::bytes`].
    pub fn write(&mut self, range: &ArenaRange, src: &[u8]) -> ArenaResult<usize> {
        Ok(mem_copy(self.bytes_mut(range)?, src))
    }

    /// Sets every byte of a live range to `value`.
    ///
    /// # Errors
    ///
    /// Same as [`Arena::bytes`].
    pub fn fill(&mut self, range: &ArenaRange, value: u8) -> ArenaResult<()> {
        mem_set(self.bytes_mut(range)?, value);
        Ok(())
    }

    /// Compares the contents of two live ranges byte by byte.
    ///
    /// # Errors
    ///
    /// Same as [`Arena::bytes`], for either range.
    pub fn compare(&self, a: &ArenaRange, b: &ArenaRange) -> ArenaResult<Ordering> {
        Ok(mem_compare(self.bytes(a)?, self.bytes(b)?))
    }

    fn check(&self, range: &ArenaRange) -> ArenaResult<()> {
        if range.generation != self.generation {
            return Err(ArenaError::StaleRange {
                range_generation: range.generation,
                arena_generation: self.generation,
            });
        }
        if range.end() > self.cursor {
            return Err(ArenaError::Unallocated {
                offset: range.offset,
                len: range.len,
                used: self.cursor,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity())
            .field("alignment", &self.alignment)
            .field("used", &self.cursor)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
