//! # Ring Buffer
//!
//! Fixed-capacity FIFO whose cursors are driven by a [`RingIndex`].

use crate::error::RingResult;
use crate::ring::index::RingIndex;

/// A fixed-capacity FIFO queue.
///
/// Storage is allocated once at construction. Push and pop are O(1) with
/// zero heap allocations. One slot is always left empty, so a ring built
/// with capacity `N` holds at most `N - 1` elements.
///
/// # Thread Safety
///
/// This buffer is NOT thread-safe. Use one per thread or wrap in a mutex.
///
/// # Example
///
/// ```rust
/// use bedrock_core::RingBuffer;
///
/// let mut ring: RingBuffer<u32> = RingBuffer::new(4).unwrap();
/// ring.push(1).unwrap();
/// ring.push(2).unwrap();
/// ring.push(3).unwrap();
/// assert_eq!(ring.push(4), Err(4));
///
/// assert_eq!(ring.pop(), Some(1));
/// assert_eq!(ring.len(), 2);
/// ```
#[derive(Debug)]
pub struct RingBuffer<T> {
    /// One slot per index; `None` outside `[tail, head)`.
    slots: Box<[Option<T>]>,
    index: RingIndex,
    /// Next slot to write.
    head: usize,
    /// Next slot to read.
    tail: usize,
}

impl<T> RingBuffer<T> {
    /// Creates an empty ring with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Same as [`RingIndex::new`].
    pub fn new(capacity: usize) -> RingResult<Self> {
        Ok(Self::with_index(RingIndex::new(capacity)?))
    }

    /// Creates an empty ring over an existing index space.
    #[must_use]
    pub fn with_index(index: RingIndex) -> Self {
        let slots: Vec<Option<T>> = (0..index.capacity()).map(|_| None).collect();
        Self {
            slots: slots.into_boxed_slice(),
            index,
            head: 0,
            tail: 0,
        }
    }

    /// The index space driving this buffer.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> RingIndex {
        self.index
    }

    /// Maximum number of elements held at once.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.index.usable()
    }

    /// Number of queued elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.index.count(self.head, self.tail)
    }

    /// Whether nothing is queued.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.index.is_empty(self.head, self.tail)
    }

    /// Whether the next push would be rejected.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.index.is_full(self.head, self.tail)
    }

    /// Appends `value` at the head.
    ///
    /// # Errors
    ///
    /// Hands `value` back when the ring is full.
    pub fn push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.slots[self.head] = Some(value);
        self.head = self.index.advance(self.head);
        Ok(())
    }

    /// Removes the oldest element.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.tail].take();
        self.tail = self.index.advance(self.tail);
        value
    }

    /// Removes the newest element.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.head = self.index.retreat(self.head);
        self.slots[self.head].take()
    }

    /// Borrows the oldest element.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.tail].as_ref()
    }

    /// Drops every queued element and rewinds both cursors.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut cursor = self.tail;
        (0..self.len()).filter_map(move |_| {
            let slot = self.slots[cursor].as_ref();
            cursor = self.index.advance(cursor);
            slot
        })
    }
}
