//! # Shared Arena
//!
//! An [`Arena`] behind a lock, for callers that allocate from several threads.

use parking_lot::Mutex;

use crate::error::ArenaResult;
use crate::memory::arena::{Arena, ArenaRange};

/// A mutex-guarded arena usable through `&self`.
///
/// Each call takes the lock for its own duration only, so an `allocate`
/// followed by a `write` is two critical sections. A `reset` from another
/// thread in between makes the range stale and the `write` fails with
/// [`ArenaError::StaleRange`](crate::ArenaError::StaleRange).
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use bedrock_core::{Arena, SharedArena};
///
/// let arena = Arc::new(SharedArena::new(Arena::new(1024).unwrap()));
/// let range = arena.allocate(16).unwrap();
/// arena.write(&range, b"frame data").unwrap();
/// ```
#[derive(Debug)]
pub struct SharedArena {
    inner: Mutex<Arena>,
}

impl SharedArena {
    /// Wraps an existing arena.
    #[must_use]
    pub fn new(arena: Arena) -> Self {
        Self {
            inner: Mutex::new(arena),
        }
    }

    /// Locked [`Arena::allocate`].
    ///
    /// # Errors
    ///
    /// Same as [`Arena::allocate`].
    pub fn allocate(&self, size: usize) -> ArenaResult<ArenaRange> {
        self.inner.lock().allocate(size)
    }

    /// Locked [`Arena::reset`].
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Locked [`Arena::write`].
    ///
    /// # Errors
    ///
    /// Same as [`Arena::write`].
    pub fn write(&self, range: &ArenaRange, src: &[u8]) -> ArenaResult<usize> {
        self.inner.lock().write(range, src)
    }

    /// Copies the bytes of a live range out of the arena.
    ///
    /// # Errors
    ///
    /// Same as [`Arena::bytes`].
    pub fn read(&self, range: &ArenaRange) -> ArenaResult<Vec<u8>> {
        self.inner.lock().bytes(range).map(<[u8]>::to_vec)
    }

    /// Bytes currently in use.
    #[must_use]
    pub fn used(&self) -> usize {
        self.inner.lock().used()
    }

    /// Runs `f` with exclusive access to the arena.
    pub fn with<R>(&self, f: impl FnOnce(&mut Arena) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Unwraps the arena.
    #[must_use]
    pub fn into_inner(self) -> Arena {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_concurrent_allocations_do_not_overlap() {
        let arena = Arc::new(SharedArena::new(Arena::new(4096).unwrap()));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let arena = Arc::clone(&arena);
                thread::spawn(move || {
                    (0..16)
                        .map(|_| arena.allocate(16).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut offsets: Vec<usize> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .map(|r| r.offset())
            .collect();
        offsets.sort_unstable();
        offsets.dedup();

        assert_eq!(offsets.len(), 64);
        assert_eq!(arena.used(), 64 * 16);
    }

    #[test]
    fn test_reset_invalidates_ranges() {
        let arena = SharedArena::new(Arena::new(64).unwrap());
        let range = arena.allocate(4).unwrap();
        arena.write(&range, b"abcd").unwrap();
        assert_eq!(arena.read(&range).unwrap(), b"abcd");

        arena.reset();
        assert!(arena.read(&range).is_err());
        assert_eq!(arena.with(|a| a.generation()), 1);
        assert_eq!(arena.into_inner().used(), 0);
    }
}
