//! # Memory Primitives
//!
//! Byte-level copy, fill, move and compare over slices.
//!
//! These stand in for the hand-written `memcpy` family of a freestanding
//! target. Lengths come from the slices themselves, so none of them can
//! read or write past a buffer.

use std::cmp::Ordering;

use crate::error::{ArenaError, ArenaResult};

/// Copies as many bytes as both slices can hold.
///
/// Returns the number of bytes copied: `min(dest.len(), src.len())`.
#[inline]
pub fn mem_copy(dest: &mut [u8], src: &[u8]) -> usize {
    let n = dest.len().min(src.len());
    dest[..n].copy_from_slice(&src[..n]);
    n
}

/// Sets every byte of `dest` to `value`.
#[inline]
pub fn mem_set(dest: &mut [u8], value: u8) {
    dest.fill(value);
}

/// Copies `len` bytes from offset `src` to offset `dest` within `buf`.
///
/// The spans may overlap; the result is as if the source were copied to a
/// temporary first.
///
/// # Errors
///
/// Returns [`ArenaError::OutOfBounds`] if either span leaves `buf`.
pub fn mem_move(buf: &mut [u8], src: usize, dest: usize, len: usize) -> ArenaResult<()> {
    let capacity = buf.len();
    for offset in [src, dest] {
        match offset.checked_add(len) {
            Some(end) if end <= capacity => {}
            _ => {
                return Err(ArenaError::OutOfBounds {
                    offset,
                    len,
                    capacity,
                })
            }
        }
    }
    buf.copy_within(src..src + len, dest);
    Ok(())
}

/// Lexicographic byte comparison. A strict prefix orders first.
#[inline]
#[must_use]
pub fn mem_compare(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}
