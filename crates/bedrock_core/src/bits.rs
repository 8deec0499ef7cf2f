//! # Bit Manipulation
//!
//! Pure helpers for flag words, power-of-two math and address alignment.
//!
//! Every function takes and returns plain integers so the results can be
//! used in `const` contexts. Bit positions are zero-indexed from the least
//! significant bit and must be below 32 unless stated otherwise.
//!
//! ```rust
//! use bedrock_core::bits;
//!
//! let flags = bits::bit_set(0, 3);
//! assert!(bits::bit_check(flags, 3));
//! assert_eq!(bits::align_up(0x1003, 4), 0x1004);
//! ```

/// Returns `x` with bit `n` set.
#[inline]
#[must_use]
pub const fn bit_set(x: u32, n: u32) -> u32 {
    x | (1 << n)
}

/// Returns `x` with bit `n` cleared.
#[inline]
#[must_use]
pub const fn bit_clear(x: u32, n: u32) -> u32 {
    x & !(1 << n)
}

/// Returns `x` with bit `n` flipped.
#[inline]
#[must_use]
pub const fn bit_toggle(x: u32, n: u32) -> u32 {
    x ^ (1 << n)
}

/// Whether bit `n` of `x` is set.
#[inline]
#[must_use]
pub const fn bit_check(x: u32, n: u32) -> bool {
    x & (1 << n) != 0
}

/// Reads bit `n` of `x` as `0` or `1`.
#[inline]
#[must_use]
pub const fn bit_read(x: u32, n: u32) -> u32 {
    (x >> n) & 1
}

/// Returns `x` with bit `n` forced to `value`.
#[inline]
#[must_use]
pub const fn bit_write(x: u32, n: u32, value: bool) -> u32 {
    if value {
        bit_set(x, n)
    } else {
        bit_clear(x, n)
    }
}

/// Mask with the lowest `n` bits set.
///
/// `n >= 32` yields `u32::MAX` instead of overflowing the shift.
#[inline]
#[must_use]
pub const fn bit_mask(n: u32) -> u32 {
    if n >= u32::BITS {
        u32::MAX
    } else {
        (1 << n) - 1
    }
}

/// Extracts the `n`-bit field starting at bit `pos`.
#[inline]
#[must_use]
pub const fn bit_extract(x: u32, pos: u32, n: u32) -> u32 {
    (x >> pos) & bit_mask(n)
}

/// Returns `x` with the `n`-bit field at `pos` replaced by the low bits of `value`.
#[inline]
#[must_use]
pub const fn bit_set_range(x: u32, pos: u32, n: u32, value: u32) -> u32 {
    let mask = bit_mask(n) << pos;
    (x & !mask) | ((value & bit_mask(n)) << pos)
}

/// Number of set bits.
#[inline]
#[must_use]
pub const fn popcount(x: u32) -> u32 {
    x.count_ones()
}

/// Whether `x` is a non-zero power of two.
#[inline]
#[must_use]
pub const fn is_power_of_two(x: usize) -> bool {
    x != 0 && x & (x - 1) == 0
}

/// Smallest power of two `>= x`, or `None` if it does not fit in a `u32`.
///
/// `next_power_of_two(0)` is `Some(1)`.
#[inline]
#[must_use]
pub const fn next_power_of_two(x: u32) -> Option<u32> {
    x.checked_next_power_of_two()
}

/// Reverses the bit order of `x`.
#[inline]
#[must_use]
pub const fn reverse_bits(x: u32) -> u32 {
    x.reverse_bits()
}

/// Position of the least significant set bit, or `None` for zero.
#[inline]
#[must_use]
pub const fn find_first_set(x: u32) -> Option<u32> {
    if x == 0 {
        None
    } else {
        Some(x.trailing_zeros())
    }
}

/// Rounds `x` up to the next multiple of `align`.
///
/// `align` must be a power of two. Wraps on overflow; use
/// [`checked_align_up`] when `x` is caller-controlled.
#[inline]
#[must_use]
pub const fn align_up(x: usize, align: usize) -> usize {
    x.wrapping_add(align - 1) & !(align - 1)
}

/// Rounds `x` up to the next multiple of `align`, or `None` on overflow.
///
/// `align` must be a power of two.
#[inline]
#[must_use]
pub const fn checked_align_up(x: usize, align: usize) -> Option<usize> {
    match x.checked_add(align - 1) {
        Some(sum) => Some(sum & !(align - 1)),
        None => None,
    }
}

/// Rounds `x` down to a multiple of `align` (a power of two).
#[inline]
#[must_use]
pub const fn align_down(x: usize, align: usize) -> usize {
    x & !(align - 1)
}

/// Whether `x` is a multiple of `align` (a power of two).
#[inline]
#[must_use]
pub const fn is_aligned(x: usize, align: usize) -> bool {
    x & (align - 1) == 0
}

/// `n` kibibytes in bytes.
#[inline]
#[must_use]
pub const fn kib(n: usize) -> usize {
    n * 1024
}

/// `n` mebibytes in bytes.
#[inline]
#[must_use]
pub const fn mib(n: usize) -> usize {
    n * 1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bit_ops() {
        let flags = bit_set(0, 3);
        assert_eq!(flags, 0b1000);
        assert!(bit_check(flags, 3));
        assert_eq!(bit_read(flags, 3), 1);
        assert_eq!(bit_toggle(flags, 3), 0);
        assert_eq!(bit_clear(0xFF, 0), 0xFE);
        assert_eq!(bit_write(0, 31, true), 0x8000_0000);
        assert_eq!(bit_write(u32::MAX, 31, false), 0x7FFF_FFFF);
    }

    #[test]
    fn test_masks_and_fields() {
        assert_eq!(bit_mask(0), 0);
        assert_eq!(bit_mask(4), 0xF);
        assert_eq!(bit_mask(32), u32::MAX);
        assert_eq!(bit_extract(0xABCD, 4, 8), 0xBC);
        assert_eq!(bit_set_range(0xFFFF, 4, 8, 0x12), 0xF12F);
        // Value bits beyond the field width are dropped.
        assert_eq!(bit_set_range(0, 0, 4, 0xFF), 0xF);
    }

    #[test]
    fn test_power_of_two() {
        assert!(!is_power_of_two(0));
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(64));
        assert!(!is_power_of_two(96));
        assert_eq!(next_power_of_two(0), Some(1));
        assert_eq!(next_power_of_two(5), Some(8));
        assert_eq!(next_power_of_two(8), Some(8));
        assert_eq!(next_power_of_two(0x8000_0001), None);
    }

    #[test]
    fn test_scan_ops() {
        assert_eq!(popcount(0b1011), 3);
        assert_eq!(reverse_bits(1), 0x8000_0000);
        assert_eq!(find_first_set(0), None);
        assert_eq!(find_first_set(0b1000), Some(3));
    }

    #[test]
    fn test_alignment() {
        assert_eq!(align_up(0x1003, 4), 0x1004);
        assert_eq!(align_up(8, 4), 8);
        assert_eq!(align_up(0, 4), 0);
        assert_eq!(align_down(0x1003, 4), 0x1000);
        assert!(is_aligned(0x1000, 16));
        assert!(!is_aligned(0x1001, 2));
        assert_eq!(checked_align_up(usize::MAX, 4), None);
        assert_eq!(checked_align_up(5, 4), Some(8));
    }

    #[test]
    fn test_sizes() {
        assert_eq!(kib(4), 4096);
        assert_eq!(mib(1), 1_048_576);
    }
}
