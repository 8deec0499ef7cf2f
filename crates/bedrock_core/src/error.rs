//! # Core Error Types
//!
//! All errors that can occur in arenas, rings and configuration loading.

use thiserror::Error;

/// Errors that can occur during arena operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// Remaining capacity cannot hold the aligned request.
    #[error("arena out of memory: requested {requested} bytes ({aligned} aligned), {remaining} remaining")]
    OutOfMemory {
        /// Size passed to `allocate`.
        requested: usize,
        /// Size after rounding up to the arena alignment.
        aligned: usize,
        /// Free bytes left in the arena.
        remaining: usize,
    },

    /// Alignment is zero or not a power of two.
    #[error("invalid alignment {0}: must be a non-zero power of two")]
    InvalidAlignment(usize),

    /// Capacity is not a whole number of alignment units.
    #[error("capacity {capacity} is not a multiple of alignment {alignment}")]
    CapacityNotAligned {
        /// Requested arena size.
        capacity: usize,
        /// Configured alignment.
        alignment: usize,
    },

    /// Range reaches past the bytes handed out so far.
    #[error("unallocated: {len} bytes at offset {offset} run past the allocated region of {used} bytes")]
    Unallocated {
        /// Start of the range.
        offset: usize,
        /// Length of the range.
        len: usize,
        /// Bytes allocated in the current generation.
        used: usize,
    },

    /// Range was issued before the most recent reset.
    #[error("stale range: issued in generation {range_generation}, arena is at generation {arena_generation}")]
    StaleRange {
        /// Generation stamped into the range.
        range_generation: u64,
        /// Current arena generation.
        arena_generation: u64,
    },

    /// Byte span does not lie inside the buffer.
    #[error("out of bounds: {len} bytes at offset {offset} exceed capacity {capacity}")]
    OutOfBounds {
        /// Start of the span.
        offset: usize,
        /// Length of the span.
        len: usize,
        /// Size of the buffer.
        capacity: usize,
    },
}

/// Errors that can occur when building a ring index space.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// Mask-based wraparound needs a power-of-two slot count.
    #[error("ring capacity {0} is not a power of two")]
    CapacityNotPowerOfTwo(usize),

    /// A single slot would be both full and empty.
    #[error("ring capacity {0} is too small: need at least 2 slots")]
    CapacityTooSmall(usize),
}

/// Errors that can occur while loading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(String),

    /// The TOML document is malformed.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// The values parsed but violate a constraint.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for arena operations.
pub type ArenaResult<T> = Result<T, ArenaError>;

/// Result type for ring construction.
pub type RingResult<T> = Result<T, RingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_memory_message() {
        let err = ArenaError::OutOfMemory {
            requested: 9,
            aligned: 12,
            remaining: 8,
        };
        assert_eq!(
            err.to_string(),
            "arena out of memory: requested 9 bytes (12 aligned), 8 remaining"
        );
    }

    #[test]
    fn test_ring_error_message() {
        assert_eq!(
            RingError::CapacityNotPowerOfTwo(6).to_string(),
            "ring capacity 6 is not a power of two"
        );
    }
}
