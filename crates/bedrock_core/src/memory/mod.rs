//! # Memory Management
//!
//! Pre-reserved arenas and manual byte primitives.
//!
//! ## Design Philosophy
//!
//! All memory is reserved once when an arena is built. After that:
//! - No heap allocations
//! - No per-allocation metadata
//! - Predictable, flat latency

mod arena;
mod primitives;
mod shared;

pub use arena::{Arena, ArenaRange};
pub use primitives::{mem_compare, mem_copy, mem_move, mem_set};
pub use shared::SharedArena;
