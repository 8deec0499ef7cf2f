//! # BEDROCK Core
//!
//! Deterministic memory building blocks for targets without a general
//! purpose heap:
//! - Bump arenas with aligned ranges and bulk reset
//! - Power-of-two ring cursors with one-slot-free full detection
//! - Bit and alignment helpers usable in `const` contexts
//!
//! ## Architecture Rules
//!
//! 1. **Reserve once** - Arenas and rings size their storage at construction
//! 2. **Never abort on exhaustion** - Out of memory is a returned error
//! 3. **Validate configuration up front** - Bad alignments and ring sizes
//!    are rejected when the component is built, not when it is used
//!
//! ## Example
//!
//! ```rust
//! use bedrock_core::{Arena, RingIndex};
//!
//! let mut arena = Arena::new(1024).unwrap();
//! let range = arena.allocate(100).unwrap();
//! arena.write(&range, b"payload").unwrap();
//!
//! let ring = RingIndex::new(8).unwrap();
//! assert!(ring.is_full(7, 0));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod bits;
pub mod config;
pub mod error;
pub mod memory;
pub mod ring;

pub use config::{ArenaConfig, BedrockConfig, RingConfig};
pub use error::{ArenaError, ArenaResult, ConfigError, RingError, RingResult};
pub use memory::{Arena, ArenaRange, SharedArena};
pub use ring::{RingBuffer, RingIndex};
