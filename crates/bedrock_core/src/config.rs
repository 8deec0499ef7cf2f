//! # Configuration
//!
//! Sizing for arenas and rings, loaded once at startup from TOML.
//!
//! ```toml
//! [arena]
//! capacity = 65536
//! alignment = 8
//!
//! [ring]
//! capacity = 256
//! ```
//!
//! Every field is optional; missing values fall back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bits;
use crate::error::ConfigError;

/// Arena sizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArenaConfig {
    /// Total bytes reserved by the arena.
    pub capacity: usize,
    /// Byte boundary every allocation size is rounded up to.
    pub alignment: usize,
}

impl ArenaConfig {
    /// Default capacity: 64 KiB.
    pub const DEFAULT_CAPACITY: usize = bits::kib(64);

    /// Default alignment: 4 bytes.
    pub const DEFAULT_ALIGNMENT: usize = 4;

    /// Creates a config with the given capacity and the default alignment.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            alignment: Self::DEFAULT_ALIGNMENT,
        }
    }

    /// Checks that the alignment is a non-zero power of two and the
    /// capacity a multiple of it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !bits::is_power_of_two(self.alignment) {
            return Err(ConfigError::Invalid(format!(
                "arena.alignment must be a power of two, got {}",
                self.alignment
            )));
        }
        if !bits::is_aligned(self.capacity, self.alignment) {
            return Err(ConfigError::Invalid(format!(
                "arena.capacity must be a multiple of arena.alignment ({}), got {}",
                self.alignment, self.capacity
            )));
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

/// Ring sizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RingConfig {
    /// Number of slots. One slot is always left unused.
    pub capacity: usize,
}

impl RingConfig {
    /// Default slot count.
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Checks that the capacity is a power of two of at least 2.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity < 2 || !bits::is_power_of_two(self.capacity) {
            return Err(ConfigError::Invalid(format!(
                "ring.capacity must be a power of two >= 2, got {}",
                self.capacity
            )));
        }
        Ok(())
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
        }
    }
}

/// Top-level configuration file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BedrockConfig {
    /// `[arena]` table.
    pub arena: ArenaConfig,
    /// `[ring]` table.
    pub ring: RingConfig,
}

impl BedrockConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys,
    /// and [`ConfigError::Invalid`] when a value breaks a constraint.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if let Err(err) = config.validate() {
            tracing::warn!(error = %err, "rejected configuration");
            return Err(err);
        }
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`BedrockConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(
            path = %path.display(),
            arena_capacity = config.arena.capacity,
            arena_alignment = config.arena.alignment,
            ring_capacity = config.ring.capacity,
            "loaded configuration"
        );
        Ok(config)
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::Invalid`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.arena.validate()?;
        self.ring.validate()
    }
}
