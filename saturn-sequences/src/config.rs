//! Tuning knobs for [`ResizableArray`].
//!
//! [`ResizableArray`]: crate::generic::resizable_array::ResizableArray

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CollectionError, CollectionResult};

/// Capacity a freshly created or cleared array starts with.
pub const DEFAULT_INITIAL_CAPACITY: usize = 32;

/// Configuration for a [`ResizableArray`].
///
/// `initial_capacity` is both the starting allocation and the floor the array
/// never shrinks below. Every capacity the array ever reports is
/// `initial_capacity * 2^k`.
///
/// # Examples
///
/// ```rust
/// use saturn_sequences::config::ArrayConfig;
///
/// let config = ArrayConfig::new(64).unwrap();
/// assert_eq!(config.initial_capacity, 64);
///
/// assert!(ArrayConfig::new(48).is_err());
/// assert_eq!(ArrayConfig::default().initial_capacity, 32);
/// ```
///
/// [`ResizableArray`]: crate::generic::resizable_array::ResizableArray
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArrayConfig {
    pub initial_capacity: usize,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl ArrayConfig {
    /// Builds a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidCapacity`] when `initial_capacity` is
    /// zero or not a power of two.
    pub fn new(initial_capacity: usize) -> CollectionResult<Self> {
        let config = Self { initial_capacity };
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants a deserialized configuration may have skipped.
    pub fn validate(&self) -> CollectionResult<()> {
        if self.initial_capacity.is_power_of_two() {
            Ok(())
        } else {
            Err(CollectionError::InvalidCapacity(self.initial_capacity))
        }
    }
}
