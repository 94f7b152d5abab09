//! Quality scale and byte budget types.
//!
//! `Quality` is the codec's fidelity knob on a bounded 1-100 scale,
//! `QualityRange` is the bracket the search runs over, and `ByteLimit` is the
//! caller's size budget. All three validate on construction so the search
//! never has to.

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing a quality, range or byte limit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    /// Quality outside the codec's 1-100 scale.
    #[error("quality {0} is outside the supported range 1-100")]
    QualityOutOfRange(u8),

    /// Range whose floor is not strictly below its ceiling.
    #[error("quality range {min}-{max} is empty: min must be below max")]
    EmptyRange { min: u8, max: u8 },

    /// A byte limit of zero.
    #[error("positive byte limit required")]
    ZeroByteLimit,
}

/// Lossy codec quality, 1 (smallest output) to 100 (largest output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quality(u8);

impl Quality {
    /// Lowest fidelity, smallest output.
    pub const MIN: Quality = Quality(1);
    /// Highest fidelity, largest output.
    pub const MAX: Quality = Quality(100);

    /// Create a quality value, rejecting anything outside 1-100.
    pub fn new(value: u8) -> Result<Self, LimitError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(LimitError::QualityOutOfRange(value))
        }
    }

    /// The raw quality value.
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Number of steps from `self` up to `upper` (zero if `upper` is not above).
    #[inline]
    pub(crate) fn gap(self, upper: Quality) -> u8 {
        upper.0.saturating_sub(self.0)
    }

    /// Floor midpoint between `self` and `upper`.
    #[inline]
    pub(crate) fn midpoint(self, upper: Quality) -> Quality {
        Quality(self.0 + self.gap(upper) / 2)
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<u8> for Quality {
    type Error = LimitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}

/// Inclusive bracket of qualities the search may return.
///
/// The ceiling is treated as the initial "too large" bound and is never
/// probed by the search; the floor is the last resort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr", into = "RangeRepr")]
pub struct QualityRange {
    min: Quality,
    max: Quality,
}

#[derive(Serialize, Deserialize)]
struct RangeRepr {
    min: u8,
    max: u8,
}

impl QualityRange {
    /// Create a range, requiring `min < max`.
    pub fn new(min: Quality, max: Quality) -> Result<Self, LimitError> {
        if min >= max {
            return Err(LimitError::EmptyRange {
                min: min.value(),
                max: max.value(),
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Quality {
        self.min
    }

    pub fn max(&self) -> Quality {
        self.max
    }

    /// Upper bound on encoder invocations for one search over this range:
    /// `ceil(log2(max - min))` bracket probes plus the final confirmation.
    pub fn max_encodes(&self) -> u32 {
        let width = u32::from(self.min.gap(self.max));
        let probes = if width <= 1 {
            0
        } else {
            u32::BITS - (width - 1).leading_zeros()
        };
        probes + 1
    }
}

impl Default for QualityRange {
    fn default() -> Self {
        Self {
            min: Quality::MIN,
            max: Quality::MAX,
        }
    }
}

impl TryFrom<RangeRepr> for QualityRange {
    type Error = LimitError;

    fn try_from(repr: RangeRepr) -> Result<Self, Self::Error> {
        Self::new(Quality::new(repr.min)?, Quality::new(repr.max)?)
    }
}

impl From<QualityRange> for RangeRepr {
    fn from(range: QualityRange) -> Self {
        Self {
            min: range.min.value(),
            max: range.max.value(),
        }
    }
}

/// Maximum acceptable encoded size in bytes. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteLimit(NonZeroUsize);

impl ByteLimit {
    pub fn new(bytes: usize) -> Result<Self, LimitError> {
        NonZeroUsize::new(bytes)
            .map(Self)
            .ok_or(LimitError::ZeroByteLimit)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Whether an output of `len` bytes satisfies this limit.
    #[inline]
    pub fn fits(self, len: usize) -> bool {
        len <= self.get()
    }
}

impl fmt::Display for ByteLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.0)
    }
}

impl From<NonZeroUsize> for ByteLimit {
    fn from(bytes: NonZeroUsize) -> Self {
        Self(bytes)
    }
}
