//! Binary search for the highest quality whose encoding fits a byte limit.
//!
//! The bracket `(min, max)` keeps `min` at the best quality known to fit (or
//! the floor) and `max` at a quality known or assumed to overflow (or the
//! ceiling). Each probe halves the bracket, so a 1-100 search costs at most
//! seven probes plus one confirming encode at `min`.
//!
//! Encoded size is assumed not to grow as quality drops. Codecs that break
//! this slightly near quantization-table transitions still get a result that
//! fits, just not necessarily the best one.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::codec::ImageCodec;
use crate::{ByteLimit, EncodedResult, Quality, QualityRange, ReduceError};

/// Re-encodes an image at decreasing quality until it fits a byte limit.
#[derive(Debug, Clone)]
pub struct SizeConstrainedEncoder<C> {
    codec: C,
    range: QualityRange,
}

impl<C: ImageCodec> SizeConstrainedEncoder<C> {
    /// Search over the full 1-100 scale.
    pub fn new(codec: C) -> Self {
        Self::with_range(codec, QualityRange::default())
    }

    /// Search over a narrower bracket of the scale.
    pub fn with_range(codec: C, range: QualityRange) -> Self {
        Self { codec, range }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn range(&self) -> QualityRange {
        self.range
    }

    /// Find the highest quality in the range whose encoding is at most
    /// `limit` bytes and return those bytes.
    ///
    /// An encode landing exactly on the limit is returned immediately. Any
    /// encode failure aborts the search. If the floor quality still
    /// overflows, `ReduceError::LimitUnattainable` is returned and no bytes
    /// are produced.
    pub fn search(
        &self,
        image: &C::Image,
        limit: ByteLimit,
    ) -> Result<EncodedResult, ReduceError> {
        let mut min = self.range.min();
        let mut max = self.range.max();

        while min.gap(max) > 1 {
            let quality = min.midpoint(max);
            let bytes = self.encode_at(image, quality)?;
            trace!(
                quality = quality.value(),
                size = bytes.len(),
                min = min.value(),
                max = max.value(),
                "probe"
            );

            match bytes.len().cmp(&limit.get()) {
                Ordering::Equal => {
                    debug!(quality = quality.value(), size = bytes.len(), "exact fit");
                    return Ok(EncodedResult::encoded(bytes, quality));
                }
                Ordering::Less => min = quality,
                Ordering::Greater => max = quality,
            }
        }

        let bytes = self.encode_at(image, min)?;
        if !limit.fits(bytes.len()) {
            debug!(
                quality = min.value(),
                size = bytes.len(),
                limit = limit.get(),
                "limit unattainable"
            );
            return Err(ReduceError::LimitUnattainable {
                limit: limit.get(),
                size: bytes.len(),
            });
        }

        debug!(quality = min.value(), size = bytes.len(), "settled");
        Ok(EncodedResult::encoded(bytes, min))
    }

    fn encode_at(&self, image: &C::Image, quality: Quality) -> Result<Vec<u8>, ReduceError> {
        self.codec
            .encode(image, quality)
            .map_err(|source| ReduceError::Encode { quality, source })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_support::CurveCodec;
    use proptest::prelude::*;

    /// Strictly increasing sizes for qualities 1..=100.
    fn curve_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..=400, 100).prop_map(|steps| {
            steps
                .into_iter()
                .scan(0usize, |total, step| {
                    *total += step;
                    Some(*total)
                })
                .collect()
        })
    }

    proptest! {
        /// The result is the highest quality below the ceiling that fits,
        /// found within the encode budget.
        #[test]
        fn prop_highest_feasible_quality(
            sizes in curve_strategy(),
            slack in 0.0f64..1.1,
        ) {
            let top = sizes[99];
            let limit_bytes = ((top as f64 * slack) as usize).max(1);
            let codec = CurveCodec::new(|quality| sizes[usize::from(quality) - 1]);
            let encoder = SizeConstrainedEncoder::new(&codec);

            let outcome = encoder.search(&(), ByteLimit::new(limit_bytes).unwrap());
            prop_assert!(codec.encode_calls() <= 8);

            let best = (1u8..100).rev().find(|&q| sizes[usize::from(q) - 1] <= limit_bytes);
            match (best, outcome) {
                (Some(expected), Ok(result)) => {
                    prop_assert_eq!(result.quality().value(), expected);
                    prop_assert!(result.len() <= limit_bytes);
                }
                (None, Err(ReduceError::LimitUnattainable { size, .. })) => {
                    prop_assert_eq!(size, sizes[0]);
                }
                (best, outcome) => {
                    prop_assert!(false, "expected {:?}, got {:?}", best, outcome);
                }
            }
        }
    }
}
