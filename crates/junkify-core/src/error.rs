//! Failure modes of a reduce call.

use std::io;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::Quality;

/// Everything that can stop a reduce call from producing bytes.
///
/// `LimitUnattainable` is deliberately separate from `Encode` so callers can
/// tell an infeasible budget from a failing codec.
#[derive(Debug, Error)]
pub enum ReduceError {
    /// No input stream was supplied.
    #[error("missing image")]
    MissingInput,

    /// Reading the input stream failed.
    #[error("reading image")]
    Read(#[source] io::Error),

    /// The input bytes are not a decodable image.
    #[error("decoding image")]
    Decode(#[from] DecodeError),

    /// The codec failed while encoding at `quality`. The search stops here.
    #[error("shrinking image with quality {quality}%")]
    Encode {
        quality: Quality,
        #[source]
        source: EncodeError,
    },

    /// Even the lowest quality in the range produced more than `limit` bytes.
    #[error("could not shrink image to {limit} bytes: lowest quality still produced {size} bytes")]
    LimitUnattainable { limit: usize, size: usize },
}

impl ReduceError {
    /// True when the budget itself is the problem, not the input or codec.
    pub fn is_limit_unattainable(&self) -> bool {
        matches!(self, ReduceError::LimitUnattainable { .. })
    }
}
