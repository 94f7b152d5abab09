//! Junkify Core - shrink JPEGs to fit a byte budget
//!
//! Given an encoded image and a byte limit, this crate finds the highest
//! JPEG quality whose re-encoded output is at or under the limit, using a
//! binary search over the 1-100 quality scale so that no more than eight
//! re-encodes are ever needed.
//!
//! - [`IngestGate`] reads and decodes the input once and returns it
//!   untouched when it already fits.
//! - [`SizeConstrainedEncoder`] runs the quality search.
//! - [`ImageCodec`] is the decode/encode capability both are written
//!   against; [`JpegCodec`] is the default implementation.
//!
//! ```ignore
//! use junkify_core::{reduce_jpeg, ByteLimit};
//!
//! let file = std::fs::File::open("photo.jpg")?;
//! let result = reduce_jpeg(file, ByteLimit::new(500_000)?)?;
//! println!("quality {} -> {} bytes", result.quality(), result.len());
//! ```

use std::io::Read;

pub mod codec;
pub mod decode;
pub mod encode;
mod error;
pub mod ingest;
mod quality;
pub mod search;

#[cfg(test)]
mod test_support;

pub use codec::{ImageCodec, JpegCodec};
pub use error::ReduceError;
pub use ingest::IngestGate;
pub use quality::{ByteLimit, LimitError, Quality, QualityRange};
pub use search::SizeConstrainedEncoder;

/// The bytes a reduce call settled on and the quality that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedResult {
    bytes: Vec<u8>,
    quality: Quality,
    original: bool,
}

impl EncodedResult {
    pub(crate) fn encoded(bytes: Vec<u8>, quality: Quality) -> Self {
        Self {
            bytes,
            quality,
            original: false,
        }
    }

    /// The caller's own bytes, passed through at full quality.
    pub(crate) fn original(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            quality: Quality::MAX,
            original: true,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True when no re-encode happened and the input bytes came back as-is.
    pub fn is_original(&self) -> bool {
        self.original
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn into_parts(self) -> (Vec<u8>, Quality) {
        (self.bytes, self.quality)
    }
}

/// Reduce a JPEG stream to at most `limit` bytes with the default codec.
pub fn reduce_jpeg<R: Read>(input: R, limit: ByteLimit) -> Result<EncodedResult, ReduceError> {
    IngestGate::new(JpegCodec::new()).reduce(Some(input), limit)
}
