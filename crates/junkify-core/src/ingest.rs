//! Entry point for a reduce call: read, decode once, and only search when
//! the original does not already fit.

use std::io::Read;

use tracing::debug;

use crate::codec::ImageCodec;
use crate::search::SizeConstrainedEncoder;
use crate::{ByteLimit, EncodedResult, QualityRange, ReduceError};

/// Validates and buffers the input, then hands off to the search.
///
/// An image whose original bytes already fit the limit is returned verbatim
/// at quality 100 without a single re-encode.
#[derive(Debug, Clone)]
pub struct IngestGate<C> {
    encoder: SizeConstrainedEncoder<C>,
}

impl<C: ImageCodec> IngestGate<C> {
    pub fn new(codec: C) -> Self {
        Self {
            encoder: SizeConstrainedEncoder::new(codec),
        }
    }

    pub fn with_range(codec: C, range: QualityRange) -> Self {
        Self {
            encoder: SizeConstrainedEncoder::with_range(codec, range),
        }
    }

    pub fn encoder(&self) -> &SizeConstrainedEncoder<C> {
        &self.encoder
    }

    /// Reduce the image read from `input` to at most `limit` bytes.
    ///
    /// # Errors
    ///
    /// - `MissingInput` when `input` is `None`
    /// - `Read` when the stream fails
    /// - `Decode` when the bytes are not a valid image
    /// - `Encode` / `LimitUnattainable` from the search
    pub fn reduce<R: Read>(
        &self,
        input: Option<R>,
        limit: ByteLimit,
    ) -> Result<EncodedResult, ReduceError> {
        let mut reader = input.ok_or(ReduceError::MissingInput)?;
        let mut original = Vec::new();
        reader.read_to_end(&mut original).map_err(ReduceError::Read)?;
        self.reduce_buffer(original, limit)
    }

    /// Reduce an image the caller already holds in memory.
    pub fn reduce_bytes(
        &self,
        bytes: &[u8],
        limit: ByteLimit,
    ) -> Result<EncodedResult, ReduceError> {
        self.reduce_buffer(bytes.to_vec(), limit)
    }

    fn reduce_buffer(
        &self,
        original: Vec<u8>,
        limit: ByteLimit,
    ) -> Result<EncodedResult, ReduceError> {
        let image = self.encoder.codec().decode(&original)?;

        if limit.fits(original.len()) {
            debug!(size = original.len(), limit = limit.get(), "original already fits");
            return Ok(EncodedResult::original(original));
        }

        debug!(
            size = original.len(),
            limit = limit.get(),
            "searching for a smaller encoding"
        );
        self.encoder.search(&image, limit)
    }
}

impl<C: ImageCodec + Default> Default for IngestGate<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}
