//! The codec capability the reducer is written against.
//!
//! The search only needs two black-box operations: turn bytes into an image
//! once, and turn that image into bytes at a given quality as many times as
//! it takes. Keeping them behind a trait lets the search be exercised with a
//! codec whose size-vs-quality curve is known exactly.

use crate::decode::{self, DecodeError, DecodedImage};
use crate::encode::{self, EncodeError};
use crate::Quality;

/// Decode/encode pair for one lossy image format.
///
/// Implementations must make `encode` a pure function of `(image, quality)`;
/// the search assumes the encoded size does not grow as quality drops.
pub trait ImageCodec {
    /// The in-memory image handed from `decode` to `encode`.
    type Image;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Image, DecodeError>;

    fn encode(&self, image: &Self::Image, quality: Quality) -> Result<Vec<u8>, EncodeError>;
}

impl<C: ImageCodec + ?Sized> ImageCodec for &C {
    type Image = C::Image;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Image, DecodeError> {
        (**self).decode(bytes)
    }

    fn encode(&self, image: &Self::Image, quality: Quality) -> Result<Vec<u8>, EncodeError> {
        (**self).encode(image, quality)
    }
}

/// Baseline JPEG codec backed by the `image` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegCodec {
    apply_orientation: bool,
}

impl JpegCodec {
    /// Codec that rotates pixels upright according to EXIF orientation.
    pub fn new() -> Self {
        Self {
            apply_orientation: true,
        }
    }

    /// Codec that keeps the stored pixel order and ignores EXIF.
    pub fn without_orientation() -> Self {
        Self {
            apply_orientation: false,
        }
    }

    pub fn applies_orientation(&self) -> bool {
        self.apply_orientation
    }
}

impl Default for JpegCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCodec for JpegCodec {
    type Image = DecodedImage;

    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
        if self.apply_orientation {
            decode::decode_jpeg(bytes)
        } else {
            decode::decode_jpeg_no_orientation(bytes)
        }
    }

    fn encode(&self, image: &DecodedImage, quality: Quality) -> Result<Vec<u8>, EncodeError> {
        encode::encode_jpeg(&image.pixels, image.width, image.height, quality)
    }
}
