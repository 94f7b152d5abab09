//! Fixtures shared by the unit tests: generated JPEGs and scripted codecs.

use std::cell::RefCell;

use crate::codec::ImageCodec;
use crate::decode::DecodeError;
use crate::encode::{encode_jpeg, EncodeError};
use crate::Quality;

/// Gradient with per-pixel noise so the encoded size tracks quality closely.
pub(crate) fn noise_pixels(width: u32, height: u32, seed: u32) -> Vec<u8> {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            for channel in 0..3u32 {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                let base = (x * 255 / width.max(1) + y * 97 / height.max(1) + channel * 40) % 256;
                let jitter = (state >> 24) % 64;
                pixels.push(((base + jitter) % 256) as u8);
            }
        }
    }
    pixels
}

/// A noisy JPEG of the given size, encoded at `quality`.
pub(crate) fn sample_jpeg(width: u32, height: u32, quality: u8) -> Vec<u8> {
    let pixels = noise_pixels(width, height, width ^ height);
    encode_jpeg(&pixels, width, height, Quality::new(quality).unwrap()).unwrap()
}

/// Insert a big-endian EXIF APP1 segment carrying only an orientation tag
/// right after the SOI marker.
pub(crate) fn with_exif_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend_from_slice(b"Exif\0\0");
    payload.extend_from_slice(b"MM\0\x2a\0\0\0\x08");
    payload.extend_from_slice(&1u16.to_be_bytes());
    payload.extend_from_slice(&0x0112u16.to_be_bytes()); // Orientation
    payload.extend_from_slice(&3u16.to_be_bytes()); // SHORT
    payload.extend_from_slice(&1u32.to_be_bytes());
    payload.extend_from_slice(&orientation.to_be_bytes());
    payload.extend_from_slice(&[0, 0]);
    payload.extend_from_slice(&0u32.to_be_bytes());

    let segment_len = (payload.len() + 2) as u16;
    let mut out = Vec::with_capacity(jpeg.len() + payload.len() + 4);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// Codec whose output size is an exact function of quality.
///
/// Inputs starting with `FAKE` decode to a unit image; anything else is
/// rejected. Encoded bytes are filled with the quality value so callers can
/// tell results apart.
pub(crate) struct CurveCodec<F> {
    size_at: F,
    fail_at: Option<u8>,
    probes: RefCell<Vec<u8>>,
}

impl<F: Fn(u8) -> usize> CurveCodec<F> {
    pub(crate) fn new(size_at: F) -> Self {
        Self {
            size_at,
            fail_at: None,
            probes: RefCell::new(Vec::new()),
        }
    }

    /// Make every encode at `quality` fail.
    pub(crate) fn failing_at(mut self, quality: u8) -> Self {
        self.fail_at = Some(quality);
        self
    }

    /// Qualities passed to `encode`, in call order.
    pub(crate) fn probes(&self) -> Vec<u8> {
        self.probes.borrow().clone()
    }

    pub(crate) fn encode_calls(&self) -> usize {
        self.probes.borrow().len()
    }
}

impl<F: Fn(u8) -> usize> ImageCodec for CurveCodec<F> {
    type Image = ();

    fn decode(&self, bytes: &[u8]) -> Result<(), DecodeError> {
        if bytes.starts_with(b"FAKE") {
            Ok(())
        } else {
            Err(DecodeError::InvalidFormat)
        }
    }

    fn encode(&self, _image: &(), quality: Quality) -> Result<Vec<u8>, EncodeError> {
        let q = quality.value();
        self.probes.borrow_mut().push(q);
        if self.fail_at == Some(q) {
            return Err(EncodeError::EncodingFailed(format!("scripted failure at {q}")));
        }
        Ok(vec![q; (self.size_at)(q)])
    }
}

/// Wraps any codec and records which qualities it was asked to encode.
pub(crate) struct CountingCodec<C> {
    inner: C,
    probes: RefCell<Vec<u8>>,
}

impl<C> CountingCodec<C> {
    pub(crate) fn new(inner: C) -> Self {
        Self {
            inner,
            probes: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn encode_calls(&self) -> usize {
        self.probes.borrow().len()
    }
}

impl<C: ImageCodec> ImageCodec for CountingCodec<C> {
    type Image = C::Image;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Image, DecodeError> {
        self.inner.decode(bytes)
    }

    fn encode(&self, image: &Self::Image, quality: Quality) -> Result<Vec<u8>, EncodeError> {
        self.probes.borrow_mut().push(quality.value());
        self.inner.encode(image, quality)
    }
}
