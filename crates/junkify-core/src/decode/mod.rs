//! JPEG decoding.
//!
//! Decoding is the only format validation the reducer performs: bytes are
//! accepted when the `image` crate recognizes them as JPEG and decodes them
//! cleanly. File extensions are never consulted here.
//!
//! EXIF orientation is applied to the pixels by default because the
//! re-encoded output carries no EXIF block; without this, rotated camera
//! photos would come back sideways.

mod jpeg;
mod types;

pub use jpeg::{decode_jpeg, decode_jpeg_no_orientation, get_orientation};
pub use types::{DecodeError, DecodedImage, Orientation};
