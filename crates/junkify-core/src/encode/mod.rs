//! JPEG encoding at an explicit quality.
//!
//! This is the expensive step the search tries to call as rarely as
//! possible; each call produces a fresh, independent byte buffer.

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError};
