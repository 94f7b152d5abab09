//! Junkify WASM - WebAssembly bindings for junkify-core
//!
//! This crate exposes the size-constrained JPEG reducer to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `reduce` - Shrink a JPEG to a byte budget
//! - `types` - WASM-compatible wrapper for the reduce result
//!
//! # Usage
//!
//! ```typescript
//! import init, { reduce_jpeg } from '@junkify/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const reduced = reduce_jpeg(bytes, 1_000_000);
//! const blob = new Blob([reduced.bytes()], { type: 'image/jpeg' });
//! ```

use wasm_bindgen::prelude::*;

mod reduce;
mod types;

pub use reduce::{reduce_jpeg, reduce_jpeg_in_range};
pub use types::JsReducedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
