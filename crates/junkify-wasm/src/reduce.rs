//! Reduce WASM bindings.
//!
//! Exposes the junkify-core reducer to JavaScript so a page or worker can
//! shrink a JPEG below an upload limit before sending it.
//!
//! # Example
//!
//! ```typescript
//! import { reduce_jpeg, reduce_jpeg_in_range } from '@junkify/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const reduced = reduce_jpeg(bytes, 500_000);
//! console.log(`quality ${reduced.quality}, ${reduced.byte_length} bytes`);
//!
//! // Never go below quality 40
//! const gentle = reduce_jpeg_in_range(bytes, 500_000, { min: 40, max: 100 });
//! ```

use std::error::Error;

use junkify_core::{ByteLimit, IngestGate, JpegCodec, QualityRange};
use wasm_bindgen::prelude::*;

use crate::types::JsReducedImage;

/// Shrink a JPEG to at most `limit` bytes.
///
/// Images that already fit come back unchanged with quality 100.
///
/// # Errors
///
/// Returns an error string if the limit is zero, the bytes are not a JPEG,
/// encoding fails, or even quality 1 is larger than the limit.
#[wasm_bindgen]
pub fn reduce_jpeg(bytes: &[u8], limit: u32) -> Result<JsReducedImage, JsValue> {
    reduce(bytes, limit, QualityRange::default()).map_err(|e| JsValue::from_str(&e))
}

/// Shrink a JPEG to at most `limit` bytes, searching only within `range`.
///
/// `range` is a `{ min, max }` object with `1 <= min < max <= 100`.
#[wasm_bindgen]
pub fn reduce_jpeg_in_range(
    bytes: &[u8],
    limit: u32,
    range: JsValue,
) -> Result<JsReducedImage, JsValue> {
    let range: QualityRange = serde_wasm_bindgen::from_value(range)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    reduce(bytes, limit, range).map_err(|e| JsValue::from_str(&e))
}

fn reduce(bytes: &[u8], limit: u32, range: QualityRange) -> Result<JsReducedImage, String> {
    let limit = ByteLimit::new(limit as usize).map_err(|e| e.to_string())?;
    IngestGate::with_range(JpegCodec::new(), range)
        .reduce_bytes(bytes, limit)
        .map(JsReducedImage::from)
        .map_err(|e| chain_message(&e))
}

/// `outer: cause: root cause`, one entry per error in the source chain.
fn chain_message(err: &(dyn Error + 'static)) -> String {
    std::iter::successors(Some(err), |&e: &&(dyn Error + 'static)| e.source())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}


/// WASM-specific tests that go through `JsValue`.
///
/// Run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_reduce_jpeg_invalid_bytes() {
        assert!(reduce_jpeg(&[0, 1, 2, 3], 1_000).is_err());
    }

    #[wasm_bindgen_test]
    fn test_reduce_jpeg_in_range_rejects_bad_range() {
        let range = serde_wasm_bindgen::to_value(&RawRange { min: 80, max: 20 }).unwrap();
        assert!(reduce_jpeg_in_range(&[0xFF, 0xD8], 1_000, range).is_err());
    }

    #[derive(serde::Serialize)]
    struct RawRange {
        min: u8,
        max: u8,
    }
}
