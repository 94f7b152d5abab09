//! WASM-compatible wrapper types for reduce results.

use junkify_core::EncodedResult;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A reduced JPEG handed back to JavaScript.
///
/// The encoded bytes live in WASM memory; `bytes()` copies them out as a
/// `Uint8Array`.
#[wasm_bindgen]
pub struct JsReducedImage {
    bytes: Vec<u8>,
    quality: u8,
    is_original: bool,
}

#[wasm_bindgen]
impl JsReducedImage {
    /// JPEG quality the bytes were encoded at (100 when untouched).
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Size of the encoded JPEG in bytes.
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the input already fit and was returned without re-encoding.
    #[wasm_bindgen(getter)]
    pub fn is_original(&self) -> bool {
        self.is_original
    }

    /// Returns the JPEG bytes as Uint8Array (a copy).
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Plain `{ quality, byteLength, isOriginal }` object for logging or
    /// posting between workers without the byte payload.
    pub fn summary(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.to_summary())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsReducedImage {
    pub(crate) fn to_summary(&self) -> ReduceSummary {
        ReduceSummary {
            quality: self.quality,
            byte_length: self.bytes.len(),
            is_original: self.is_original,
        }
    }
}

impl From<EncodedResult> for JsReducedImage {
    fn from(result: EncodedResult) -> Self {
        let is_original = result.is_original();
        let (bytes, quality) = result.into_parts();
        Self {
            bytes,
            quality: quality.value(),
            is_original,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReduceSummary {
    pub quality: u8,
    pub byte_length: usize,
    pub is_original: bool,
}
