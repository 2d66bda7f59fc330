//! Quantization Codec
//!
//! Turns floating-point embeddings into symmetric int8 vectors and moves
//! those vectors through text as base64 of their raw bytes.
//!
//! | Step | Function | Lossy |
//! |------|----------|-------|
//! | L2 normalize | [`normalize`] | no |
//! | Scale, round, clamp | [`quantize`] | yes |
//! | Bytes to text | [`encode`] | no |
//! | Text to bytes | [`decode`] | no |
//!
//! This is the only module that reinterprets `i8` memory as `u8` or back.

use crate::constants::{QUANTIZATION_SCALE, QUANTIZED_MAX, QUANTIZED_MIN};
use crate::error::{Error, Result};
use crate::value_objects::QuantizedVector;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Scale `v` to unit L2 length
///
/// The zero vector is returned unchanged: its norm is replaced by `1`.
pub fn normalize(v: &[f32]) -> Vec<f32> {
    let sum_sq: f64 = v.iter().map(|&x| f64::from(x) * f64::from(x)).sum();
    let norm = sum_sq.sqrt();
    let inv = if norm == 0.0 { 1.0 } else { 1.0 / norm };
    v.iter().map(|&x| (f64::from(x) * inv) as f32).collect()
}

/// Quantize a unit vector into `[-127, 127]`
///
/// Each component becomes `floor(u * 127 + 0.5)` clamped to the symmetric
/// range, so halves round toward positive infinity (`63.5 -> 64`,
/// `-63.5 -> -63`) the same way browser clients quantize. NaN components
/// quantize to `0`.
pub fn quantize(unit: &[f32]) -> QuantizedVector {
    let scale = f64::from(QUANTIZATION_SCALE);
    let lo = f64::from(QUANTIZED_MIN);
    let hi = f64::from(QUANTIZED_MAX);
    unit.iter()
        .map(|&u| (f64::from(u) * scale + 0.5).floor().clamp(lo, hi) as i8)
        .collect()
}

/// Normalize then quantize a raw embedding
///
/// Rejects embeddings carrying NaN or infinite components.
pub fn quantize_embedding(v: &[f32]) -> Result<QuantizedVector> {
    if let Some(position) = v.iter().position(|x| !x.is_finite()) {
        return Err(Error::invalid_input(format!(
            "embedding component {position} is not finite"
        )));
    }
    Ok(quantize(&normalize(v)))
}

/// Encode the raw bytes of `q` as standard base64
pub fn encode(q: &QuantizedVector) -> String {
    STANDARD.encode(as_bytes(q.as_slice()))
}

/// Decode standard base64 into a quantized vector, byte for byte
///
/// Surrounding whitespace is ignored.
pub fn decode(text: &str) -> Result<QuantizedVector> {
    let bytes = STANDARD.decode(text.trim())?;
    Ok(QuantizedVector::from(from_bytes(bytes)))
}

/// View signed components as their unsigned byte patterns
#[allow(unsafe_code)]
fn as_bytes(values: &[i8]) -> &[u8] {
    // SAFETY: i8 and u8 share size, alignment and every bit pattern is valid
    // for both, so the same memory is a valid [u8] of identical length.
    unsafe { std::slice::from_raw_parts(values.as_ptr().cast::<u8>(), values.len()) }
}

/// Take over a byte buffer as signed components without copying
#[allow(unsafe_code)]
fn from_bytes(bytes: Vec<u8>) -> Vec<i8> {
    let mut bytes = std::mem::ManuallyDrop::new(bytes);
    let (ptr, len, cap) = (bytes.as_mut_ptr(), bytes.len(), bytes.capacity());
    // SAFETY: the allocation came from a Vec<u8>; i8 has the same size and
    // alignment, so it is reclaimed with an identical layout. Two's-complement
    // bytes reinterpret as i8 without arithmetic conversion.
    unsafe { Vec::from_raw_parts(ptr.cast::<i8>(), len, cap) }
}
