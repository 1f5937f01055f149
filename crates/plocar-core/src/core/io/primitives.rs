//! Native-endian primitive reads.

use crate::engine::error::FormatError;
use byteorder::{NativeEndian, ReadBytesExt};
use nalgebra::Complex;
use std::io::Read;

pub(crate) fn read_i32(reader: &mut impl Read, context: &'static str) -> Result<i32, FormatError> {
    reader
        .read_i32::<NativeEndian>()
        .map_err(|e| FormatError::from_io(e, context))
}

pub(crate) fn read_f32(reader: &mut impl Read, context: &'static str) -> Result<f32, FormatError> {
    reader
        .read_f32::<NativeEndian>()
        .map_err(|e| FormatError::from_io(e, context))
}

pub(crate) fn read_f64(reader: &mut impl Read, context: &'static str) -> Result<f64, FormatError> {
    reader
        .read_f64::<NativeEndian>()
        .map_err(|e| FormatError::from_io(e, context))
}

/// Fills `scratch` with interleaved `(re, im)` pairs of `complex128` values and copies
/// them into `out`. `scratch.len()` must be `2 * out.len()`.
pub(crate) fn read_complex128_into(
    reader: &mut impl Read,
    scratch: &mut [f64],
    out: &mut [Complex<f64>],
    context: &'static str,
) -> Result<(), FormatError> {
    reader
        .read_f64_into::<NativeEndian>(scratch)
        .map_err(|e| FormatError::from_io(e, context))?;
    for (dst, pair) in out.iter_mut().zip(scratch.chunks_exact(2)) {
        *dst = Complex::new(pair[0], pair[1]);
    }
    Ok(())
}

/// Like [`read_complex128_into`] for `complex64` values, widening each part to `f64`.
pub(crate) fn read_complex64_into(
    reader: &mut impl Read,
    scratch: &mut [f32],
    out: &mut [Complex<f64>],
    context: &'static str,
) -> Result<(), FormatError> {
    reader
        .read_f32_into::<NativeEndian>(scratch)
        .map_err(|e| FormatError::from_io(e, context))?;
    for (dst, pair) in out.iter_mut().zip(scratch.chunks_exact(2)) {
        *dst = Complex::new(f64::from(pair[0]), f64::from(pair[1]));
    }
    Ok(())
}
