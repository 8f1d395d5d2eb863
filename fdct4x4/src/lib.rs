#![forbid(unsafe_code)]
//! Bit-exact fixed-point forward 4x4 DCT-II for block-based video encoders.
//!
//! Residual samples go in through a row stride, 16 row-major coefficients
//! come out. [`Backend::Scalar`] is the reference; the `simd` feature adds
//! a vectorized path that produces identical output.

pub mod backend;
pub mod consts;
pub mod error;
mod fdct;
#[cfg(feature = "simd")]
mod simd;
pub mod trace;

pub use backend::{Backend, window_len};
pub use consts::{BLOCK_LEN, MAX_RESIDUAL, TranLow};
pub use error::{Result, TransformError};
pub use trace::Stage;

/// Row-major 4x4 coefficient block.
pub type Coefficients = [TranLow; BLOCK_LEN];

/// Forward transform of the 4x4 window at the start of `input`, rows
/// `stride` samples apart, on the default backend.
pub fn fdct4x4(input: &[i16], stride: usize) -> Result<Coefficients> {
    Backend::default().transform(input, stride)
}

pub fn fdct4x4_with(backend: Backend, input: &[i16], stride: usize) -> Result<Coefficients> {
    backend.transform(input, stride)
}

/// Writes the 16 coefficients densely into the front of `output`.
pub fn fdct4x4_into(input: &[i16], stride: usize, output: &mut [TranLow]) -> Result<()> {
    fdct4x4_into_with(Backend::default(), input, stride, output)
}

pub fn fdct4x4_into_with(
    backend: Backend,
    input: &[i16],
    stride: usize,
    output: &mut [TranLow],
) -> Result<()> {
    if output.len() < BLOCK_LEN {
        return Err(TransformError::OutputTooShort {
            needed: BLOCK_LEN,
            len: output.len(),
        });
    }
    let coeffs = backend.transform(input, stride)?;
    output[..BLOCK_LEN].copy_from_slice(&coeffs);
    Ok(())
}

/// Dense (stride 4) block; cannot fail.
pub fn fdct4x4_block(block: &[i16; BLOCK_LEN]) -> Coefficients {
    Backend::default().transform_unchecked(block, 4)
}
