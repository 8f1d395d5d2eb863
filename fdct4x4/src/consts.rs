//! Fixed-point constants and element widths shared by every transform path.

/// Coefficient storage type (`tran_low_t` in codec terms).
#[cfg(feature = "highbitdepth")]
pub type TranLow = i32;
/// Accumulator type wide enough for a pre-scaled sample times a cosine term.
#[cfg(feature = "highbitdepth")]
pub type TranHigh = i64;

/// Coefficient storage type (`tran_low_t` in codec terms).
#[cfg(not(feature = "highbitdepth"))]
pub type TranLow = i16;
/// Accumulator type wide enough for a pre-scaled sample times a cosine term.
#[cfg(not(feature = "highbitdepth"))]
pub type TranHigh = i32;

/// Largest residual magnitude the accumulator width is sized for.
#[cfg(feature = "highbitdepth")]
pub const MAX_RESIDUAL: i16 = 4095;
/// Largest residual magnitude the accumulator width is sized for.
#[cfg(not(feature = "highbitdepth"))]
pub const MAX_RESIDUAL: i16 = 255;

/// Binary point of the cosine table.
pub const DCT_CONST_BITS: u32 = 14;

/// round(2^14 * cos(8 * pi / 64))
pub const COSPI_8_64: TranHigh = 15137;
/// round(2^14 * cos(16 * pi / 64))
pub const COSPI_16_64: TranHigh = 11585;
/// round(2^14 * cos(24 * pi / 64))
pub const COSPI_24_64: TranHigh = 6270;

/// Samples are multiplied by this before the first pass.
pub const INPUT_SCALE: TranHigh = 16;

/// Side length of the only supported block.
pub const BLOCK_SIZE: usize = 4;
/// Samples per block.
pub const BLOCK_LEN: usize = BLOCK_SIZE * BLOCK_SIZE;
