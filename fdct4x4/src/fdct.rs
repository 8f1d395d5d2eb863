//! Reference scalar forward 4x4 DCT.
//!
//! Load/scale, a column pass, a transpose, a row pass and the final
//! normalization. Every other backend must match this one bit for bit.

use crate::backend::Backend;
use crate::consts::{
    BLOCK_LEN, BLOCK_SIZE, COSPI_8_64, COSPI_16_64, COSPI_24_64, DCT_CONST_BITS, INPUT_SCALE,
    MAX_RESIDUAL, TranHigh, TranLow,
};
use crate::trace::{self, Stage};

/// Rounds half up while dropping the cosine table's binary point.
#[inline]
pub(crate) fn round_shift(value: TranHigh) -> TranHigh {
    (value + (1 << (DCT_CONST_BITS - 1))) >> DCT_CONST_BITS
}

#[inline]
pub(crate) fn narrow(value: TranHigh) -> TranLow {
    debug_assert!(
        TranLow::try_from(value).is_ok(),
        "intermediate {value} exceeds coefficient precision"
    );
    value as TranLow
}

/// Undoes the input pre-scale once both passes are done.
#[inline]
pub(crate) fn normalize(value: TranLow) -> TranLow {
    ((i32::from(value) + 1) >> 2) as TranLow
}

#[inline]
pub(crate) fn scale_sample(sample: i16) -> TranHigh {
    debug_assert!(
        (-MAX_RESIDUAL..=MAX_RESIDUAL).contains(&sample),
        "residual {sample} outside +/-{MAX_RESIDUAL}"
    );
    TranHigh::from(sample) * INPUT_SCALE
}

/// Reads the window column by column: `out[c * 4 + r] = input[r * stride + c] * 16`.
///
/// The pre-scaled DC sample gets `+1` when it is non-zero, exactly once.
pub(crate) fn load_scaled(input: &[i16], stride: usize) -> [TranHigh; BLOCK_LEN] {
    let mut out = [0; BLOCK_LEN];
    for col in 0..BLOCK_SIZE {
        for row in 0..BLOCK_SIZE {
            out[col * BLOCK_SIZE + row] = scale_sample(input[row * stride + col]);
        }
    }
    if out[0] != 0 {
        out[0] += 1;
    }
    out
}

/// One length-4 DCT-II on wide values, before rounding.
///
/// Returns `[dc, odd_a, even, odd_b]`, i.e. frequencies 0 through 3.
#[inline]
pub(crate) fn butterfly(a: [TranHigh; 4]) -> [TranHigh; 4] {
    let s0 = a[0] + a[3];
    let s1 = a[1] + a[2];
    let s2 = a[1] - a[2];
    let s3 = a[0] - a[3];

    let t0 = (s0 + s1) * COSPI_16_64;
    let t1 = (s0 - s1) * COSPI_16_64;
    let t2 = s2 * COSPI_24_64 + s3 * COSPI_8_64;
    let t3 = -s2 * COSPI_8_64 + s3 * COSPI_24_64;

    [t0, t2, t1, t3]
}

/// Runs the butterfly over four groups of four and narrows each result.
/// Group `g` lands in row `g` of the output.
fn pass(groups: &[TranHigh; BLOCK_LEN]) -> [TranLow; BLOCK_LEN] {
    let mut out = [0; BLOCK_LEN];
    for (src, dst) in groups
        .chunks_exact(BLOCK_SIZE)
        .zip(out.chunks_exact_mut(BLOCK_SIZE))
    {
        let t = butterfly([src[0], src[1], src[2], src[3]]);
        for (d, v) in dst.iter_mut().zip(t) {
            *d = narrow(round_shift(v));
        }
    }
    out
}

pub(crate) fn transpose_4x4<T>(buf: &mut [T; BLOCK_LEN]) {
    for r in 0..BLOCK_SIZE {
        for c in (r + 1)..BLOCK_SIZE {
            buf.swap(r * BLOCK_SIZE + c, c * BLOCK_SIZE + r);
        }
    }
}

fn widen(buf: [TranLow; BLOCK_LEN]) -> [TranHigh; BLOCK_LEN] {
    buf.map(TranHigh::from)
}

/// Caller guarantees `stride >= 4` and `input.len() >= 3 * stride + 4`.
pub(crate) fn forward(input: &[i16], stride: usize) -> [TranLow; BLOCK_LEN] {
    let columns = load_scaled(input, stride);
    trace::emit(Backend::Scalar, Stage::Load, &columns);

    // Row c holds the four frequencies of input column c.
    let mut intermediate = pass(&columns);
    trace::emit(Backend::Scalar, Stage::FirstPass, &intermediate);

    transpose_4x4(&mut intermediate);
    trace::emit(Backend::Scalar, Stage::Transpose, &intermediate);

    let mut out = pass(&widen(intermediate));
    trace::emit(Backend::Scalar, Stage::SecondPass, &out);

    for v in &mut out {
        *v = normalize(*v);
    }
    trace::emit(Backend::Scalar, Stage::Normalize, &out);
    out
}
