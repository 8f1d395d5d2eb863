//! Vectorized forward 4x4 DCT using the `wide` crate.
//!
//! Each `i32x4` holds one row of the block, so a single butterfly over four
//! vectors transforms all four columns at once. Products are widened to
//! `i64x4` before accumulation and rounded there, which keeps the result
//! identical to the scalar path for both coefficient widths.

use wide::{i32x4, i64x4};

use crate::backend::Backend;
use crate::consts::{
    BLOCK_LEN, BLOCK_SIZE, COSPI_8_64, COSPI_16_64, COSPI_24_64, DCT_CONST_BITS, TranHigh,
    TranLow,
};
use crate::fdct::{normalize, scale_sample, transpose_4x4};
use crate::trace::{self, Stage};

const ROUNDING: i64 = 1 << (DCT_CONST_BITS - 1);

#[inline]
fn narrow_wide(value: i64) -> TranLow {
    debug_assert!(
        TranLow::try_from(value).is_ok(),
        "intermediate {value} exceeds coefficient precision"
    );
    value as TranLow
}

#[inline]
fn round_shift_x4(v: i64x4) -> [TranLow; 4] {
    let shifted: i64x4 = (v + i64x4::splat(ROUNDING)) >> DCT_CONST_BITS as i32;
    shifted.to_array().map(narrow_wide)
}

/// Lane-parallel butterfly. Vector `k` of the input holds element `k` of
/// four independent length-4 signals; vector `k` of the output holds their
/// frequency `k`.
#[inline]
fn butterfly_x4(a: [i32x4; 4]) -> [[TranLow; 4]; 4] {
    let c8 = i32x4::splat(COSPI_8_64 as i32);
    let c16 = i32x4::splat(COSPI_16_64 as i32);
    let c24 = i32x4::splat(COSPI_24_64 as i32);

    let s0 = a[0] + a[3];
    let s1 = a[1] + a[2];
    let s2 = a[1] - a[2];
    let s3 = a[0] - a[3];

    let t0 = (s0 + s1).mul_widen(c16);
    let t1 = (s0 - s1).mul_widen(c16);
    let t2 = s2.mul_widen(c24) + s3.mul_widen(c8);
    let t3 = s3.mul_widen(c24) - s2.mul_widen(c8);

    [
        round_shift_x4(t0),
        round_shift_x4(t2),
        round_shift_x4(t1),
        round_shift_x4(t3),
    ]
}

fn flatten(rows: [[TranLow; 4]; 4]) -> [TranLow; BLOCK_LEN] {
    let mut out = [0; BLOCK_LEN];
    for (dst, row) in out.chunks_exact_mut(BLOCK_SIZE).zip(rows) {
        dst.copy_from_slice(&row);
    }
    out
}

/// Vector `i`, lane `j` takes `buf[j * 4 + i]`: one vector per column.
fn columns_to_vectors(buf: &[TranLow; BLOCK_LEN]) -> [i32x4; 4] {
    std::array::from_fn(|c| {
        i32x4::new([
            i32::from(buf[c]),
            i32::from(buf[BLOCK_SIZE + c]),
            i32::from(buf[2 * BLOCK_SIZE + c]),
            i32::from(buf[3 * BLOCK_SIZE + c]),
        ])
    })
}

fn transposed(buf: &[TranLow; BLOCK_LEN]) -> [TranLow; BLOCK_LEN] {
    let mut out = *buf;
    transpose_4x4(&mut out);
    out
}

/// Caller guarantees `stride >= 4` and `input.len() >= 3 * stride + 4`.
pub(crate) fn forward(input: &[i16], stride: usize) -> [TranLow; BLOCK_LEN] {
    let mut rows: [[i32; 4]; 4] = std::array::from_fn(|r| {
        std::array::from_fn(|c| scale_sample(input[r * stride + c]) as i32)
    });
    if rows[0][0] != 0 {
        rows[0][0] += 1;
    }
    // Traces use the scalar layout for every stage.
    let column_major: [TranHigh; BLOCK_LEN] =
        std::array::from_fn(|i| TranHigh::from(rows[i % BLOCK_SIZE][i / BLOCK_SIZE]));
    trace::emit(Backend::Simd, Stage::Load, &column_major);

    // Vector k, lane c: frequency k of input column c. Flattened, that is
    // the first-pass buffer already transposed.
    let columns = butterfly_x4(rows.map(i32x4::new));
    let transposed_pass = flatten(columns);
    trace::emit(Backend::Simd, Stage::FirstPass, &transposed(&transposed_pass));
    trace::emit(Backend::Simd, Stage::Transpose, &transposed_pass);

    // Vector i, lane j: frequency j of column i. The row pass runs across
    // vectors, leaving frequency m of row j in vector m, lane j.
    let spectra = butterfly_x4(columns_to_vectors(&transposed_pass));
    let mut out = flatten(spectra);
    transpose_4x4(&mut out);
    trace::emit(Backend::Simd, Stage::SecondPass, &out);

    for v in &mut out {
        *v = normalize(*v);
    }
    trace::emit(Backend::Simd, Stage::Normalize, &out);
    out
}
