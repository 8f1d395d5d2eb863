use fdct4x4::{Backend, MAX_RESIDUAL, fdct4x4, fdct4x4_block, fdct4x4_with};

fn coeffs_i32(input: &[i16], stride: usize) -> [i32; 16] {
    fdct4x4(input, stride).unwrap().map(i32::from)
}

fn transposed<T: Copy>(block: &[T; 16]) -> [T; 16] {
    std::array::from_fn(|i| block[(i % 4) * 4 + i / 4])
}

/// Orthonormal 2-D DCT-II in double precision.
fn float_dct(block: &[i16; 16]) -> [f64; 16] {
    use std::f64::consts::{FRAC_1_SQRT_2, PI};
    let mut out = [0.0; 16];
    for u in 0..4 {
        for v in 0..4 {
            let mut sum = 0.0;
            for y in 0..4 {
                for x in 0..4 {
                    sum += f64::from(block[y * 4 + x])
                        * ((2 * y + 1) as f64 * u as f64 * PI / 8.0).cos()
                        * ((2 * x + 1) as f64 * v as f64 * PI / 8.0).cos();
                }
            }
            let cu = if u == 0 { FRAC_1_SQRT_2 } else { 1.0 };
            let cv = if v == 0 { FRAC_1_SQRT_2 } else { 1.0 };
            out[u * 4 + v] = sum * cu * cv / 2.0;
        }
    }
    out
}

#[test]
fn ramp_block_golden() {
    let block: [i16; 16] = std::array::from_fn(|i| i as i16 + 1);
    assert_eq!(
        coeffs_i32(&block, 4),
        [272, -36, 0, -3, -143, 0, 0, 0, 0, 0, 0, 0, -10, 0, 0, 0]
    );
}

#[test]
fn mixed_residual_golden() {
    let block: [i16; 16] = [3, -7, 12, 0, 5, 5, -2, 9, -1, 0, 4, 8, 6, -3, 2, 1];
    assert_eq!(
        coeffs_i32(&block, 4),
        [84, -36, 40, 49, 12, -13, -17, 32, -28, 26, -16, 93, -14, -44, -32, 49]
    );
}

#[test]
fn full_scale_checkerboard_golden() {
    let block: [i16; 16] =
        std::array::from_fn(|i| if (i / 4 + i % 4) % 2 == 0 { 255 } else { -255 });
    assert_eq!(
        coeffs_i32(&block, 4),
        [0, 0, 0, 0, 0, 1195, 0, 2885, 0, 0, 0, 0, 0, 2885, 0, 6965]
    );
}

#[cfg(feature = "highbitdepth")]
#[test]
fn twelve_bit_golden() {
    assert_eq!(
        coeffs_i32(&[4095; 16], 4),
        [131035, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
    );
    let ramp: [i16; 16] = std::array::from_fn(|i| i as i16 * 256 - 2048);
    assert_eq!(
        coeffs_i32(&ramp, 4),
        [-4096, -9136, 0, -649, -36543, 0, 0, 0, 0, 0, 0, 0, -2597, 0, 0, 0]
    );
}

#[test]
fn all_zero_input_gives_all_zero_output() {
    for &backend in Backend::ALL {
        assert_eq!(fdct4x4_with(backend, &[0; 16], 4).unwrap().map(i32::from), [0; 16]);
    }
}

#[test]
fn constant_block_compacts_into_dc() {
    for k in -MAX_RESIDUAL..=MAX_RESIDUAL {
        let coeffs = coeffs_i32(&[k; 16], 4);
        // Gain is 32 up to the rounding of the cosine table.
        assert_eq!(coeffs[0].signum(), i32::from(k).signum(), "dc for {k}");
        assert!((coeffs[0] - i32::from(k) * 32).abs() <= 8, "dc for {k}: {}", coeffs[0]);
        for (i, &c) in coeffs.iter().enumerate().skip(1) {
            assert_eq!(c, 0, "AC coefficient {i} for constant {k}");
        }
    }
}

#[test]
fn sub_window_of_wide_plane_matches_packed_block() {
    let mut plane = [0i16; 16 * 8];
    for (i, v) in plane.iter_mut().enumerate() {
        *v = ((i * 37 + 11) % 200) as i16 - 100;
    }
    for (row, col) in [(0, 0), (2, 5), (4, 12)] {
        let start = row * 16 + col;
        let packed: [i16; 16] = std::array::from_fn(|i| plane[start + (i / 4) * 16 + i % 4]);
        for &backend in Backend::ALL {
            assert_eq!(
                fdct4x4_with(backend, &plane[start..], 16).unwrap(),
                fdct4x4_block(&packed),
                "window at ({row}, {col}) on {backend}"
            );
        }
    }
}

#[test]
fn stride_padding_is_never_read() {
    let block: [i16; 16] = std::array::from_fn(|i| (i as i16 * 7) % 23 - 11);
    let mut a = [0i16; 8 * 4];
    let mut b = [0i16; 8 * 4];
    for r in 0..4 {
        a[r * 8..r * 8 + 4].copy_from_slice(&block[r * 4..r * 4 + 4]);
        b[r * 8..r * 8 + 4].copy_from_slice(&block[r * 4..r * 4 + 4]);
        b[r * 8 + 4..r * 8 + 8].fill(MAX_RESIDUAL);
    }
    assert_eq!(fdct4x4(&a, 8).unwrap(), fdct4x4(&b, 8).unwrap());
    assert_eq!(fdct4x4(&a, 8).unwrap(), fdct4x4_block(&block));
}

#[test]
fn transposed_input_gives_transposed_output() {
    // Columns are rounded before rows, so swapping the axes can move a
    // coefficient by one step but never more.
    let mut seed = 7u32;
    for _ in 0..2000 {
        let block: [i16; 16] = std::array::from_fn(|_| {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            ((seed >> 16) % 511) as i16 - 255
        });
        let direct = transposed(&coeffs_i32(&block, 4));
        let swapped = coeffs_i32(&transposed(&block), 4);
        for i in 0..16 {
            assert!(
                (direct[i] - swapped[i]).abs() <= 1,
                "coefficient {i}: {} vs {} for {block:?}",
                direct[i],
                swapped[i]
            );
        }
    }
}

#[test]
fn symmetric_input_gives_symmetric_output() {
    let block: [i16; 16] = std::array::from_fn(|i| {
        let (r, c) = (i / 4, i % 4);
        (r * c + r + c) as i16 * 9 - 40
    });
    let coeffs = coeffs_i32(&block, 4);
    assert_eq!(coeffs, transposed(&coeffs));
    assert_eq!(
        coeffs,
        [232, -803, 0, -57, -803, 358, 0, 25, 0, 0, 0, 0, -57, 25, 0, 2]
    );
}

#[test]
fn agrees_with_floating_point_dct() {
    // Output is eight times the orthonormal DCT.
    let mut seed = 99u32;
    for _ in 0..2000 {
        let block: [i16; 16] = std::array::from_fn(|_| {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            ((seed >> 16) % 511) as i16 - 255
        });
        let fixed = coeffs_i32(&block, 4);
        let float = float_dct(&block);
        for i in 0..16 {
            let expected = (8.0 * float[i]).round() as i32;
            assert!(
                (fixed[i] - expected).abs() <= 1,
                "coefficient {i}: fixed {} float {} for {block:?}",
                fixed[i],
                8.0 * float[i]
            );
        }
    }
}
