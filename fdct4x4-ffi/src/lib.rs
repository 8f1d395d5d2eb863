use std::os::raw::c_int;

use fdct4x4::{BLOCK_LEN, Backend, TranLow, window_len};

/// Forward 4x4 DCT of the window at `input` whose rows are `stride`
/// samples apart. Writes 16 row-major coefficients to `output`.
///
/// Returns 0 on success and -1 on a null pointer, a stride below 4, or a
/// stride whose window length overflows `usize`.
///
/// # Safety
///
/// `input` must be readable for `3 * stride + 4` samples and `output`
/// writable for 16 coefficients.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fdct4x4_fdct4x4(
    input: *const i16,
    output: *mut TranLow,
    stride: c_int,
) -> i32 {
    unsafe { run(Backend::default(), input, output, stride) }
}

/// Same as [`fdct4x4_fdct4x4`] but always on the scalar reference path.
///
/// # Safety
///
/// Same requirements as [`fdct4x4_fdct4x4`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fdct4x4_fdct4x4_scalar(
    input: *const i16,
    output: *mut TranLow,
    stride: c_int,
) -> i32 {
    unsafe { run(Backend::Scalar, input, output, stride) }
}

/// Size in bytes of one output coefficient (2, or 4 with `highbitdepth`).
#[unsafe(no_mangle)]
pub extern "C" fn fdct4x4_coeff_size() -> usize {
    std::mem::size_of::<TranLow>()
}

/// Validated stride and window length, or `None` for a stride the C
/// contract rejects or whose window does not fit in `usize`.
fn window_for(stride: c_int) -> Option<(usize, usize)> {
    let stride = usize::try_from(stride).ok()?;
    if stride < 4 {
        return None;
    }
    Some((stride, window_len(stride)?))
}

unsafe fn run(backend: Backend, input: *const i16, output: *mut TranLow, stride: c_int) -> i32 {
    if input.is_null() || output.is_null() {
        return -1;
    }
    let Some((stride, len)) = window_for(stride) else {
        return -1;
    };

    let input = unsafe { std::slice::from_raw_parts(input, len) };
    let output = unsafe { std::slice::from_raw_parts_mut(output, BLOCK_LEN) };

    match fdct4x4::fdct4x4_into_with(backend, input, stride, output) {
        Ok(()) => 0,
        Err(_) => -1,
    }
}
