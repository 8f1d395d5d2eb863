use std::fmt;
use std::str::FromStr;

use crate::consts::BLOCK_SIZE;
use crate::error::{Result, TransformError};
use crate::{Coefficients, fdct};

/// Which implementation computes the transform. All of them produce the
/// same coefficients for the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Scalar,
    #[cfg(feature = "simd")]
    Simd,
}

impl Backend {
    /// Every backend compiled into this build, reference first.
    pub const ALL: &'static [Backend] = &[
        Backend::Scalar,
        #[cfg(feature = "simd")]
        Backend::Simd,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Backend::Scalar => "scalar",
            #[cfg(feature = "simd")]
            Backend::Simd => "simd",
        }
    }

    /// Transforms the 4x4 window at the start of `input`, whose rows are
    /// `stride` samples apart.
    pub fn transform(self, input: &[i16], stride: usize) -> Result<Coefficients> {
        check_window(input.len(), stride)?;
        Ok(self.transform_unchecked(input, stride))
    }

    pub(crate) fn transform_unchecked(self, input: &[i16], stride: usize) -> Coefficients {
        match self {
            Backend::Scalar => fdct::forward(input, stride),
            #[cfg(feature = "simd")]
            Backend::Simd => crate::simd::forward(input, stride),
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        #[cfg(feature = "simd")]
        {
            Backend::Simd
        }
        #[cfg(not(feature = "simd"))]
        {
            Backend::Scalar
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Backend::default()),
            "scalar" | "reference" => Ok(Backend::Scalar),
            #[cfg(feature = "simd")]
            "simd" => Ok(Backend::Simd),
            _ => Err(TransformError::UnknownBackend {
                name: s.to_string(),
            }),
        }
    }
}

/// Number of samples a window with this stride spans, or `None` when that
/// does not fit in `usize`.
pub fn window_len(stride: usize) -> Option<usize> {
    stride
        .checked_mul(BLOCK_SIZE - 1)
        .and_then(|n| n.checked_add(BLOCK_SIZE))
}

pub(crate) fn check_window(len: usize, stride: usize) -> Result<()> {
    if stride < BLOCK_SIZE {
        return Err(TransformError::InvalidStride { stride });
    }
    let needed = window_len(stride).ok_or(TransformError::InvalidStride { stride })?;
    if len < needed {
        return Err(TransformError::InputTooShort { needed, len });
    }
    Ok(())
}
