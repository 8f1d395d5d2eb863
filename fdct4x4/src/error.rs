use thiserror::Error;

pub type Result<T> = std::result::Result<T, TransformError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TransformError {
    #[error("invalid stride {stride}: a 4x4 window needs a row stride of at least 4")]
    InvalidStride { stride: usize },

    #[error("input too short: a 4x4 window needs {needed} samples, got {len}")]
    InputTooShort { needed: usize, len: usize },

    #[error("output too short: need room for {needed} coefficients, got {len}")]
    OutputTooShort { needed: usize, len: usize },

    #[error("unknown or unavailable backend {name:?}")]
    UnknownBackend { name: String },
}
