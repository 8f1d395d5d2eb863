//! Diagnostic hook for the transform pipeline.
//!
//! With the `trace` feature every stage reports its buffer as a
//! `tracing` event at `TRACE` level under the `fdct4x4` target. Without the
//! feature the hook is an empty inline function and disappears.

use std::fmt;

use crate::backend::Backend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    FirstPass,
    Transpose,
    SecondPass,
    Normalize,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Load => "load",
            Stage::FirstPass => "first_pass",
            Stage::Transpose => "transpose",
            Stage::SecondPass => "second_pass",
            Stage::Normalize => "normalize",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "trace")]
#[inline(never)]
pub(crate) fn emit<T: fmt::Debug>(backend: Backend, stage: Stage, values: &[T]) {
    tracing::trace!(
        target: "fdct4x4",
        backend = %backend,
        stage = stage.name(),
        values = ?values,
    );
}

#[cfg(not(feature = "trace"))]
#[inline(always)]
pub(crate) fn emit<T: fmt::Debug>(_backend: Backend, _stage: Stage, _values: &[T]) {}
