mod ecma_compiler;
mod warning;

pub use crate::{
  ecma_compiler::{EcmaCompiler, TransformReturn},
  warning::{TransformWarning, WarningLocation},
};
