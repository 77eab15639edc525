mod compiler_options;
mod es_target;
mod loader;

pub use crate::{compiler_options::CompilerOptions, es_target::EsTarget, loader::Loader};
