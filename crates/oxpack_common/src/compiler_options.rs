use crate::EsTarget;

/// Option bag handed to the compiler on every call.
///
/// Plugins capture one of these at construction time and forward it verbatim
/// for each file, so a single configuration drives the whole session.
#[derive(Debug, Clone, Default)]
pub struct CompilerOptions {
  pub target: EsTarget,
  pub minify: bool,
  pub sourcemap: bool,
  /// Preserve function and class names when minifying.
  pub keep_names: bool,
}
