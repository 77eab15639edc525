use memchr::{memchr_iter, memrchr};
use oxc::diagnostics::OxcDiagnostic;

/// Non-fatal diagnostic reported by the compiler for one file.
#[derive(Debug, Clone)]
pub struct TransformWarning {
  pub text: String,
  pub location: Option<WarningLocation>,
}

/// 1-based position of a warning within its source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarningLocation {
  pub line: u32,
  pub column: u32,
}

impl TransformWarning {
  pub fn from_diagnostic(diagnostic: &OxcDiagnostic, source: &str) -> Self {
    let location =
      diagnostic.labels.as_ref().and_then(|labels| labels.first()).map(|label| {
        let (line, column) = line_col(source, label.offset());
        WarningLocation { line, column }
      });

    Self { text: diagnostic.message.to_string(), location }
  }
}

/// Maps a byte offset to its 1-based line and column.
fn line_col(source: &str, offset: usize) -> (u32, u32) {
  let offset = offset.min(source.len());
  let head = &source.as_bytes()[..offset];

  let line = memchr_iter(b'\n', head).count() + 1;
  let column = offset - memrchr(b'\n', head).map_or(0, |pos| pos + 1) + 1;

  (
    u32::try_from(line).unwrap_or(u32::MAX),
    u32::try_from(column).unwrap_or(u32::MAX),
  )
}
