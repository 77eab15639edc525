use std::path::Path;

use oxc::{
  allocator::Allocator,
  codegen::{Codegen, CodegenOptions},
  diagnostics::Severity,
  minifier::{CompressOptions, CompressOptionsKeepNames, MangleOptions, Minifier, MinifierOptions},
  parser::Parser,
  semantic::SemanticBuilder,
  transformer::{ESTarget, TransformOptions, Transformer},
};
use oxc_sourcemap::SourceMap;
use oxpack_common::{CompilerOptions, Loader};
use oxpack_error::BuildResult;

use crate::warning::TransformWarning;

pub struct TransformReturn {
  pub code: String,
  pub map: Option<SourceMap>,
  pub warnings: Vec<TransformWarning>,
}

pub struct EcmaCompiler;

impl EcmaCompiler {
  /// Parses `source` as the given loader dialect, lowers it to the configured
  /// target (stripping TypeScript and transforming JSX on the way), minifies
  /// when asked to, and prints the result.
  ///
  /// Parse and transform errors are fatal. Warning-severity diagnostics are
  /// collected and returned alongside the output.
  pub fn transform(
    source: &str,
    sourcefile: &Path,
    loader: Loader,
    options: &CompilerOptions,
  ) -> BuildResult<TransformReturn> {
    let allocator = Allocator::default();

    let ret = Parser::new(&allocator, source, loader.source_type()).parse();
    if !ret.errors.is_empty() {
      return Err(
        ret
          .errors
          .iter()
          .map(|error| anyhow::anyhow!("Parse failed in {}: {}", sourcefile.display(), error.message))
          .collect::<Vec<anyhow::Error>>(),
      )?;
    }
    let mut program = ret.program;

    let semantic_ret = SemanticBuilder::new().build(&program);
    if !semantic_ret.errors.is_empty() {
      return Err(
        semantic_ret
          .errors
          .iter()
          .map(|error| anyhow::anyhow!("Parse failed in {}: {}", sourcefile.display(), error.message))
          .collect::<Vec<anyhow::Error>>(),
      )?;
    }
    let scoping = semantic_ret.semantic.into_scoping();

    let target: ESTarget = options.target.into();
    let transform_options = TransformOptions::from(target);
    let transformer_ret = Transformer::new(&allocator, sourcefile, &transform_options)
      .build_with_scoping(scoping, &mut program);

    let mut warnings = Vec::new();
    let mut errors = Vec::new();
    for diagnostic in &transformer_ret.errors {
      if matches!(diagnostic.severity, Severity::Error) {
        errors.push(anyhow::anyhow!(
          "Transform failed in {}: {}",
          sourcefile.display(),
          diagnostic.message
        ));
      } else {
        warnings.push(TransformWarning::from_diagnostic(diagnostic, source));
      }
    }
    if !errors.is_empty() {
      return Err(errors)?;
    }

    let scoping = if options.minify {
      let ret = Minifier::new(MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions {
          target,
          drop_debugger: false,
          drop_console: false,
          keep_names: CompressOptionsKeepNames {
            function: options.keep_names,
            class: options.keep_names,
          },
        }),
      })
      .build(&allocator, &mut program);
      ret.scoping
    } else {
      None
    };

    let ret = Codegen::new()
      .with_options(CodegenOptions {
        minify: options.minify,
        source_map_path: options.sourcemap.then(|| sourcefile.to_path_buf()),
        ..CodegenOptions::default()
      })
      .with_scoping(scoping)
      .build(&program);

    Ok(TransformReturn { code: ret.code, map: ret.map, warnings })
  }
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use oxpack_common::{CompilerOptions, Loader};

  use super::EcmaCompiler;

  #[test]
  fn strips_type_annotations() {
    let ret = EcmaCompiler::transform(
      "const x: number = 1;",
      Path::new("foo.ts"),
      Loader::Ts,
      &CompilerOptions::default(),
    )
    .unwrap();
    assert_eq!(ret.code, "const x = 1;\n");
    assert!(ret.map.is_none());
  }

  #[test]
  fn minifies_when_asked() {
    let options = CompilerOptions { minify: true, ..CompilerOptions::default() };
    let ret = EcmaCompiler::transform(
      "const answer = 40 + 2;\nconsole.log(answer);\n",
      Path::new("foo.js"),
      Loader::Js,
      &options,
    )
    .unwrap();
    assert!(ret.code.contains("console.log"));
    assert!(!ret.code.contains("answer = 40 + 2"));
  }

  #[test]
  fn emits_a_source_map_when_asked() {
    let options = CompilerOptions { sourcemap: true, ..CompilerOptions::default() };
    let ret = EcmaCompiler::transform(
      "const x: number = 1;",
      Path::new("foo.ts"),
      Loader::Ts,
      &options,
    )
    .unwrap();
    assert!(ret.map.is_some());
  }

  #[test]
  fn propagates_parse_errors() {
    let ret = EcmaCompiler::transform(
      "const const = 1;",
      Path::new("broken.js"),
      Loader::Js,
      &CompilerOptions::default(),
    );
    assert!(ret.is_err());
  }

  #[test]
  fn typescript_source_rejected_by_js_loader() {
    let ret = EcmaCompiler::transform(
      "const x: number = 1;",
      Path::new("foo.js"),
      Loader::Js,
      &CompilerOptions::default(),
    );
    assert!(ret.is_err());
  }
}
