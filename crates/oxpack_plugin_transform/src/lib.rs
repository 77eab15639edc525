mod filter;
mod loaders;

use std::{borrow::Cow, path::Path};

use oxpack_common::{CompilerOptions, Loader};
use oxpack_ecmascript::{EcmaCompiler, TransformWarning};
use oxpack_plugin::{
  HookOutput, HookRenderChunkArgs, HookRenderChunkReturn, HookTransformArgs, HookTransformReturn,
  Plugin, PluginContext,
};
use rustc_hash::FxHashMap;
use sugar_path::SugarPath;

use crate::filter::EligibilityFilter;

pub use crate::loaders::DEFAULT_LOADERS;

const WARNING_TAG: &str = "[oxpack]";

/// Chunk names produced by declaration emit must never be minified or
/// re-parsed as scripts.
const DECLARATION_SUFFIXES: &[&str] =
  &[".d.ts", ".d.cts", ".d.mts", ".d.tsx", ".d.ctsx", ".d.mtsx"];

#[derive(Debug, Default)]
pub struct TransformPluginOptions {
  /// Globs selecting eligible ids. Empty means the built-in loader
  /// extensions.
  pub include: Vec<String>,
  /// Globs excluding ids even when included. Empty means `node_modules`.
  pub exclude: Vec<String>,
  /// Per-extension loader overrides, applied in order over the built-in
  /// table. `None` disables the extension.
  pub loaders: Vec<(String, Option<Loader>)>,
  /// Forwarded verbatim to the compiler on every call.
  pub compiler: CompilerOptions,
}

/// Delegates per-module transformation and per-chunk minification to the oxc
/// compiler. Construction resolves the effective loader table and eligibility
/// filter once; hook calls share that immutable state and nothing else.
#[derive(Debug)]
pub struct TransformPlugin {
  filter: EligibilityFilter,
  loaders: FxHashMap<String, Loader>,
  compiler: CompilerOptions,
}

impl TransformPlugin {
  pub fn new(options: TransformPluginOptions) -> Self {
    let loaders = loaders::build_loader_table(&options.loaders);

    let include = if options.include.is_empty() {
      loaders::default_include_patterns()
    } else {
      options.include
    };
    let exclude = if options.exclude.is_empty() {
      vec!["**/node_modules/**".to_string()]
    } else {
      options.exclude
    };

    Self { filter: EligibilityFilter::new(include, exclude), loaders, compiler: options.compiler }
  }

  fn loader_of(&self, id: &str) -> Option<Loader> {
    loaders::extension_of(id).and_then(|extension| self.loaders.get(&extension).copied())
  }

  fn relay_warnings(&self, ctx: &PluginContext, id: &str, warnings: &[TransformWarning]) {
    for warning in warnings {
      let mut message = String::from(WARNING_TAG);
      if let Some(location) = &warning.location {
        let relative = Path::new(id).relative(ctx.cwd());
        message
          .push_str(&format!(" ({}:{}:{})", relative.display(), location.line, location.column));
      }
      message.push_str(&format!(" {}", warning.text));
      ctx.warn(message);
    }
  }
}

fn is_declaration_file(filename: &str) -> bool {
  DECLARATION_SUFFIXES.iter().any(|suffix| filename.ends_with(suffix))
}

#[async_trait::async_trait]
impl Plugin for TransformPlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed("oxpack:transform")
  }

  async fn transform(
    &self,
    ctx: &PluginContext,
    args: &HookTransformArgs<'_>,
  ) -> HookTransformReturn {
    if !self.filter.matches(args.id) {
      return Ok(None);
    }
    let Some(loader) = self.loader_of(args.id) else {
      return Ok(None);
    };

    let ret = EcmaCompiler::transform(args.code, Path::new(args.id), loader, &self.compiler)?;
    self.relay_warnings(ctx, args.id, &ret.warnings);

    Ok(Some(HookOutput { code: ret.code, map: ret.map }))
  }

  async fn render_chunk(
    &self,
    _ctx: &PluginContext,
    args: &HookRenderChunkArgs<'_>,
  ) -> HookRenderChunkReturn {
    if !self.compiler.minify {
      return Ok(None);
    }
    if is_declaration_file(args.filename) {
      return Ok(None);
    }
    let Some(loader) = self.loader_of(args.filename) else {
      return Ok(None);
    };

    // Minify is forced on for rendered chunks even though the gate above
    // already required it.
    let options = CompilerOptions { minify: true, ..self.compiler.clone() };
    let ret = EcmaCompiler::transform(args.code, Path::new(args.filename), loader, &options)?;

    // Chunk-level compiler warnings are intentionally dropped; only the
    // per-module transform relays them.
    Ok(Some(HookOutput { code: ret.code, map: ret.map }))
  }
}
