use oxc_sourcemap::SourceMap;
use oxpack_error::BuildResult;

/// Arguments for the per-module transform hook. `id` is the module's resolved
/// path-like identifier.
#[derive(Debug)]
pub struct HookTransformArgs<'a> {
  pub id: &'a str,
  pub code: &'a str,
}

/// Arguments for the chunk render hook, invoked once per emitted chunk.
#[derive(Debug)]
pub struct HookRenderChunkArgs<'a> {
  pub code: &'a str,
  pub filename: &'a str,
}

/// Replacement code produced by a hook. `None` from a hook means the input is
/// passed through unchanged.
pub struct HookOutput {
  pub code: String,
  pub map: Option<SourceMap>,
}

pub type HookTransformReturn = BuildResult<Option<HookOutput>>;
pub type HookRenderChunkReturn = BuildResult<Option<HookOutput>>;
