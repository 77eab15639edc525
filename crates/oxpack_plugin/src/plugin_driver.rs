use std::sync::Arc;

use oxc_sourcemap::SourceMap;
use oxpack_error::BuildResult;

use crate::{
  plugin::Plugin,
  plugin_context::PluginContext,
  types::{HookRenderChunkArgs, HookTransformArgs},
};

/// Runs the registered plugins over a piece of source or a rendered chunk,
/// feeding each plugin's output into the next. A plugin returning `None`
/// leaves the current code untouched.
pub struct PluginDriver {
  plugins: Vec<Arc<dyn Plugin>>,
  ctx: Arc<PluginContext>,
}

impl PluginDriver {
  pub fn new(plugins: Vec<Arc<dyn Plugin>>, ctx: Arc<PluginContext>) -> Self {
    Self { plugins, ctx }
  }

  pub fn context(&self) -> &PluginContext {
    &self.ctx
  }

  pub async fn transform(
    &self,
    id: &str,
    mut code: String,
  ) -> BuildResult<(String, Option<SourceMap>)> {
    let mut map = None;
    for plugin in &self.plugins {
      let args = HookTransformArgs { id, code: &code };
      if let Some(output) = plugin.transform(&self.ctx, &args).await? {
        code = output.code;
        map = output.map;
      }
    }
    Ok((code, map))
  }

  pub async fn render_chunk(
    &self,
    filename: &str,
    mut code: String,
  ) -> BuildResult<(String, Option<SourceMap>)> {
    let mut map = None;
    for plugin in &self.plugins {
      let args = HookRenderChunkArgs { code: &code, filename };
      if let Some(output) = plugin.render_chunk(&self.ctx, &args).await? {
        code = output.code;
        map = output.map;
      }
    }
    Ok((code, map))
  }
}
