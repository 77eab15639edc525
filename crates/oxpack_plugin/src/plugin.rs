use std::{borrow::Cow, fmt::Debug};

use crate::{
  plugin_context::PluginContext,
  types::{HookRenderChunkArgs, HookRenderChunkReturn, HookTransformArgs, HookTransformReturn},
};

#[async_trait::async_trait]
pub trait Plugin: Debug + Send + Sync {
  fn name(&self) -> Cow<'static, str>;

  async fn transform(
    &self,
    _ctx: &PluginContext,
    _args: &HookTransformArgs<'_>,
  ) -> HookTransformReturn {
    Ok(None)
  }

  async fn render_chunk(
    &self,
    _ctx: &PluginContext,
    _args: &HookRenderChunkArgs<'_>,
  ) -> HookRenderChunkReturn {
    Ok(None)
  }
}
