mod plugin;
mod plugin_context;
mod plugin_driver;
mod types;

pub use crate::{
  plugin::Plugin,
  plugin_context::PluginContext,
  plugin_driver::PluginDriver,
  types::{
    HookOutput, HookRenderChunkArgs, HookRenderChunkReturn, HookTransformArgs, HookTransformReturn,
  },
};
