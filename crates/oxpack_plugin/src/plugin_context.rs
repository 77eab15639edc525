use std::{
  path::{Path, PathBuf},
  sync::Mutex,
};

/// Host-side state handed to every hook invocation.
///
/// Warnings are advisory and never abort a build; the host drains them with
/// [`PluginContext::take_warnings`] after each stage and decides how to
/// present them.
#[derive(Debug)]
pub struct PluginContext {
  cwd: PathBuf,
  warnings: Mutex<Vec<String>>,
}

impl PluginContext {
  pub fn new(cwd: PathBuf) -> Self {
    Self { cwd, warnings: Mutex::new(Vec::new()) }
  }

  pub fn cwd(&self) -> &Path {
    &self.cwd
  }

  pub fn warn(&self, message: impl Into<String>) {
    if let Ok(mut warnings) = self.warnings.lock() {
      warnings.push(message.into());
    }
  }

  pub fn take_warnings(&self) -> Vec<String> {
    self.warnings.lock().map(|mut warnings| std::mem::take(&mut *warnings)).unwrap_or_default()
  }
}

impl Default for PluginContext {
  fn default() -> Self {
    Self::new(std::env::current_dir().unwrap_or_default())
  }
}

#[cfg(test)]
mod tests {
  use super::PluginContext;

  #[test]
  fn take_warnings_drains() {
    let ctx = PluginContext::default();
    ctx.warn("first");
    ctx.warn(String::from("second"));
    assert_eq!(ctx.take_warnings(), vec!["first".to_string(), "second".to_string()]);
    assert!(ctx.take_warnings().is_empty());
  }
}
