use std::{ffi::OsStr, path::Path};

use oxpack_common::Loader;
use rustc_hash::FxHashMap;

/// Built-in extension table. Keys carry the leading dot, matching how
/// extensions are written in user configuration.
pub const DEFAULT_LOADERS: &[(&str, Loader)] = &[
  (".js", Loader::Js),
  (".mjs", Loader::Js),
  (".cjs", Loader::Js),
  (".ts", Loader::Ts),
  (".mts", Loader::Ts),
  (".cts", Loader::Ts),
  (".tsx", Loader::Tsx),
  (".jsx", Loader::Jsx),
];

/// Overlays user overrides onto the built-in table. A `Some` value sets or
/// replaces the extension's loader, a `None` value removes the extension.
pub fn build_loader_table(overrides: &[(String, Option<Loader>)]) -> FxHashMap<String, Loader> {
  let mut table: FxHashMap<String, Loader> =
    DEFAULT_LOADERS.iter().map(|(extension, loader)| ((*extension).to_string(), *loader)).collect();

  for (extension, loader) in overrides {
    match loader {
      Some(loader) => {
        table.insert(extension.clone(), *loader);
      }
      None => {
        table.remove(extension);
      }
    }
  }

  table
}

/// Default include patterns are derived from the built-in extensions, not the
/// effective table, so user-added extensions still need an explicit include.
pub fn default_include_patterns() -> Vec<String> {
  DEFAULT_LOADERS.iter().map(|(extension, _)| format!("**/*{extension}")).collect()
}

/// The id's extension with its leading dot, e.g. `".ts"` for `"src/a.d.ts"`.
pub fn extension_of(id: &str) -> Option<String> {
  Path::new(id).extension().and_then(OsStr::to_str).map(|extension| format!(".{extension}"))
}

#[cfg(test)]
mod tests {
  use oxpack_common::Loader;

  use super::{build_loader_table, extension_of};

  #[test]
  fn overrides_replace_and_remove() {
    let table = build_loader_table(&[
      (".mjs".to_string(), Some(Loader::Ts)),
      (".jsx".to_string(), None),
    ]);
    assert_eq!(table.get(".mjs"), Some(&Loader::Ts));
    assert_eq!(table.get(".jsx"), None);
    assert_eq!(table.get(".ts"), Some(&Loader::Ts));
  }

  #[test]
  fn later_override_wins() {
    let table = build_loader_table(&[
      (".svelte".to_string(), Some(Loader::Js)),
      (".svelte".to_string(), Some(Loader::Ts)),
    ]);
    assert_eq!(table.get(".svelte"), Some(&Loader::Ts));
  }

  #[test]
  fn extension_includes_the_dot() {
    assert_eq!(extension_of("src/a.ts").as_deref(), Some(".ts"));
    assert_eq!(extension_of("types.d.ts").as_deref(), Some(".ts"));
    assert_eq!(extension_of("Makefile"), None);
  }
}
