use std::str::FromStr;

use oxc::span::SourceType;

/// The dialect the compiler should assume when parsing a piece of source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loader {
  Js,
  Jsx,
  Ts,
  Tsx,
}

impl Loader {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Js => "js",
      Self::Jsx => "jsx",
      Self::Ts => "ts",
      Self::Tsx => "tsx",
    }
  }

  pub fn source_type(self) -> SourceType {
    let default = SourceType::default().with_module(true);
    match self {
      Self::Js => default,
      Self::Jsx => default.with_jsx(true),
      Self::Ts => default.with_typescript(true),
      Self::Tsx => default.with_typescript(true).with_jsx(true),
    }
  }
}

impl FromStr for Loader {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "js" => Ok(Self::Js),
      "jsx" => Ok(Self::Jsx),
      "ts" => Ok(Self::Ts),
      "tsx" => Ok(Self::Tsx),
      _ => Err(format!("Invalid loader \"{s}\".")),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::Loader;

  #[test]
  fn parses_known_loaders() {
    assert_eq!("ts".parse::<Loader>().unwrap(), Loader::Ts);
    assert_eq!("jsx".parse::<Loader>().unwrap(), Loader::Jsx);
    assert!("css".parse::<Loader>().is_err());
  }

  #[test]
  fn source_type_flags() {
    assert!(Loader::Ts.source_type().is_typescript());
    assert!(Loader::Tsx.source_type().is_jsx());
    assert!(!Loader::Js.source_type().is_typescript());
  }
}
