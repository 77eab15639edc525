use fast_glob::glob_match;

/// Include/exclude glob pair deciding which module ids this plugin touches.
/// Exclude wins over include; an empty include list admits everything.
#[derive(Debug)]
pub struct EligibilityFilter {
  include: Vec<String>,
  exclude: Vec<String>,
}

impl EligibilityFilter {
  pub fn new(include: Vec<String>, exclude: Vec<String>) -> Self {
    Self { include, exclude }
  }

  pub fn matches(&self, id: &str) -> bool {
    let id = id.trim_start_matches("./");
    if self.exclude.iter().any(|pattern| glob_match(pattern, id)) {
      return false;
    }
    self.include.is_empty() || self.include.iter().any(|pattern| glob_match(pattern, id))
  }
}

#[cfg(test)]
mod tests {
  use super::EligibilityFilter;

  #[test]
  fn exclude_wins_over_include() {
    let filter = EligibilityFilter::new(
      vec!["**/*.ts".to_string()],
      vec!["**/node_modules/**".to_string()],
    );
    assert!(filter.matches("src/a.ts"));
    assert!(filter.matches("/project/src/a.ts"));
    assert!(!filter.matches("node_modules/pkg/a.ts"));
    assert!(!filter.matches("/project/node_modules/pkg/a.ts"));
  }

  #[test]
  fn empty_include_admits_everything() {
    let filter = EligibilityFilter::new(Vec::new(), vec!["**/dist/**".to_string()]);
    assert!(filter.matches("src/a.wasm"));
    assert!(!filter.matches("dist/a.js"));
  }

  #[test]
  fn relative_prefix_is_ignored() {
    let filter = EligibilityFilter::new(vec!["src/**".to_string()], Vec::new());
    assert!(filter.matches("./src/a.ts"));
    assert!(!filter.matches("./lib/a.ts"));
  }
}
