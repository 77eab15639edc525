use std::fmt;
use std::ops::{Deref, DerefMut};

/// Aggregate of every failure produced while processing one file or chunk.
/// Hooks bail with all collected diagnostics instead of only the first one.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  pub fn into_inner(self) -> Vec<anyhow::Error> {
    self.0
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl IntoIterator for BuildError {
  type Item = anyhow::Error;
  type IntoIter = std::vec::IntoIter<anyhow::Error>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;
