use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use weft_generator::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};

/// Settings read from `~/.weft/config.toml`.
///
/// ```toml
/// [generator]
/// endpoint = "http://localhost:3000/api/generate-workflow"
/// timeout_secs = 60
/// ```
///
/// Every key is optional. Command-line flags override anything set here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
  pub generator: GeneratorSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorSection {
  pub endpoint: String,
  pub timeout_secs: u64,
}

impl Default for GeneratorSection {
  fn default() -> Self {
    Self {
      endpoint: DEFAULT_ENDPOINT.to_string(),
      timeout_secs: DEFAULT_TIMEOUT.as_secs(),
    }
  }
}

impl Config {
  /// Parse a config file. The file must exist.
  pub fn load(path: &Path) -> Result<Self> {
    let content = std::fs::read_to_string(path)
      .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
      .with_context(|| format!("failed to parse config file: {}", path.display()))
  }

  /// Load `explicit` if given, otherwise the default file when it exists,
  /// otherwise built-in defaults.
  pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
    if let Some(path) = explicit {
      return Self::load(path);
    }
    match default_path() {
      Some(path) if path.is_file() => Self::load(&path),
      _ => Ok(Self::default()),
    }
  }
}

/// `~/.weft/config.toml`, when a home directory can be determined.
pub fn default_path() -> Option<PathBuf> {
  dirs::home_dir().map(|home| home.join(".weft").join("config.toml"))
}
