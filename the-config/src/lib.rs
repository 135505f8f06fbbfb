//! User configuration.
//!
//! Configuration is TOML. Every section is optional and an empty document is
//! the default configuration:
//!
//! ```toml
//! [plugins]
//! disabled = ["spell-check"]
//! ```

use std::{
  fs,
  io,
  path::{
    Path,
    PathBuf,
  },
};

use serde::{
  Deserialize,
  Serialize,
};
use the_plugin::{
  Plugin,
  PluginManager,
};
use thiserror::Error;

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file {}: {source}", .path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("invalid config: {0}")]
  Parse(#[from] toml::de::Error),
  #[error("failed to serialize config: {0}")]
  Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  pub plugins: PluginConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginConfig {
  /// Names of plugins that must not be registered.
  pub disabled: Vec<String>,
}

impl PluginConfig {
  pub fn is_enabled(&self, name: &str) -> bool {
    !self.disabled.iter().any(|disabled| disabled == name)
  }
}

impl Config {
  pub fn from_toml(text: &str) -> Result<Self> {
    Ok(toml::from_str(text)?)
  }

  /// Read configuration from `path`.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| {
      ConfigError::Io {
        path: path.to_path_buf(),
        source,
      }
    })?;
    let config = Self::from_toml(&text)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
  }

  /// Read configuration from `path`, falling back to the defaults when the
  /// file does not exist.
  pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
    match Self::load(path) {
      Err(ConfigError::Io { path, source }) if source.kind() == io::ErrorKind::NotFound => {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(Self::default())
      },
      result => result,
    }
  }

  pub fn to_toml(&self) -> Result<String> {
    Ok(toml::to_string(self)?)
  }
}

/// Build the plugin manager for this configuration.
///
/// Plugins named in `plugins.disabled` are skipped; the rest are registered
/// in order, with the usual duplicate-name rule.
pub fn build_plugin_manager<T, I>(config: &Config, plugins: I) -> PluginManager<T>
where
  T: ?Sized,
  I: IntoIterator<Item = Box<dyn Plugin<T>>>,
{
  let mut manager = PluginManager::new();
  for plugin in plugins {
    if !config.plugins.is_enabled(plugin.name()) {
      tracing::debug!(plugin = plugin.name(), "plugin disabled by config");
      continue;
    }
    manager.register_boxed(plugin);
  }
  manager
}
