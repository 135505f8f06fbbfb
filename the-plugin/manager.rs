use std::fmt;

use thiserror::Error;

use crate::Plugin;

/// Result type for the fallible manager operations.
pub type Result<T> = std::result::Result<T, PluginError>;

/// Errors reported by [`PluginManager::try_register`] and
/// [`PluginManager::try_deregister`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PluginError {
  #[error("plugin '{name}' is already registered")]
  AlreadyRegistered { name: String },
  #[error("plugin '{name}' is not registered")]
  NotRegistered { name: String },
}

/// Ordered collection of plugins, unique by name.
///
/// Name lookups scan from the most recently registered plugin backwards, so if
/// two entries ever report the same name (a plugin may rename itself while
/// executing) the newest one is the one found, and the one removed.
pub struct PluginManager<T: ?Sized> {
  plugins: Vec<Box<dyn Plugin<T>>>,
}

impl<T: ?Sized> PluginManager<T> {
  pub fn new() -> Self {
    Self {
      plugins: Vec::new(),
    }
  }

  /// Number of registered plugins.
  pub fn len(&self) -> usize {
    self.plugins.len()
  }

  /// Whether no plugin is registered.
  pub fn is_empty(&self) -> bool {
    self.plugins.is_empty()
  }

  /// Names of the registered plugins, in registration order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.plugins.iter().map(|plugin| plugin.name())
  }

  /// Whether a plugin called `name` is registered.
  pub fn contains(&self, name: &str) -> bool {
    self.position(name).is_some()
  }

  /// The registered plugin called `name`.
  pub fn get(&self, name: &str) -> Option<&dyn Plugin<T>> {
    self.position(name).map(|index| self.plugins[index].as_ref())
  }

  /// Register a plugin unless one with the same name is already present.
  ///
  /// Returns `false` and drops `plugin` when the name is taken.
  pub fn register<P>(&mut self, plugin: P) -> bool
  where
    P: Plugin<T> + 'static,
  {
    self.register_boxed(Box::new(plugin))
  }

  /// [`PluginManager::register`] for an already boxed plugin.
  pub fn register_boxed(&mut self, plugin: Box<dyn Plugin<T>>) -> bool {
    match self.try_register_boxed(plugin) {
      Ok(()) => true,
      Err(err) => {
        tracing::debug!(%err, "skipping plugin registration");
        false
      },
    }
  }

  /// Register every plugin in `plugins`.
  ///
  /// Each plugin is handled on its own: duplicates are skipped, the rest are
  /// appended. Returns `true` only if every plugin was added.
  pub fn register_all<I>(&mut self, plugins: I) -> bool
  where
    I: IntoIterator<Item = Box<dyn Plugin<T>>>,
  {
    plugins
      .into_iter()
      .fold(true, |all, plugin| self.register_boxed(plugin) && all)
  }

  /// Like [`PluginManager::register`], but reports a taken name as an error.
  pub fn try_register<P>(&mut self, plugin: P) -> Result<()>
  where
    P: Plugin<T> + 'static,
  {
    self.try_register_boxed(Box::new(plugin))
  }

  /// [`PluginManager::try_register`] for an already boxed plugin.
  pub fn try_register_boxed(&mut self, plugin: Box<dyn Plugin<T>>) -> Result<()> {
    if self.contains(plugin.name()) {
      return Err(PluginError::AlreadyRegistered {
        name: plugin.name().to_string(),
      });
    }

    tracing::debug!(plugin = plugin.name(), "registered plugin");
    self.plugins.push(plugin);
    Ok(())
  }

  /// Remove the plugin called `name`, returning whether one was removed.
  pub fn deregister(&mut self, name: &str) -> bool {
    self.take(name).is_some()
  }

  /// Remove the registered plugin that shares `plugin`'s name.
  ///
  /// `plugin` itself does not need to be the registered value.
  pub fn deregister_plugin<P>(&mut self, plugin: &P) -> bool
  where
    P: Plugin<T> + ?Sized,
  {
    self.deregister(plugin.name())
  }

  /// Remove every named plugin. Returns `true` only if each name matched.
  ///
  /// To remove by plugin value, pass `plugin.name()`; names and values can be
  /// mixed in the same call that way.
  pub fn deregister_all<'a, I>(&mut self, names: I) -> bool
  where
    I: IntoIterator<Item = &'a str>,
  {
    names
      .into_iter()
      .fold(true, |all, name| self.deregister(name) && all)
  }

  pub fn try_deregister(&mut self, name: &str) -> Result<Box<dyn Plugin<T>>> {
    self.take(name).ok_or_else(|| {
      PluginError::NotRegistered {
        name: name.to_string(),
      }
    })
  }

  /// Remove and return the plugin called `name`.
  pub fn take(&mut self, name: &str) -> Option<Box<dyn Plugin<T>>> {
    let Some(index) = self.position(name) else {
      tracing::debug!(plugin = name, "no plugin to deregister");
      return None;
    };

    let plugin = self.plugins.remove(index);
    tracing::debug!(plugin = name, index, "deregistered plugin");
    Some(plugin)
  }

  /// Run every plugin against `args`, in registration order.
  ///
  /// A panicking plugin is not contained: the remaining plugins do not run
  /// and the panic reaches the caller.
  pub fn execute(&mut self, args: &mut T) {
    for plugin in &mut self.plugins {
      tracing::trace!(plugin = plugin.name(), "executing plugin");
      plugin.execute(args);
    }
  }

  fn position(&self, name: &str) -> Option<usize> {
    self.plugins.iter().rposition(|plugin| plugin.name() == name)
  }
}

impl<T: ?Sized> Default for PluginManager<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: ?Sized> fmt::Debug for PluginManager<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PluginManager")
      .field("plugins", &self.names().collect::<Vec<_>>())
      .finish()
  }
}
