//! # the-plugin
//!
//! Named units of behavior that run side by side against shared input.
//!
//! ## Core Concepts
//!
//! - **Plugin**: anything with a stable [`Plugin::name`] and an
//!   [`Plugin::execute`] hook over `&mut T`
//! - **Manager**: [`PluginManager`] keeps plugins unique by name and runs all of
//!   them, in registration order, against the same arguments
//! - **Identity by name**: two different values that report the same name are
//!   the same plugin as far as the manager is concerned
//!
//! Plugins are not isolated from each other: whatever one of them writes into
//! the arguments is what the next one sees.
//!
//! ```rust
//! use the_plugin::{
//!   FnPlugin,
//!   PluginManager,
//! };
//!
//! struct Data {
//!   prop: i32,
//! }
//!
//! let mut manager = PluginManager::<Data>::new();
//! assert!(manager.register(FnPlugin::new("add one", |data: &mut Data| data.prop += 1)));
//! assert!(manager.register(FnPlugin::new("add two", |data: &mut Data| data.prop += 2)));
//! assert!(!manager.register(FnPlugin::new("add one", |data: &mut Data| data.prop += 100)));
//!
//! let mut data = Data { prop: 0 };
//! manager.execute(&mut data);
//! assert_eq!(data.prop, 3);
//! ```
//!
//! ## Variadic Arguments
//!
//! `T` may be unsized, so a plugin that takes "any number of arguments" is a
//! plugin over a slice:
//!
//! ```rust
//! use the_plugin::{
//!   FnPlugin,
//!   PluginManager,
//! };
//!
//! let mut manager = PluginManager::<[i32]>::new();
//! manager.register(FnPlugin::new("double", |args: &mut [i32]| {
//!   args.iter_mut().for_each(|arg| *arg *= 2);
//! }));
//!
//! let mut args = [1, 2, 3];
//! manager.execute(&mut args);
//! assert_eq!(args, [2, 4, 6]);
//! ```

mod manager;

pub use manager::{
  PluginError,
  PluginManager,
  Result,
};

/// A named unit of behavior.
pub trait Plugin<T: ?Sized> {
  /// Identity of the plugin inside a [`PluginManager`].
  fn name(&self) -> &str;

  /// Run the plugin against the shared arguments.
  fn execute(&mut self, args: &mut T);
}

/// Plugin built from a name and a closure.
pub struct FnPlugin<F> {
  name: String,
  func: F,
}

impl<F> FnPlugin<F> {
  pub fn new(name: impl Into<String>, func: F) -> Self {
    Self {
      name: name.into(),
      func,
    }
  }
}

impl<T, F> Plugin<T> for FnPlugin<F>
where
  T: ?Sized,
  F: FnMut(&mut T),
{
  fn name(&self) -> &str {
    &self.name
  }

  fn execute(&mut self, args: &mut T) {
    (self.func)(args)
  }
}
