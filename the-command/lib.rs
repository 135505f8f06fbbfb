//! # the-command
//!
//! Actions encapsulated as values, plus a stack that remembers the ones the
//! caller already ran.
//!
//! A [`Command`] exposes a single [`Command::execute`] that reports success.
//! The pattern imposes no retry or rollback: undoing something is just another
//! command the caller builds and executes. [`CommandHistory`] is a plain LIFO
//! of commands; it never executes or inspects what it stores.
//!
//! ```rust
//! use std::{
//!   cell::Cell,
//!   rc::Rc,
//! };
//!
//! use the_command::{
//!   Command,
//!   CommandHistory,
//! };
//!
//! let light = Rc::new(Cell::new(false));
//!
//! let mut turn_on = {
//!   let light = light.clone();
//!   move || {
//!     light.set(true);
//!     true
//!   }
//! };
//!
//! let mut history: CommandHistory<Box<dyn Command>> = CommandHistory::new();
//! assert!(turn_on.execute());
//! history.push(Box::new(turn_on));
//!
//! assert!(light.get());
//! assert!(history.pop().is_some());
//! assert!(history.pop().is_none());
//! ```

mod history;

pub use history::CommandHistory;

/// An executable action.
///
/// Implementors usually hold a handle to the receiver they act on. What
/// "success" means is up to the implementation.
pub trait Command {
  /// Perform the action, returning `true` on success.
  fn execute(&mut self) -> bool;

  /// Diagnostic name of the command.
  ///
  /// Defaults to the implementing type's name, which is enough to tell
  /// commands apart once they are boxed behind `dyn Command`.
  fn name(&self) -> &str {
    std::any::type_name::<Self>()
  }
}

impl<F> Command for F
where
  F: FnMut() -> bool,
{
  fn execute(&mut self) -> bool {
    (self)()
  }
}
