use std::fmt;

/// Stack of commands the caller has already executed.
///
/// The history is strictly last-in-first-out and unbounded. It only stores
/// commands: it never calls [`Command::execute`](crate::Command::execute) and
/// offers no way to look at the top without removing it. Undo and redo
/// policies are left to the owner, who pops a command and decides what to run.
///
/// `C` is usually `Box<dyn Command>`, but a closed enum of commands works just
/// as well.
pub struct CommandHistory<C> {
  commands: Vec<C>,
}

impl<C> CommandHistory<C> {
  pub fn new() -> Self {
    Self {
      commands: Vec::new(),
    }
  }

  /// Push a command onto the top of the history.
  pub fn push(&mut self, command: C) {
    self.commands.push(command);
    tracing::trace!(depth = self.commands.len(), "pushed command onto history");
  }

  /// Remove and return the most recently pushed command.
  ///
  /// Returns `None` once the history is empty.
  pub fn pop(&mut self) -> Option<C> {
    let command = self.commands.pop();
    tracing::trace!(
      depth = self.commands.len(),
      popped = command.is_some(),
      "popped command from history"
    );
    command
  }
}

impl<C> Default for CommandHistory<C> {
  fn default() -> Self {
    Self::new()
  }
}

impl<C> fmt::Debug for CommandHistory<C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CommandHistory")
      .field("depth", &self.commands.len())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  quickcheck::quickcheck! {
      fn pop_returns_pushed_in_reverse(items: Vec<u32>) -> bool {
          let mut history = CommandHistory::new();
          for item in &items {
              history.push(*item);
          }

          let mut popped = Vec::with_capacity(items.len());
          while let Some(item) = history.pop() {
              popped.push(item);
          }
          popped.reverse();

          popped == items && history.pop().is_none()
      }
  }

  #[test]
  fn pop_on_empty_history_is_none() {
    let mut history: CommandHistory<u8> = CommandHistory::default();
    assert!(history.pop().is_none());
    assert!(history.pop().is_none());
  }

  #[test]
  fn duplicates_are_kept() {
    let mut history = CommandHistory::new();
    history.push("same");
    history.push("same");

    assert_eq!(history.pop(), Some("same"));
    assert_eq!(history.pop(), Some("same"));
    assert_eq!(history.pop(), None);
  }

  #[test]
  fn debug_shows_depth() {
    let mut history = CommandHistory::new();
    history.push(1);
    history.push(2);
    assert_eq!(format!("{history:?}"), "CommandHistory { depth: 2 }");
  }
}
