use std::fmt;

use crate::handler::{
  FnHandler,
  Handler,
};

/// A link in a chain of responsibility.
///
/// Object safe, so links with different handler types can follow each other.
/// Each link decides for itself and hands rejected input to its successor's
/// [`Chainable::process`].
pub trait Chainable<T: ?Sized> {
  /// The successor, or `None` for the tail of the chain.
  fn next(&self) -> Option<&dyn Chainable<T>>;

  /// Mutable access to the successor, used to hand input on.
  fn next_mut(&mut self) -> Option<&mut (dyn Chainable<T> + 'static)>;

  /// Detach and return the successor.
  ///
  /// Links that never give up their successor can keep the default.
  fn take_next(&mut self) -> Option<Box<dyn Chainable<T>>> {
    None
  }

  /// Whether this link takes `input` instead of passing it on.
  fn is_processable(&self, input: &T) -> bool;

  /// This link's own action, run once it accepted `input`.
  fn handle(&mut self, input: &mut T);

  /// Hand `input` down the chain.
  ///
  /// If this link accepts the input it handles it and traversal stops here.
  /// Otherwise the input goes to the successor's `process`, so a successor
  /// that overrides it stays in control of its own part of the chain. If the
  /// tail rejects it too, the input is dropped without any signal to the
  /// caller.
  fn process(&mut self, input: &mut T) {
    if self.is_processable(input) {
      tracing::trace!("chain link accepted input");
      self.handle(input);
      return;
    }

    match self.next_mut() {
      Some(next) => next.process(input),
      None => tracing::trace!("no chain link accepted input"),
    }
  }

  /// Number of links from this one to the tail, inclusive.
  fn link_count(&self) -> usize {
    let mut count = 1;
    let mut cursor = self.next();
    while let Some(link) = cursor {
      count += 1;
      cursor = link.next();
    }
    count
  }
}

/// A chain link owning a [`Handler`] and an optional successor.
pub struct Link<T: ?Sized, H> {
  handler: H,
  next:    Option<Box<dyn Chainable<T>>>,
}

impl<T: ?Sized, H> Link<T, H> {
  /// A terminal link.
  pub fn new(handler: H) -> Self {
    Self {
      handler,
      next: None,
    }
  }

  /// Set the successor, replacing any previous one.
  ///
  /// This does not splice: whatever followed the old successor is dropped
  /// with it.
  pub fn append<C>(&mut self, next: C)
  where
    C: Chainable<T> + 'static,
  {
    self.append_boxed(Box::new(next));
  }

  /// [`Link::append`] for an already boxed successor.
  pub fn append_boxed(&mut self, next: Box<dyn Chainable<T>>) {
    if self.next.is_some() {
      tracing::debug!("replacing existing chain successor");
    }
    self.next = Some(next);
  }

  /// Builder form of [`Link::append`].
  #[must_use]
  pub fn with_next<C>(mut self, next: C) -> Self
  where
    C: Chainable<T> + 'static,
  {
    self.append(next);
    self
  }

  /// Detach the successor, making this link the tail.
  pub fn clear(&mut self) {
    self.next = None;
  }

  pub fn is_terminal(&self) -> bool {
    self.next.is_none()
  }

  pub fn handler(&self) -> &H {
    &self.handler
  }

  pub fn handler_mut(&mut self) -> &mut H {
    &mut self.handler
  }
}

impl<T, P, A> Link<T, FnHandler<P, A>>
where
  T: ?Sized,
  P: Fn(&T) -> bool,
  A: FnMut(&mut T),
{
  /// A terminal link from a predicate and an action.
  pub fn from_fn(predicate: P, action: A) -> Self {
    Self::new(FnHandler::new(predicate, action))
  }
}

impl<T, H> Chainable<T> for Link<T, H>
where
  T: ?Sized,
  H: Handler<T>,
{
  fn next(&self) -> Option<&dyn Chainable<T>> {
    self.next.as_deref()
  }

  fn next_mut(&mut self) -> Option<&mut (dyn Chainable<T> + 'static)> {
    self.next.as_deref_mut()
  }

  fn take_next(&mut self) -> Option<Box<dyn Chainable<T>>> {
    self.next.take()
  }

  fn is_processable(&self, input: &T) -> bool {
    self.handler.is_processable(input)
  }

  fn handle(&mut self, input: &mut T) {
    self.handler.handle(input);
  }
}

// Unlink successors one at a time so a long chain does not overflow the stack
// through nested `Box` drops.
impl<T: ?Sized, H> Drop for Link<T, H> {
  fn drop(&mut self) {
    let mut next = self.next.take();
    while let Some(mut link) = next {
      next = link.take_next();
    }
  }
}

impl<T: ?Sized, H: fmt::Debug> fmt::Debug for Link<T, H> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Link")
      .field("handler", &self.handler)
      .field("terminal", &self.is_terminal())
      .finish()
  }
}
