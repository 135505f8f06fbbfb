/// The hooks a chain link supplies.
pub trait Handler<T: ?Sized> {
  /// Whether this link takes the input instead of passing it on.
  fn is_processable(&self, input: &T) -> bool;

  /// Handle an input this link accepted.
  fn handle(&mut self, input: &mut T);
}

/// Handler built from a predicate and an action.
pub struct FnHandler<P, A> {
  predicate: P,
  action:    A,
}

impl<P, A> FnHandler<P, A> {
  pub fn new(predicate: P, action: A) -> Self {
    Self { predicate, action }
  }
}

impl<T, P, A> Handler<T> for FnHandler<P, A>
where
  T: ?Sized,
  P: Fn(&T) -> bool,
  A: FnMut(&mut T),
{
  fn is_processable(&self, input: &T) -> bool {
    (self.predicate)(input)
  }

  fn handle(&mut self, input: &mut T) {
    (self.action)(input)
  }
}
