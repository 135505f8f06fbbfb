use std::{
  cell::{
    Cell,
    RefCell,
  },
  panic::{
    self,
    AssertUnwindSafe,
  },
  rc::Rc,
};

use the_chain::{
  Chainable,
  FnHandler,
  Handler,
  Link,
  ProcessChain,
  RequestChain,
};

#[derive(Debug, Default, PartialEq, Eq)]
struct Data {
  prop: i32,
}

struct Processable;

impl Handler<Data> for Processable {
  fn is_processable(&self, _data: &Data) -> bool {
    true
  }

  fn handle(&mut self, data: &mut Data) {
    data.prop += 1;
  }
}

struct Unprocessable;

impl Handler<Data> for Unprocessable {
  fn is_processable(&self, _data: &Data) -> bool {
    false
  }

  fn handle(&mut self, data: &mut Data) {
    data.prop += 1;
  }
}

/// Accepts everything and records its label when it runs.
struct Recorder {
  label: &'static str,
  log:   Rc<RefCell<Vec<&'static str>>>,
}

impl Handler<Data> for Recorder {
  fn is_processable(&self, _data: &Data) -> bool {
    true
  }

  fn handle(&mut self, _data: &mut Data) {
    self.log.borrow_mut().push(self.label);
  }
}

#[test]
fn test_first_processable_link_stops_traversal() {
  let mut a: ProcessChain<Data, _> = ProcessChain::new(Processable);
  let b: ProcessChain<Data, _> = ProcessChain::new(Processable);

  let mut data = Data::default();
  assert!(a.is_processable(&data));
  assert!(b.is_processable(&data));

  a.append(b);
  a.process(&mut data);

  assert_eq!(data.prop, 1);
  assert_eq!(a.link_count(), 2);
}

#[test]
fn test_rejected_input_moves_to_successor() {
  let mut a: RequestChain<Data, _> = RequestChain::new(Unprocessable);
  let mut b: RequestChain<Data, _> = RequestChain::new(Processable);
  let c: RequestChain<Data, _> = RequestChain::new(Processable);

  let mut data = Data::default();
  assert!(!a.is_processable(&data));
  assert!(b.is_processable(&data));
  assert!(c.is_processable(&data));

  b.append(c);
  a.append(b);
  a.process(&mut data);

  assert_eq!(data.prop, 1);
  assert_eq!(a.link_count(), 3);
}

#[test]
fn test_later_links_never_run() {
  let log = Rc::new(RefCell::new(Vec::new()));
  let recorder = |label| {
    Recorder {
      label,
      log: log.clone(),
    }
  };

  let mut head = Link::new(Unprocessable)
    .with_next(Link::new(recorder("second")).with_next(Link::new(recorder("third"))));

  head.process(&mut Data::default());
  assert_eq!(*log.borrow(), vec!["second"]);
}

#[test]
fn test_sole_rejecting_link_drops_input() {
  let mut chain = Link::new(Unprocessable);
  let mut data = Data { prop: 41 };

  chain.process(&mut data);
  assert_eq!(data, Data { prop: 41 });
}

#[test]
fn test_rejecting_tail_drops_input() {
  let mut chain = Link::new(Unprocessable).with_next(Link::new(Unprocessable));
  let mut data = Data::default();

  chain.process(&mut data);
  assert_eq!(data, Data::default());
}

#[test]
fn test_append_replaces_successor() {
  let log = Rc::new(RefCell::new(Vec::new()));

  let mut head = Link::new(Unprocessable);
  head.append(Link::new(Recorder {
    label: "old",
    log:   log.clone(),
  }));
  head.append(Link::new(Recorder {
    label: "new",
    log:   log.clone(),
  }));

  head.process(&mut Data::default());
  assert_eq!(*log.borrow(), vec!["new"]);
  assert_eq!(head.link_count(), 2);
}

#[test]
fn test_append_does_not_splice() {
  let mut head = Link::new(Unprocessable)
    .with_next(Link::new(Unprocessable).with_next(Link::new(Processable)));
  assert_eq!(head.link_count(), 3);

  head.append(Link::new(Unprocessable));
  assert_eq!(head.link_count(), 2);

  let mut data = Data::default();
  head.process(&mut data);
  assert_eq!(data.prop, 0);
}

#[test]
fn test_clear_makes_link_terminal() {
  let mut head = Link::new(Unprocessable).with_next(Link::new(Processable));
  head.clear();

  assert!(head.is_terminal());
  assert!(head.next().is_none());

  let mut data = Data::default();
  head.process(&mut data);
  assert_eq!(data.prop, 0);
}

#[test]
fn test_detached_successor_still_processes() {
  let mut head = Link::new(Unprocessable).with_next(Link::new(Processable));
  let mut tail = head.take_next().expect("successor");

  let mut data = Data::default();
  tail.process(&mut data);
  assert_eq!(data.prop, 1);
}

#[test]
fn test_closure_links() {
  let mut chain = Link::from_fn(|n: &i64| *n < 0, |n: &mut i64| *n = -*n).with_next(
    Link::from_fn(|n: &i64| *n % 2 == 1, |n: &mut i64| *n += 1)
      .with_next(Link::from_fn(|_: &i64| true, |n: &mut i64| *n /= 2)),
  );

  let mut n = -5;
  chain.process(&mut n);
  assert_eq!(n, 5);

  chain.process(&mut n);
  assert_eq!(n, 6);

  chain.process(&mut n);
  assert_eq!(n, 3);
}

#[test]
fn test_chain_over_argument_slice() {
  let mut chain: Link<[i32], _> = Link::from_fn(
    |args: &[i32]| args.is_empty(),
    |_: &mut [i32]| {},
  );
  chain.append(Link::from_fn(
    |args: &[i32]| args.len() > 1,
    |args: &mut [i32]| args.swap(0, 1),
  ));

  let mut args = [1, 2, 3];
  chain.process(&mut args);
  assert_eq!(args, [2, 1, 3]);

  let mut single = [9];
  chain.process(&mut single);
  assert_eq!(single, [9]);
}

/// A hand-written link that counts how often its own `process` runs.
struct Audited {
  calls: Rc<Cell<usize>>,
  next:  Option<Box<dyn Chainable<i32>>>,
}

impl Chainable<i32> for Audited {
  fn next(&self) -> Option<&dyn Chainable<i32>> {
    self.next.as_deref()
  }

  fn next_mut(&mut self) -> Option<&mut (dyn Chainable<i32> + 'static)> {
    self.next.as_deref_mut()
  }

  fn is_processable(&self, _n: &i32) -> bool {
    true
  }

  fn handle(&mut self, n: &mut i32) {
    *n += 1;
  }

  fn process(&mut self, n: &mut i32) {
    self.calls.set(self.calls.get() + 1);
    self.handle(n);
  }
}

#[test]
fn test_successor_process_override_is_used() {
  let calls = Rc::new(Cell::new(0));
  let mut head = Link::from_fn(|_: &i32| false, |_: &mut i32| {});
  head.append(Audited {
    calls: calls.clone(),
    next:  None,
  });

  let mut n = 0;
  head.process(&mut n);
  assert_eq!(n, 1);
  assert_eq!(calls.get(), 1);
}

#[test]
fn test_custom_successor_hands_on_to_links() {
  struct Forward {
    next: Option<Box<dyn Chainable<i32>>>,
  }

  impl Chainable<i32> for Forward {
    fn next(&self) -> Option<&dyn Chainable<i32>> {
      self.next.as_deref()
    }

    fn next_mut(&mut self) -> Option<&mut (dyn Chainable<i32> + 'static)> {
      self.next.as_deref_mut()
    }

    fn is_processable(&self, _n: &i32) -> bool {
      false
    }

    fn handle(&mut self, _n: &mut i32) {}
  }

  let mut head = Link::from_fn(|_: &i32| false, |_: &mut i32| {}).with_next(Forward {
    next: Some(Box::new(Link::from_fn(|_: &i32| true, |n: &mut i32| *n = 7))),
  });
  assert_eq!(head.link_count(), 3);

  let mut n = 0;
  head.process(&mut n);
  assert_eq!(n, 7);
}

type CounterLink = Link<u32, FnHandler<fn(&u32) -> bool, fn(&mut u32)>>;

fn is_zero(n: &u32) -> bool {
  *n == 0
}

fn bump(n: &mut u32) {
  *n += 1;
}

fn reject(_: &u32) -> bool {
  false
}

fn skip(_: &mut u32) {}

#[test]
fn test_long_chain_reaches_tail() {
  let mut chain: CounterLink =
    Link::from_fn(is_zero as fn(&u32) -> bool, bump as fn(&mut u32));
  for _ in 0..1_000 {
    let head: CounterLink = Link::from_fn(reject as fn(&u32) -> bool, skip as fn(&mut u32));
    chain = head.with_next(chain);
  }
  assert_eq!(chain.link_count(), 1_001);

  let mut n = 0;
  chain.process(&mut n);
  assert_eq!(n, 1);
}

#[test]
fn test_very_long_chain_drops() {
  let mut chain: CounterLink = Link::from_fn(reject as fn(&u32) -> bool, skip as fn(&mut u32));
  for _ in 0..200_000 {
    let head: CounterLink = Link::from_fn(reject as fn(&u32) -> bool, skip as fn(&mut u32));
    chain = head.with_next(chain);
  }
  assert_eq!(chain.link_count(), 200_001);
  drop(chain);
}

#[test]
fn test_handler_panic_reaches_caller() {
  struct Explode;

  impl Handler<Data> for Explode {
    fn is_processable(&self, _data: &Data) -> bool {
      panic!("predicate failed");
    }

    fn handle(&mut self, _data: &mut Data) {}
  }

  let mut chain = Link::new(Explode).with_next(Link::new(Processable));
  let mut data = Data::default();

  let result = panic::catch_unwind(AssertUnwindSafe(|| chain.process(&mut data)));
  assert!(result.is_err());
  assert_eq!(data.prop, 0);
}

#[test]
fn test_handler_state_is_reachable() {
  struct Tally {
    seen: usize,
  }

  impl Handler<Data> for Tally {
    fn is_processable(&self, _data: &Data) -> bool {
      true
    }

    fn handle(&mut self, _data: &mut Data) {
      self.seen += 1;
    }
  }

  let mut chain = Link::new(Tally { seen: 0 });
  chain.process(&mut Data::default());
  chain.process(&mut Data::default());

  assert_eq!(chain.handler().seen, 2);
  chain.handler_mut().seen = 0;
  assert_eq!(chain.handler().seen, 0);
}
