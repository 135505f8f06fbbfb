//! # the-chain
//!
//! Chain of responsibility: a singly linked list of handlers where each link
//! either consumes an input or hands it to its successor.
//!
//! ## Core Concepts
//!
//! - **Handler**: the two hooks a link supplies, [`Handler::is_processable`]
//!   and [`Handler::handle`]
//! - **Link**: [`Link`] owns one handler and at most one successor
//! - **Traversal**: [`Chainable::process`] runs the first link that accepts
//!   the input and stops there, even if later links would accept it too
//! - **Drop on the floor**: when no link accepts, the input is left alone and
//!   nothing is reported
//!
//! ```rust
//! use the_chain::{
//!   Chainable,
//!   Link,
//! };
//!
//! struct Data {
//!   prop: i32,
//! }
//!
//! let mut first = Link::from_fn(|data: &Data| data.prop < 0, |data: &mut Data| data.prop = 0);
//! first.append(Link::from_fn(|_: &Data| true, |data: &mut Data| data.prop += 1));
//!
//! let mut data = Data { prop: 0 };
//! first.process(&mut data);
//! assert_eq!(data.prop, 1);
//! ```
//!
//! ## Successors
//!
//! [`Link::append`] replaces the successor rather than splicing into the tail,
//! and [`Link::clear`] detaches it. A chain is built back to front:
//!
//! ```rust
//! use the_chain::{
//!   Chainable,
//!   Link,
//! };
//!
//! let tail = Link::from_fn(|n: &i32| *n > 10, |n: &mut i32| *n = 10);
//! let mut head = Link::from_fn(|n: &i32| *n < 0, |n: &mut i32| *n = 0).with_next(tail);
//! assert_eq!(head.link_count(), 2);
//!
//! let mut n = 42;
//! head.process(&mut n);
//! assert_eq!(n, 10);
//!
//! head.clear();
//! let mut n = 42;
//! head.process(&mut n);
//! assert_eq!(n, 42);
//! ```

mod handler;
mod link;

pub use handler::{
  FnHandler,
  Handler,
};
pub use link::{
  Chainable,
  Link,
};

/// Chain under its "process" naming.
///
/// The terminal link simply has no successor; this is the same type as
/// [`RequestChain`].
pub type ProcessChain<T, H> = Link<T, H>;

/// Chain under its "request" naming.
///
/// Identical to [`ProcessChain`]: the hand-off is [`Chainable::process`] and
/// the handler hook is [`Handler::handle`] for both.
pub type RequestChain<T, H> = Link<T, H>;
