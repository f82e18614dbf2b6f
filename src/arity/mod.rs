//! Arity-extended function and consumer abstractions.
//!
//! The standard library's closure traits stop being convenient to name past
//! two arguments. This module provides explicit shapes for three to six
//! inputs:
//!
//! - [`Function3`]..[`Function6`]: N arguments in, one result out
//! - [`Consumer3`]..[`Consumer6`]: N arguments in, no result, invoked for
//!   side effects
//!
//! Every trait is implemented for any closure (or `fn` item) of the matching
//! shape, so values of these traits are obtained by writing ordinary
//! closures. Each trait carries a single composition operator, `and_then`:
//!
//! - for functions, `base.and_then(next)` computes `next(base.apply(..))` —
//!   the base always runs first;
//! - for consumers, `base.and_then(next)` runs the base's `accept`, then
//!   `next`'s `accept` with the same (cloned) arguments.
//!
//! Arguments at this layer are already-materialized values, never lazy
//! producers; laziness belongs to the [`conditional`](crate::conditional)
//! facade.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::arity::Function3;
//!
//! let label = |city: &str, year: u32, page: usize| format!("{city}-{year}-{page}");
//! let shouted = label.and_then(|text| text.to_uppercase());
//!
//! assert_eq!(shouted.apply("oslo", 2024, 7), "OSLO-2024-7");
//! ```
//!
//! ```rust
//! use fnkit::arity::Consumer3;
//! use std::cell::RefCell;
//!
//! let log = RefCell::new(Vec::new());
//! let record = |a: i32, b: i32, c: i32| log.borrow_mut().push(a + b + c);
//! let echo = |a: i32, b: i32, c: i32| log.borrow_mut().push(a * b * c);
//!
//! record.and_then(echo).accept(2, 3, 4);
//! assert_eq!(*log.borrow(), vec![9, 24]);
//! ```
//!
//! # Composition Laws
//!
//! - **Ordering**: the base behavior always completes before the successor
//!   starts; a panic in the base leaves the successor uninvoked.
//! - **Associativity** (functions): `f.and_then(g).and_then(h)` computes the
//!   same results as `f.and_then(move |value| h(g(value)))`.

mod consumer;
mod function;

pub use consumer::{Consumer3, Consumer4, Consumer5, Consumer6};
pub use function::{Function3, Function4, Function5, Function6};
