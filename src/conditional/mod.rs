//! Conditional-execution and multi-argument application combinators.
//!
//! Every operation in this module is a stateless free function that consumes
//! three kinds of caller-supplied closures:
//!
//! - **producers** — `FnOnce() -> T` closures forced on demand to obtain a
//!   value. Producers are never memoized: each forcing is a fresh,
//!   observable evaluation, and every combinator forces each of its
//!   producers exactly as many times as its contract states, no more, no
//!   fewer.
//! - **decisions** — a `bool` literal, a lazily produced boolean, or a
//!   predicate tested against a lazily produced subject. A decision is
//!   evaluated at most once per call.
//! - **behaviors** — runnables, consumers, and functions of one to six
//!   inputs, invoked by the combinator that selected them.
//!
//! The facade holds no state between calls, catches nothing, and retries
//! nothing: a panic in any supplied closure propagates to the caller
//! immediately, leaving every not-yet-invoked behavior uninvoked. The only
//! operation that manufactures a failure itself is [`fail_if`], which returns
//! the caller-constructed error as `Err` when its decision holds.
//!
//! # Overview
//!
//! | Operation | Forces | Invokes |
//! |---|---|---|
//! | [`run_if`] / [`run_if_matches`] | decision once | action if the decision holds |
//! | [`run_else`] / [`run_else_matches`] | decision once | exactly one of two actions |
//! | [`fail_if`] / [`fail_if_matches`] | error producer only on failure | — |
//! | [`apply`]..[`apply6`] | every producer, in order | the function |
//! | [`apply_or_else`]..[`apply_or_else6`] | producers only when the condition holds, else the fallback | one of function/fallback |
//! | [`apply_either`] | its producer unconditionally | exactly one of two functions |
//! | [`accept_if`] / [`accept_if2`] | producers only when the condition holds | the consumer, or nothing |
//! | [`accept_or_else`] | its producer unconditionally | exactly one of two consumers |
//! | [`get_or_else`] | exactly one of two producers | — |
//! | [`accept`], [`accept2`]..[`accept6`] | every producer, in order | the consumer |
//! | [`accept_some`] | its producer once | the consumer when the value is present |
//! | [`accept_all!`](crate::accept_all) | its producer once | every listed consumer, in order |
//! | [`accept_some_all!`](crate::accept_some_all) | its producer once | every listed consumer when the value is present |
//!
//! # Ordering Guarantee
//!
//! Whenever one call forces several producers or invokes several consumers,
//! they execute in argument/list order; no reordering is permitted.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::conditional::{apply_or_else, get_or_else};
//! use std::cell::Cell;
//!
//! let forced = Cell::new(0);
//! let expensive = || {
//!     forced.set(forced.get() + 1);
//!     999
//! };
//!
//! // The condition is false: `expensive` is never forced.
//! let result = apply_or_else(false, expensive, |n: i32| n * 2, || 5);
//! assert_eq!(result, 5);
//! assert_eq!(forced.get(), 0);
//!
//! let value = get_or_else(true, || "selected", || unreachable!());
//! assert_eq!(value, "selected");
//! ```

mod accept;
mod accept_macro;
mod apply;
mod run;

pub use accept::{
    accept, accept2, accept3, accept4, accept5, accept6, accept_if, accept_if2, accept_or_else,
    accept_some, get_or_else,
};
pub use apply::{
    apply, apply2, apply3, apply4, apply5, apply6, apply_either, apply_or_else, apply_or_else2,
    apply_or_else3, apply_or_else4, apply_or_else5, apply_or_else6,
};
pub use run::{fail_if, fail_if_matches, run_else, run_else_matches, run_if, run_if_matches};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::accept_all;
pub use crate::accept_some_all;
