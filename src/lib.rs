//! # fnkit
//!
//! Fixed-arity function abstractions and lazily-evaluated conditional
//! combinators for Rust.
//!
//! ## Overview
//!
//! This library extends the closure vocabulary of the standard library with
//! abstractions that are not provided out of the box:
//!
//! - **Arity-Extended Shapes**: `Function3`..`Function6` and
//!   `Consumer3`..`Consumer6` traits with an `and_then` composition operator
//! - **Fallible Shapes**: explicitly error-carrying runner, producer,
//!   consumer, and function traits over `Result`
//! - **Conditional Combinators**: `run_if`, `get_or_else`, `apply_or_else`
//!   and friends, which force zero-argument producers lazily and dispatch to
//!   exactly the behaviors their contracts name
//!
//! Producers are plain `FnOnce() -> T` closures and are never memoized: each
//! forcing is a fresh, observable evaluation, and every combinator documents
//! exactly how many times it forces each of its producers.
//!
//! ## Feature Flags
//!
//! - `arity`: arity-extended function and consumer traits
//! - `fallible`: error-carrying closure traits
//! - `conditional`: conditional-execution and multi-argument application
//!   combinators
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::arity::Function3;
//! use fnkit::conditional::get_or_else;
//!
//! let sum = (|first: i32, second: i32, third: i32| first + second + third)
//!     .and_then(|total| total * 2);
//! assert_eq!(sum.apply(1, 2, 3), 12);
//!
//! let chosen = get_or_else(false, || "eager", || "fallback");
//! assert_eq!(chosen, "fallback");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used traits and functions.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "arity")]
    pub use crate::arity::*;

    #[cfg(feature = "fallible")]
    pub use crate::fallible::*;

    #[cfg(feature = "conditional")]
    pub use crate::conditional::*;
}

#[cfg(feature = "arity")]
pub mod arity;

#[cfg(feature = "fallible")]
pub mod fallible;

#[cfg(feature = "conditional")]
pub mod conditional;
