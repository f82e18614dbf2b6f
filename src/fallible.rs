//! Error-carrying closure shapes.
//!
//! These traits are a typing discipline for call sites whose operation can
//! fail in an expected, recoverable way — as opposed to a panic, which this
//! library never catches. Each trait names one role (run, produce, accept,
//! apply), carries exactly one operation returning `Result`, and is
//! implemented for any `FnOnce` closure of the matching shape. There is no
//! composition operator and no additional behavior.
//!
//! Generic code that bounds a parameter on one of these traits advertises to
//! its callers that the supplied closure is expected to fail sometimes and
//! that the failure will be handled, not unwound.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::fallible::FallibleFunction;
//!
//! fn parse_with<'a, F, E>(raw: &'a str, parser: F) -> Result<i32, E>
//! where
//!     F: FallibleFunction<&'a str, i32, E>,
//! {
//!     parser.apply(raw)
//! }
//!
//! let parsed = parse_with("17", |raw: &str| raw.parse::<i32>());
//! assert_eq!(parsed, Ok(17));
//!
//! let failed = parse_with("seventeen", |raw: &str| raw.parse::<i32>());
//! assert!(failed.is_err());
//! ```

/// A zero-input operation that may fail with a recoverable error.
pub trait FallibleRunner<E> {
    /// Performs this operation.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the operation fails.
    fn run(self) -> Result<(), E>;
}

impl<F, E> FallibleRunner<E> for F
where
    F: FnOnce() -> Result<(), E>,
{
    #[inline]
    fn run(self) -> Result<(), E> {
        self()
    }
}

/// A zero-input operation that yields a value or fails with a recoverable
/// error.
pub trait FallibleProducer<T, E> {
    /// Produces a value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no value can be produced.
    fn produce(self) -> Result<T, E>;
}

impl<F, T, E> FallibleProducer<T, E> for F
where
    F: FnOnce() -> Result<T, E>,
{
    #[inline]
    fn produce(self) -> Result<T, E> {
        self()
    }
}

/// A single-input operation invoked for its side effect that may fail with a
/// recoverable error.
pub trait FallibleConsumer<T, E> {
    /// Performs this operation on the given value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the operation fails.
    fn accept(self, value: T) -> Result<(), E>;
}

impl<F, T, E> FallibleConsumer<T, E> for F
where
    F: FnOnce(T) -> Result<(), E>,
{
    #[inline]
    fn accept(self, value: T) -> Result<(), E> {
        self(value)
    }
}

/// A single-input function that produces a result or fails with a
/// recoverable error.
pub trait FallibleFunction<T, R, E> {
    /// Applies this function to the given value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no result can be produced.
    fn apply(self, value: T) -> Result<R, E>;
}

impl<F, T, R, E> FallibleFunction<T, R, E> for F
where
    F: FnOnce(T) -> Result<R, E>,
{
    #[inline]
    fn apply(self, value: T) -> Result<R, E> {
        self(value)
    }
}
