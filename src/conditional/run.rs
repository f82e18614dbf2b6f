//! Conditional runnable dispatch and synthetic failures.
//!
//! The decisions here are lazy: either a produced boolean or a predicate
//! tested against a produced subject. Each decision is evaluated exactly
//! once per call, before any action runs.

/// Runs `action` if the lazily evaluated `condition` holds.
///
/// The condition is evaluated exactly once; the action is invoked at most
/// once.
///
/// # Examples
///
/// ```rust
/// use fnkit::conditional::run_if;
/// use std::cell::Cell;
///
/// let invocations = Cell::new(0);
/// run_if(|| true, || invocations.set(invocations.get() + 1));
/// run_if(|| false, || invocations.set(invocations.get() + 1));
///
/// assert_eq!(invocations.get(), 1);
/// ```
pub fn run_if<C, A>(condition: C, action: A)
where
    C: FnOnce() -> bool,
    A: FnOnce(),
{
    if condition() {
        action();
    }
}

/// Runs `action` if `predicate` holds for the value produced by `subject`.
///
/// The subject is forced exactly once and the predicate tested exactly once,
/// regardless of the outcome.
///
/// # Examples
///
/// ```rust
/// use fnkit::conditional::run_if_matches;
/// use std::cell::Cell;
///
/// let hits = Cell::new(0);
/// run_if_matches(|| "backup.tar", |name: &str| name.ends_with(".tar"), || {
///     hits.set(hits.get() + 1);
/// });
///
/// assert_eq!(hits.get(), 1);
/// ```
pub fn run_if_matches<T, S, P, A>(subject: S, predicate: P, action: A)
where
    S: FnOnce() -> T,
    P: FnOnce(T) -> bool,
    A: FnOnce(),
{
    if predicate(subject()) {
        action();
    }
}

/// Evaluates `condition` once, then runs exactly one of `action` /
/// `other_action` — never both, never neither.
///
/// # Examples
///
/// ```rust
/// use fnkit::conditional::run_else;
/// use std::cell::Cell;
///
/// let chosen = Cell::new("");
/// run_else(|| false, || chosen.set("primary"), || chosen.set("secondary"));
///
/// assert_eq!(chosen.get(), "secondary");
/// ```
pub fn run_else<C, A, B>(condition: C, action: A, other_action: B)
where
    C: FnOnce() -> bool,
    A: FnOnce(),
    B: FnOnce(),
{
    if condition() {
        action();
    } else {
        other_action();
    }
}

/// Tests `predicate` against the value produced by `subject`, then runs
/// exactly one of `action` / `other_action`.
///
/// The subject is forced exactly once and the predicate tested exactly once.
///
/// # Examples
///
/// ```rust
/// use fnkit::conditional::run_else_matches;
/// use std::cell::Cell;
///
/// let verdict = Cell::new("");
/// run_else_matches(
///     || 42,
///     |n: i32| n % 2 == 0,
///     || verdict.set("even"),
///     || verdict.set("odd"),
/// );
///
/// assert_eq!(verdict.get(), "even");
/// ```
pub fn run_else_matches<T, S, P, A, B>(subject: S, predicate: P, action: A, other_action: B)
where
    S: FnOnce() -> T,
    P: FnOnce(T) -> bool,
    A: FnOnce(),
    B: FnOnce(),
{
    if predicate(subject()) {
        action();
    } else {
        other_action();
    }
}

/// Returns the error built by `error` as `Err` if the lazily evaluated
/// `condition` holds; otherwise returns `Ok(())` without forcing `error`.
///
/// This is the library's only path that manufactures a failure from
/// non-failing inputs.
///
/// # Errors
///
/// Returns `Err` with the produced error exactly when the condition
/// evaluates to `true`.
///
/// # Examples
///
/// ```rust
/// use fnkit::conditional::fail_if;
///
/// fn guard(count: usize) -> Result<(), String> {
///     fail_if(|| count > 10, || format!("too many entries: {count}"))?;
///     Ok(())
/// }
///
/// assert!(guard(3).is_ok());
/// assert_eq!(guard(11), Err("too many entries: 11".to_string()));
/// ```
pub fn fail_if<C, F, E>(condition: C, error: F) -> Result<(), E>
where
    C: FnOnce() -> bool,
    F: FnOnce() -> E,
{
    if condition() { Err(error()) } else { Ok(()) }
}

/// Returns the error built by `error` as `Err` if `predicate` holds for the
/// value produced by `subject`; otherwise returns `Ok(())`.
///
/// The subject is forced exactly once and the predicate tested exactly once;
/// the error producer is forced only on the failing branch.
///
/// # Errors
///
/// Returns `Err` with the produced error exactly when the predicate holds.
///
/// # Examples
///
/// ```rust
/// use fnkit::conditional::fail_if_matches;
///
/// let result: Result<(), &str> =
///     fail_if_matches(|| "", |name: &str| name.is_empty(), || "empty name");
///
/// assert_eq!(result, Err("empty name"));
/// ```
pub fn fail_if_matches<T, S, P, F, E>(subject: S, predicate: P, error: F) -> Result<(), E>
where
    S: FnOnce() -> T,
    P: FnOnce(T) -> bool,
    F: FnOnce() -> E,
{
    if predicate(subject()) {
        Err(error())
    } else {
        Ok(())
    }
}
