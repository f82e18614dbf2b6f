//! Multi-producer function application.
//!
//! The `apply` family forces every producer, left to right, exactly once,
//! then hands the forced values to the supplied function. The `apply_or_else`
//! family forces its producers only when its condition holds; when it does
//! not, only the fallback producer runs. [`apply_either`] is the odd one out
//! and deliberately so: it forces its single producer in both branches,
//! because both candidate functions want the same input.

/// Forces `first`, then applies `function` to the forced value and returns
/// the result.
///
/// # Examples
///
/// ```rust
/// use fnkit::conditional::apply;
///
/// let length = apply(|| "producer", |text: &str| text.len());
/// assert_eq!(length, 8);
/// ```
pub fn apply<T, R, P1, F>(first: P1, function: F) -> R
where
    P1: FnOnce() -> T,
    F: FnOnce(T) -> R,
{
    function(first())
}

/// Forces both producers in argument order, then applies `function` to the
/// forced values and returns the result.
pub fn apply2<T, U, R, P1, P2, F>(first: P1, second: P2, function: F) -> R
where
    P1: FnOnce() -> T,
    P2: FnOnce() -> U,
    F: FnOnce(T, U) -> R,
{
    let first = first();
    let second = second();
    function(first, second)
}

/// Forces all three producers in argument order, then applies `function` to
/// the forced values and returns the result.
///
/// # Examples
///
/// ```rust
/// use fnkit::conditional::apply3;
///
/// let total = apply3(|| 1, || 2, || 3, |a: i32, b: i32, c: i32| a + b + c);
/// assert_eq!(total, 6);
/// ```
pub fn apply3<T, U, V, R, P1, P2, P3, F>(first: P1, second: P2, third: P3, function: F) -> R
where
    P1: FnOnce() -> T,
    P2: FnOnce() -> U,
    P3: FnOnce() -> V,
    F: FnOnce(T, U, V) -> R,
{
    let first = first();
    let second = second();
    let third = third();
    function(first, second, third)
}

/// Forces all four producers in argument order, then applies `function` to
/// the forced values and returns the result.
pub fn apply4<T, U, V, W, R, P1, P2, P3, P4, F>(
    first: P1,
    second: P2,
    third: P3,
    fourth: P4,
    function: F,
) -> R
where
    P1: FnOnce() -> T,
    P2: FnOnce() -> U,
    P3: FnOnce() -> V,
    P4: FnOnce() -> W,
    F: FnOnce(T, U, V, W) -> R,
{
    let first = first();
    let second = second();
    let third = third();
    let fourth = fourth();
    function(first, second, third, fourth)
}

/// Forces all five producers in argument order, then applies `function` to
/// the forced values and returns the result.
pub fn apply5<T, U, V, W, X, R, P1, P2, P3, P4, P5, F>(
    first: P1,
    second: P2,
    third: P3,
    fourth: P4,
    fifth: P5,
    function: F,
) -> R
where
    P1: FnOnce() -> T,
    P2: FnOnce() -> U,
    P3: FnOnce() -> V,
    P4: FnOnce() -> W,
    P5: FnOnce() -> X,
    F: FnOnce(T, U, V, W, X) -> R,
{
    let first = first();
    let second = second();
    let third = third();
    let fourth = fourth();
    let fifth = fifth();
    function(first, second, third, fourth, fifth)
}

/// Forces all six producers in argument order, then applies `function` to the
/// forced values and returns the result.
pub fn apply6<T, U, V, W, X, Y, R, P1, P2, P3, P4, P5, P6, F>(
    first: P1,
    second: P2,
    third: P3,
    fourth: P4,
    fifth: P5,
    sixth: P6,
    function: F,
) -> R
where
    P1: FnOnce() -> T,
    P2: FnOnce() -> U,
    P3: FnOnce() -> V,
    P4: FnOnce() -> W,
    P5: FnOnce() -> X,
    P6: FnOnce() -> Y,
    F: FnOnce(T, U, V, W, X, Y) -> R,
{
    let first = first();
    let second = second();
    let third = third();
    let fourth = fourth();
    let fifth = fifth();
    let sixth = sixth();
    function(first, second, third, fourth, fifth, sixth)
}

/// Applies `function` to the forced value of `first` when `condition` is
/// true; otherwise forces `fallback` and returns its value instead.
///
/// `first` is never forced when the condition is false, and `fallback` is
/// never forced when it is true.
///
/// # Examples
///
/// ```rust
/// use fnkit::conditional::apply_or_else;
/// use std::cell::Cell;
///
/// let forced = Cell::new(false);
/// let result = apply_or_else(
///     false,
///     || {
///         forced.set(true);
///         10
///     },
///     |n: i32| n * 2,
///     || -1,
/// );
///
/// assert_eq!(result, -1);
/// assert!(!forced.get());
/// ```
pub fn apply_or_else<T, R, P1, F, G>(condition: bool, first: P1, function: F, fallback: G) -> R
where
    P1: FnOnce() -> T,
    F: FnOnce(T) -> R,
    G: FnOnce() -> R,
{
    if condition {
        function(first())
    } else {
        fallback()
    }
}

/// Applies `function` to the forced values of both producers when `condition`
/// is true; otherwise forces `fallback` and returns its value instead.
///
/// Neither producer is forced when the condition is false.
pub fn apply_or_else2<T, U, R, P1, P2, F, G>(
    condition: bool,
    first: P1,
    second: P2,
    function: F,
    fallback: G,
) -> R
where
    P1: FnOnce() -> T,
    P2: FnOnce() -> U,
    F: FnOnce(T, U) -> R,
    G: FnOnce() -> R,
{
    if condition {
        let first = first();
        let second = second();
        function(first, second)
    } else {
        fallback()
    }
}

/// Applies `function` to the forced values of all three producers when
/// `condition` is true; otherwise forces `fallback` and returns its value
/// instead.
pub fn apply_or_else3<T, U, V, R, P1, P2, P3, F, G>(
    condition: bool,
    first: P1,
    second: P2,
    third: P3,
    function: F,
    fallback: G,
) -> R
where
    P1: FnOnce() -> T,
    P2: FnOnce() -> U,
    P3: FnOnce() -> V,
    F: FnOnce(T, U, V) -> R,
    G: FnOnce() -> R,
{
    if condition {
        let first = first();
        let second = second();
        let third = third();
        function(first, second, third)
    } else {
        fallback()
    }
}

/// Applies `function` to the forced values of all four producers when
/// `condition` is true; otherwise forces `fallback` and returns its value
/// instead.
pub fn apply_or_else4<T, U, V, W, R, P1, P2, P3, P4, F, G>(
    condition: bool,
    first: P1,
    second: P2,
    third: P3,
    fourth: P4,
    function: F,
    fallback: G,
) -> R
where
    P1: FnOnce() -> T,
    P2: FnOnce() -> U,
    P3: FnOnce() -> V,
    P4: FnOnce() -> W,
    F: FnOnce(T, U, V, W) -> R,
    G: FnOnce() -> R,
{
    if condition {
        let first = first();
        let second = second();
        let third = third();
        let fourth = fourth();
        function(first, second, third, fourth)
    } else {
        fallback()
    }
}

/// Applies `function` to the forced values of all five producers when
/// `condition` is true; otherwise forces `fallback` and returns its value
/// instead.
pub fn apply_or_else5<T, U, V, W, X, R, P1, P2, P3, P4, P5, F, G>(
    condition: bool,
    first: P1,
    second: P2,
    third: P3,
    fourth: P4,
    fifth: P5,
    function: F,
    fallback: G,
) -> R
where
    P1: FnOnce() -> T,
    P2: FnOnce() -> U,
    P3: FnOnce() -> V,
    P4: FnOnce() -> W,
    P5: FnOnce() -> X,
    F: FnOnce(T, U, V, W, X) -> R,
    G: FnOnce() -> R,
{
    if condition {
        let first = first();
        let second = second();
        let third = third();
        let fourth = fourth();
        let fifth = fifth();
        function(first, second, third, fourth, fifth)
    } else {
        fallback()
    }
}

/// Applies `function` to the forced values of all six producers when
/// `condition` is true; otherwise forces `fallback` and returns its value
/// instead.
pub fn apply_or_else6<T, U, V, W, X, Y, R, P1, P2, P3, P4, P5, P6, F, G>(
    condition: bool,
    first: P1,
    second: P2,
    third: P3,
    fourth: P4,
    fifth: P5,
    sixth: P6,
    function: F,
    fallback: G,
) -> R
where
    P1: FnOnce() -> T,
    P2: FnOnce() -> U,
    P3: FnOnce() -> V,
    P4: FnOnce() -> W,
    P5: FnOnce() -> X,
    P6: FnOnce() -> Y,
    F: FnOnce(T, U, V, W, X, Y) -> R,
    G: FnOnce() -> R,
{
    if condition {
        let first = first();
        let second = second();
        let third = third();
        let fourth = fourth();
        let fifth = fifth();
        let sixth = sixth();
        function(first, second, third, fourth, fifth, sixth)
    } else {
        fallback()
    }
}

/// Forces `first` unconditionally, then applies exactly one of `if_true` /
/// `otherwise` to the forced value, selected by `condition`.
///
/// Unlike [`apply_or_else`], the producer runs in both branches: both
/// candidate functions take the same input, so there is no lazy branch to
/// preserve. Only one function is ever invoked.
///
/// # Examples
///
/// ```rust
/// use fnkit::conditional::apply_either;
/// use std::cell::Cell;
///
/// let forced = Cell::new(0);
/// let producer = || {
///     forced.set(forced.get() + 1);
///     7
/// };
///
/// let chosen = apply_either(false, producer, |n: i32| n + 1, |n: i32| n - 1);
/// assert_eq!(chosen, 6);
/// assert_eq!(forced.get(), 1);
/// ```
pub fn apply_either<T, R, P1, F, G>(condition: bool, first: P1, if_true: F, otherwise: G) -> R
where
    P1: FnOnce() -> T,
    F: FnOnce(T) -> R,
    G: FnOnce(T) -> R,
{
    let value = first();
    if condition {
        if_true(value)
    } else {
        otherwise(value)
    }
}
