//! Variadic consumer dispatch macros.
//!
//! `macro_rules!` stands in for the variadic parameter list the function
//! forms cannot express: any number of consumers, all fed the same single
//! forcing of one producer, invoked in listed order.

/// Forces the producer exactly once, invokes every listed consumer in listed
/// order with a reference to the single forced value, and evaluates to the
/// forced value.
///
/// # Examples
///
/// ```rust
/// use fnkit::accept_all;
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// let value = accept_all!(
///     || 10,
///     |n: &i32| log.borrow_mut().push(*n + 1),
///     |n: &i32| log.borrow_mut().push(*n + 2),
///     |n: &i32| log.borrow_mut().push(*n + 3),
/// );
///
/// assert_eq!(value, 10);
/// assert_eq!(*log.borrow(), vec![11, 12, 13]);
/// ```
#[macro_export]
macro_rules! accept_all {
    ($producer:expr $(, $consumer:expr)+ $(,)?) => {{
        let value = ($producer)();
        $(
            ($consumer)(&value);
        )+
        value
    }};
}

/// Forces the producer exactly once; when the forced value is present,
/// invokes every listed consumer in listed order with a reference to the
/// inner value. Evaluates to the forced `Option` either way.
///
/// # Examples
///
/// ```rust
/// use fnkit::accept_some_all;
/// use std::cell::Cell;
///
/// let invocations = Cell::new(0);
/// let count = |_value: &i32| invocations.set(invocations.get() + 1);
///
/// let absent = accept_some_all!(|| None::<i32>, count, count);
/// assert_eq!(absent, None);
/// assert_eq!(invocations.get(), 0);
///
/// let present = accept_some_all!(|| Some(4), count, count);
/// assert_eq!(present, Some(4));
/// assert_eq!(invocations.get(), 2);
/// ```
#[macro_export]
macro_rules! accept_some_all {
    ($producer:expr $(, $consumer:expr)+ $(,)?) => {{
        let value = ($producer)();
        if let ::core::option::Option::Some(inner) = &value {
            $(
                ($consumer)(inner);
            )+
        }
        value
    }};
}
