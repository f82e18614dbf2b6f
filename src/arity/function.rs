//! Function shapes for three to six arguments.
//!
//! A single `macro_rules!` template defines the shape once — `apply`, the
//! `Output` associated type, and `and_then` — and is instantiated per arity,
//! so the arity lives in the list of type parameters rather than in
//! hand-written duplicates.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::arity::Function4;
//!
//! let weigh = |a: u32, b: u32, c: u32, d: u32| a + 2 * b + 3 * c + 4 * d;
//! let graded = weigh.and_then(|score| score / 10);
//!
//! assert_eq!(graded.apply(10, 10, 10, 10), 10);
//! ```

use paste::paste;

macro_rules! define_function {
    ($arity:literal, $count:literal, $($arg:ident: $ty:ident),+) => {
        paste! {
            #[doc = concat!(
                "Represents a function that accepts ", $count,
                " arguments and produces a result."
            )]
            ///
            /// Implemented for every closure and `fn` item of the matching
            /// shape; values of this trait are obtained by writing an
            /// ordinary closure.
            pub trait [<Function $arity>]<$($ty),+> {
                /// The type of the result of the function.
                type Output;

                /// Applies this function to the given arguments.
                fn apply(&self, $($arg: $ty),+) -> Self::Output;

                /// Returns a composed function that first applies this
                /// function to its arguments, and then applies `next` to the
                /// result.
                ///
                /// The base function is evaluated first, unconditionally. If
                /// either stage panics, the panic is relayed to the caller of
                /// the composed function and the remaining stage is never
                /// invoked.
                fn and_then<G, R>(self, next: G) -> impl [<Function $arity>]<$($ty),+, Output = R>
                where
                    Self: Sized,
                    G: Fn(Self::Output) -> R,
                {
                    move |$($arg: $ty),+| next(self.apply($($arg),+))
                }
            }

            impl<F, $($ty,)+ R> [<Function $arity>]<$($ty),+> for F
            where
                F: Fn($($ty),+) -> R,
            {
                type Output = R;

                #[inline]
                fn apply(&self, $($arg: $ty),+) -> R {
                    self($($arg),+)
                }
            }
        }
    };
}

define_function!(3, "three", first: T, second: U, third: V);
define_function!(4, "four", first: T, second: U, third: V, fourth: W);
define_function!(5, "five", first: T, second: U, third: V, fourth: W, fifth: X);
define_function!(6, "six", first: T, second: U, third: V, fourth: W, fifth: X, sixth: Y);

// Plain fn items satisfy the traits through the closure blanket impls.
static_assertions::assert_impl_all!(fn(i32, i32, i32) -> i32: Function3<i32, i32, i32>);
static_assertions::assert_impl_all!(
    fn(u8, u16, u32, u64, i8, i16) -> i64: Function6<u8, u16, u32, u64, i8, i16>
);
