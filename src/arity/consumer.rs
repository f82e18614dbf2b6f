//! Consumer shapes for three to six arguments.
//!
//! Defined from the same kind of `macro_rules!` template as the function
//! shapes: `accept` and `and_then` are written once and instantiated per
//! arity.
//!
//! Consumer composition runs the successor with the same arguments as the
//! base. Because the base's `accept` takes its arguments by value, the
//! composed consumer clones them for the first leg, which is why `and_then`
//! requires `Clone` on every argument type.

use paste::paste;

macro_rules! define_consumer {
    ($arity:literal, $count:literal, $($arg:ident: $ty:ident),+) => {
        paste! {
            #[doc = concat!(
                "Represents an operation that accepts ", $count,
                " arguments and returns no result."
            )]
            ///
            /// Consumers are invoked for their side effects. Implemented for
            /// every closure and `fn` item of the matching shape.
            pub trait [<Consumer $arity>]<$($ty),+> {
                /// Performs this operation on the given arguments.
                fn accept(&self, $($arg: $ty),+);

                /// Returns a composed consumer that performs this operation,
                /// then performs `next` with the same arguments.
                ///
                /// The base operation completes before `next` starts. If the
                /// base panics, the panic is relayed to the caller of the
                /// composed consumer and `next` is never invoked.
                fn and_then<G>(self, next: G) -> impl [<Consumer $arity>]<$($ty),+>
                where
                    Self: Sized,
                    G: [<Consumer $arity>]<$($ty),+>,
                    $($ty: Clone,)+
                {
                    move |$($arg: $ty),+| {
                        self.accept($($arg.clone()),+);
                        next.accept($($arg),+);
                    }
                }
            }

            impl<F, $($ty),+> [<Consumer $arity>]<$($ty),+> for F
            where
                F: Fn($($ty),+),
            {
                #[inline]
                fn accept(&self, $($arg: $ty),+) {
                    self($($arg),+);
                }
            }
        }
    };
}

define_consumer!(3, "three", first: T, second: U, third: V);
define_consumer!(4, "four", first: T, second: U, third: V, fourth: W);
define_consumer!(5, "five", first: T, second: U, third: V, fourth: W, fifth: X);
define_consumer!(6, "six", first: T, second: U, third: V, fourth: W, fifth: X, sixth: Y);

static_assertions::assert_impl_all!(fn(i32, i32, i32) -> (): Consumer3<i32, i32, i32>);
static_assertions::assert_impl_all!(
    fn(u8, u16, u32, u64, i8) -> (): Consumer5<u8, u16, u32, u64, i8>
);
