//! Flat tuple growth.
//!
//! [`CombinedResult`](crate::result::CombinedResult) accumulates the values
//! of every combined `Result` into a single flat tuple. These traits let a
//! tuple grow by one element ([`TupleAppend`]) or by another tuple
//! ([`TupleConcat`]) without nesting:
//!
//! ```rust
//! use optres::tuple::{TupleAppend, TupleConcat};
//!
//! assert_eq!((1, "a").append(2.5), (1, "a", 2.5));
//! assert_eq!((1,).concat(("a", 'b')), (1, "a", 'b'));
//! ```
//!
//! Tuples of up to twelve elements are supported.

/// Appends one element at the end of a tuple.
pub trait TupleAppend<Next> {
    /// The tuple with `Next` added at the end.
    type Output;

    /// Returns the tuple extended with `next`.
    fn append(self, next: Next) -> Self::Output;
}

/// Appends every element of another tuple, in order.
pub trait TupleConcat<Rhs> {
    /// The concatenated tuple.
    type Output;

    /// Returns `self` followed by every element of `rhs`.
    fn concat(self, rhs: Rhs) -> Self::Output;
}

// =============================================================================
// TupleAppend
// =============================================================================

macro_rules! impl_tuple_append {
    ($($name:ident),*) => {
        impl<$($name,)* Next> TupleAppend<Next> for ($($name,)*) {
            type Output = ($($name,)* Next,);

            #[allow(non_snake_case, clippy::unused_unit)]
            #[inline]
            fn append(self, next: Next) -> Self::Output {
                let ($($name,)*) = self;
                ($($name,)* next,)
            }
        }
    };
}

impl_tuple_append!();
impl_tuple_append!(A);
impl_tuple_append!(A, B);
impl_tuple_append!(A, B, C);
impl_tuple_append!(A, B, C, D);
impl_tuple_append!(A, B, C, D, F);
impl_tuple_append!(A, B, C, D, F, G);
impl_tuple_append!(A, B, C, D, F, G, H);
impl_tuple_append!(A, B, C, D, F, G, H, I);
impl_tuple_append!(A, B, C, D, F, G, H, I, J);
impl_tuple_append!(A, B, C, D, F, G, H, I, J, K);
impl_tuple_append!(A, B, C, D, F, G, H, I, J, K, L);

// =============================================================================
// TupleConcat
// =============================================================================

impl<Lhs> TupleConcat<()> for Lhs {
    type Output = Lhs;

    #[inline]
    fn concat(self, (): ()) -> Self::Output {
        self
    }
}

// Concatenating `(Head, Tail...)` appends `Head`, then concatenates `(Tail...)`.
macro_rules! impl_tuple_concat {
    ($head:ident $(, $tail:ident)*) => {
        impl<Lhs, $head, $($tail,)*> TupleConcat<($head, $($tail,)*)> for Lhs
        where
            Lhs: TupleAppend<$head>,
            <Lhs as TupleAppend<$head>>::Output: TupleConcat<($($tail,)*)>,
        {
            type Output =
                <<Lhs as TupleAppend<$head>>::Output as TupleConcat<($($tail,)*)>>::Output;

            #[allow(non_snake_case)]
            #[inline]
            fn concat(self, ($head, $($tail,)*): ($head, $($tail,)*)) -> Self::Output {
                self.append($head).concat(($($tail,)*))
            }
        }
    };
}

impl_tuple_concat!(A);
impl_tuple_concat!(A, B);
impl_tuple_concat!(A, B, C);
impl_tuple_concat!(A, B, C, D);
impl_tuple_concat!(A, B, C, D, F);
impl_tuple_concat!(A, B, C, D, F, G);
impl_tuple_concat!(A, B, C, D, F, G, H);
impl_tuple_concat!(A, B, C, D, F, G, H, I);
impl_tuple_concat!(A, B, C, D, F, G, H, I, J);
impl_tuple_concat!(A, B, C, D, F, G, H, I, J, K);
impl_tuple_concat!(A, B, C, D, F, G, H, I, J, K, L);
