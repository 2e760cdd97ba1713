//! Group functions over several `Option`s.

/// A fixed, ordered group of `Option`s that can be combined as a whole.
///
/// Implemented for tuples of up to twelve options (each with its own value
/// type) and for vectors.
///
/// # Examples
///
/// ```rust
/// use optres::option::OptionGroup;
///
/// assert_eq!((Some(1), Some('a')).all_options(), Some((1, 'a')));
/// assert_eq!((Some(1), None::<char>).all_options(), None);
/// assert_eq!(vec![Some(1), Some(2)].all_options(), Some(vec![1, 2]));
/// ```
pub trait OptionGroup {
    /// The values of the group when every member is `Some`.
    type Values;

    /// Returns `Some` of every value, in order, if every member is `Some`.
    ///
    /// Members are inspected in order and the first `None` ends the
    /// inspection.
    fn all_options(self) -> Option<Self::Values>;
}

/// Returns `Some` of every value if every option of `group` is `Some`,
/// otherwise `None`.
///
/// # Examples
///
/// ```rust
/// use optres::option::all_options;
///
/// assert_eq!(all_options((Some(1), Some("two"), Some(3.0))), Some((1, "two", 3.0)));
/// assert_eq!(all_options((Some(1), None::<&str>)), None);
/// ```
#[inline]
pub fn all_options<G: OptionGroup>(group: G) -> Option<G::Values> {
    group.all_options()
}

/// Returns the first `Some` of `options`, or `None` if there is none.
///
/// Options after the first `Some` are not inspected.
///
/// # Examples
///
/// ```rust
/// use optres::option::any_options;
///
/// assert_eq!(any_options([None, Some(2), Some(3)]), Some(2));
/// assert_eq!(any_options(Vec::<Option<i32>>::new()), None);
/// ```
pub fn any_options<I, T>(options: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    options.into_iter().flatten().next()
}

// =============================================================================
// Tuple Implementations
// =============================================================================

macro_rules! impl_option_group {
    ($($name:ident),+) => {
        impl<$($name),+> OptionGroup for ($(Option<$name>,)+) {
            type Values = ($($name,)+);

            #[allow(non_snake_case)]
            #[inline]
            fn all_options(self) -> Option<Self::Values> {
                let ($($name,)+) = self;
                Some(($($name?,)+))
            }
        }
    };
}

impl_option_group!(A);
impl_option_group!(A, B);
impl_option_group!(A, B, C);
impl_option_group!(A, B, C, D);
impl_option_group!(A, B, C, D, F);
impl_option_group!(A, B, C, D, F, G);
impl_option_group!(A, B, C, D, F, G, H);
impl_option_group!(A, B, C, D, F, G, H, I);
impl_option_group!(A, B, C, D, F, G, H, I, J);
impl_option_group!(A, B, C, D, F, G, H, I, J, K);
impl_option_group!(A, B, C, D, F, G, H, I, J, K, L);
impl_option_group!(A, B, C, D, F, G, H, I, J, K, L, M);

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T> OptionGroup for Vec<Option<T>> {
    type Values = Vec<T>;

    fn all_options(self) -> Option<Self::Values> {
        self.into_iter().collect()
    }
}
