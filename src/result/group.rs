//! Group functions over several `Result`s.

use crate::error::ErrorAggregate;
use crate::typeclass::Monoid;

/// A fixed, ordered group of `Result`s sharing one error type.
///
/// Implemented for tuples of up to twelve results (each with its own value
/// type) and for vectors.
///
/// # Examples
///
/// ```rust
/// use optres::result::ResultGroup;
///
/// let group = (Ok::<_, &str>(1), Ok::<_, &str>("two"));
/// assert_eq!(group.all_results(), Ok((1, "two")));
///
/// let group = vec![Ok(1), Err("a"), Err("b")];
/// assert_eq!(group.try_all_results().unwrap_err().errors(), &["a", "b"]);
/// ```
pub trait ResultGroup {
    /// The values of the group when every member is `Ok`.
    type Values;
    /// The error type shared by the members.
    type Error;

    /// Returns `Ok` of every value if every member is `Ok`, otherwise the
    /// first error in order.
    ///
    /// # Errors
    ///
    /// Returns the first `Err` member.
    fn all_results(self) -> Result<Self::Values, Self::Error>;

    /// Inspects every member and returns `Ok` of every value only if no
    /// member is an `Err`; otherwise returns every error, in order.
    ///
    /// # Errors
    ///
    /// Returns an aggregate of every `Err` member if there is at least one.
    fn try_all_results(self) -> Result<Self::Values, ErrorAggregate<Self::Error>>;
}

/// Fail-fast combination: `Ok` of every value, or the first error.
///
/// # Errors
///
/// Returns the first `Err` of `group`.
///
/// # Examples
///
/// ```rust
/// use optres::result::all_results;
///
/// assert_eq!(all_results((Ok::<_, &str>(1), Ok::<_, &str>(2))), Ok((1, 2)));
/// assert_eq!(all_results((Ok::<i32, _>(1), Err::<i32, _>("a"), Err::<i32, _>("b"))), Err("a"));
/// ```
#[inline]
pub fn all_results<G: ResultGroup>(group: G) -> Result<G::Values, G::Error> {
    group.all_results()
}

/// Collect-all combination: `Ok` of every value, or every error.
///
/// Every member is inspected regardless of earlier failures.
///
/// # Errors
///
/// Returns an [`ErrorAggregate`] of every `Err` of `group`, in order.
///
/// # Examples
///
/// ```rust
/// use optres::result::try_all_results;
///
/// assert_eq!(try_all_results((Ok::<_, &str>(1), Ok::<_, &str>(2))), Ok((1, 2)));
///
/// let errors = try_all_results((Ok::<i32, _>(1), Err::<i32, _>("a"), Err::<i32, _>("b")))
///     .unwrap_err();
/// assert_eq!(errors.errors(), &["a", "b"]);
/// ```
#[inline]
pub fn try_all_results<G: ResultGroup>(group: G) -> Result<G::Values, ErrorAggregate<G::Error>> {
    group.try_all_results()
}

/// Returns the first `Ok` of `results`; if there is none, every error in
/// order.
///
/// Results after the first `Ok` are not inspected. An empty input has no
/// success and yields an empty aggregate.
///
/// # Errors
///
/// Returns an [`ErrorAggregate`] of every error when no result is `Ok`.
///
/// # Examples
///
/// ```rust
/// use optres::result::any_results;
///
/// assert_eq!(any_results([Err("a"), Ok(2)]), Ok(2));
///
/// let errors = any_results([Err::<i32, _>("a"), Err("b")]).unwrap_err();
/// assert_eq!(errors.errors(), &["a", "b"]);
/// ```
pub fn any_results<I, T, E>(results: I) -> Result<T, ErrorAggregate<E>>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut errors = ErrorAggregate::empty();
    for result in results {
        match result {
            Ok(value) => return Ok(value),
            Err(error) => errors = errors.append(error),
        }
    }
    tracing::trace!(errors = errors.len(), "any_results found no success");
    Err(errors)
}

// =============================================================================
// Tuple Implementations
// =============================================================================

macro_rules! impl_result_group {
    ($($name:ident),+) => {
        impl<$($name,)+ Error> ResultGroup for ($(Result<$name, Error>,)+) {
            type Values = ($($name,)+);
            type Error = Error;

            #[allow(non_snake_case)]
            #[inline]
            fn all_results(self) -> Result<Self::Values, Self::Error> {
                let ($($name,)+) = self;
                Ok(($($name?,)+))
            }

            #[allow(non_snake_case)]
            fn try_all_results(self) -> Result<Self::Values, ErrorAggregate<Self::Error>> {
                let ($($name,)+) = self;
                let errors = ErrorAggregate::empty();
                $(
                    let ($name, errors) = match $name {
                        Ok(value) => (Some(value), errors),
                        Err(error) => (None, errors.append(error)),
                    };
                )+
                match ($($name,)+) {
                    ($(Some($name),)+) => Ok(($($name,)+)),
                    _ => Err(collected(errors)),
                }
            }
        }
    };
}

impl_result_group!(A);
impl_result_group!(A, B);
impl_result_group!(A, B, C);
impl_result_group!(A, B, C, D);
impl_result_group!(A, B, C, D, F);
impl_result_group!(A, B, C, D, F, G);
impl_result_group!(A, B, C, D, F, G, H);
impl_result_group!(A, B, C, D, F, G, H, I);
impl_result_group!(A, B, C, D, F, G, H, I, J);
impl_result_group!(A, B, C, D, F, G, H, I, J, K);
impl_result_group!(A, B, C, D, F, G, H, I, J, K, L);
impl_result_group!(A, B, C, D, F, G, H, I, J, K, L, M);

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T, E> ResultGroup for Vec<Result<T, E>> {
    type Values = Vec<T>;
    type Error = E;

    fn all_results(self) -> Result<Self::Values, Self::Error> {
        self.into_iter().collect()
    }

    fn try_all_results(self) -> Result<Self::Values, ErrorAggregate<Self::Error>> {
        let (values, errors) = self.into_iter().fold(
            (Vec::new(), ErrorAggregate::empty()),
            |(mut values, errors), result| match result {
                Ok(value) => {
                    values.push(value);
                    (values, errors)
                }
                Err(error) => (values, errors.append(error)),
            },
        );
        if errors.has_errors() {
            Err(collected(errors))
        } else {
            Ok(values)
        }
    }
}

fn collected<E>(errors: ErrorAggregate<E>) -> ErrorAggregate<E> {
    tracing::trace!(errors = errors.len(), "try_all_results collected errors");
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn try_all_keeps_heterogeneous_values() {
        let group = (Ok::<_, String>(1_u8), Ok::<_, String>("two"), Ok::<_, String>(vec![3]));
        assert_eq!(try_all_results(group), Ok((1_u8, "two", vec![3])));
    }

    #[rstest]
    fn try_all_inspects_every_member() {
        let group = (Err::<i32, _>("a"), Ok::<i32, _>(2), Err::<i32, _>("c"), Err::<i32, _>("d"));
        let errors = try_all_results(group).unwrap_err();
        assert_eq!(errors.into_errors(), vec!["a", "c", "d"]);
    }

    #[rstest]
    fn vec_all_results_is_fail_fast() {
        assert_eq!(all_results(vec![Ok(1), Err("a"), Err("b")]), Err("a"));
    }

    #[rstest]
    fn vec_try_all_of_empty_is_ok() {
        assert_eq!(try_all_results(Vec::<Result<i32, &str>>::new()), Ok(Vec::new()));
    }

    #[rstest]
    fn any_of_empty_is_empty_aggregate() {
        let errors = any_results(Vec::<Result<i32, &str>>::new()).unwrap_err();
        assert!(!errors.has_errors());
    }

    #[rstest]
    fn any_stops_at_first_ok() {
        let mut inspected = 0;
        let results = [Err("a"), Ok(1), Ok(2)].into_iter().inspect(|_| {
            inspected += 1;
        });
        assert_eq!(any_results(results), Ok(1));
        assert_eq!(inspected, 2);
    }
}
