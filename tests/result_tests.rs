//! Behaviour tests for the `Result` algebra.
//!
//! Covers:
//! - constructors and runtime type checks
//! - `and`/`or` between every variant pair, including which error wins
//! - value and error mapping
//! - `ok`/`err` projections and `transpose_result`

use std::any::Any;

use optres::option::transpose_option;
use optres::result::{err, is_result, ok, transpose_result};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_ok_and_err_build_each_variant() {
    let success: Result<i32, String> = ok(1);
    let failure: Result<i32, String> = err("failed".to_string());
    assert!(success.is_ok());
    assert!(failure.is_err());
}

#[rstest]
fn test_is_result_checks_both_type_parameters() {
    let erased: Box<dyn Any> = Box::new(Err::<i32, String>("failed".to_string()));
    assert!(is_result::<i32, String>(erased.as_ref()));
    assert!(!is_result::<i32, &str>(erased.as_ref()));
    assert!(!is_result::<i32, String>(&Some(1_i32)));
}

// =============================================================================
// Boolean Combinators
// =============================================================================

#[rstest]
#[case(Ok(1), Ok(2), Ok(2))]
#[case(Ok(1), Err("b"), Err("b"))]
#[case(Err("a"), Ok(2), Err("a"))]
#[case(Err("a"), Err("b"), Err("a"))]
fn test_and_keeps_first_error(
    #[case] left: Result<i32, &'static str>,
    #[case] right: Result<i32, &'static str>,
    #[case] expected: Result<i32, &'static str>,
) {
    assert_eq!(left.and(right), expected);
}

#[rstest]
#[case(Ok(1), Ok(2), Ok(1))]
#[case(Ok(1), Err("b"), Ok(1))]
#[case(Err("a"), Ok(2), Ok(2))]
#[case(Err("a"), Err("b"), Err("b"))]
fn test_or_keeps_second_error(
    #[case] left: Result<i32, &'static str>,
    #[case] right: Result<i32, &'static str>,
    #[case] expected: Result<i32, &'static str>,
) {
    assert_eq!(left.or(right), expected);
}

#[rstest]
fn test_and_then_short_circuits_on_err() {
    let mut calls = 0;
    let result = Err::<i32, _>("failed").and_then(|value| {
        calls += 1;
        Ok(value)
    });
    assert_eq!(result, Err("failed"));
    assert_eq!(calls, 0);
}

#[rstest]
fn test_or_else_recovers_from_err() {
    let result: Result<usize, ()> = Err::<usize, _>("four").or_else(|error| Ok(error.len()));
    assert_eq!(result, Ok(4));
}

// =============================================================================
// Mapping and Projection
// =============================================================================

#[rstest]
fn test_map_err_leaves_success_untouched() {
    let result: Result<i32, String> = Ok::<_, &str>(1).map_err(str::to_uppercase);
    assert_eq!(result, Ok(1));
}

#[rstest]
fn test_unwrap_or_else_receives_error() {
    assert_eq!(Err::<usize, _>("abc").unwrap_or_else(str::len), 3);
}

#[rstest]
#[case(Ok(1), Some(1), None)]
#[case(Err("e"), None, Some("e"))]
fn test_ok_and_err_projections(
    #[case] input: Result<i32, &'static str>,
    #[case] expected_ok: Option<i32>,
    #[case] expected_err: Option<&'static str>,
) {
    assert_eq!(input.ok(), expected_ok);
    assert_eq!(input.err(), expected_err);
}

#[rstest]
fn test_transpose_result_and_transpose_option_are_inverse() {
    let inputs: [Result<Option<i32>, &str>; 3] = [Ok(None), Ok(Some(1)), Err("e")];
    for input in inputs {
        assert_eq!(transpose_option(transpose_result(input)), input);
    }
}
