//! # optres
//!
//! Combinator algebra for `Option` and `Result`, with error aggregation and
//! deferred asynchronous chains.
//!
//! ## Overview
//!
//! The standard `Option` and `Result` are the data model. This library adds
//! what their combinator surface lacks:
//!
//! - **Extraction as values**: `try_unwrap`/`try_expect` on `Option`
//! - **Group functions**: fail-fast [`all_options`](option::all_options) and
//!   [`all_results`](result::all_results), first-success
//!   [`any_options`](option::any_options) and
//!   [`any_results`](result::any_results), and collect-all
//!   [`try_all_results`](result::try_all_results)
//! - **Error Aggregation**: [`ErrorAggregate`](error::ErrorAggregate) and the
//!   flat, growing [`CombinedResult`](result::CombinedResult)
//! - **Panic Capture**: [`wrap`](result::wrap) and `wrap_async`
//! - **Deferred Chains**: `OptionFuture` and `ResultFuture` (feature `async`)
//!
//! ## Feature Flags
//!
//! - `async`: Deferred wrappers and `wrap_async` (enabled by default)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optres::prelude::*;
//!
//! let parsed = ["1", "x", "3", "y"]
//!     .into_iter()
//!     .map(|text| text.parse::<i32>().map_err(|_| format!("not a number: {text}")))
//!     .collect::<Vec<_>>();
//!
//! let errors = try_all_results(parsed).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.to_string(), "not a number: x\nnot a number: y");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every public type, trait and free function.
///
/// # Usage
///
/// ```rust
/// use optres::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::option::*;
    pub use crate::result::*;
    pub use crate::tuple::*;
    pub use crate::typeclass::*;

    #[cfg(feature = "async")]
    pub use crate::deferred::*;
}

pub mod error;
pub mod option;
pub mod result;
pub mod tuple;
pub mod typeclass;

#[cfg(feature = "async")]
pub mod deferred;
