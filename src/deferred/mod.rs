//! Deferred `Option` and `Result` computations.
//!
//! [`OptionFuture`] and [`ResultFuture`] wrap a pending computation and
//! expose the same combinator surface as the plain types, plus asynchronous
//! variants (`map_async`, `and_then_async`, ...) whose step is itself a
//! future. They implement [`Future`](std::future::Future), so a chain is
//! resolved by awaiting it, and nothing runs before that.
//!
//! # Panics inside a chain
//!
//! A panic raised by a step, or by the wrapped computation, is not turned
//! into `None` or `Err`. It unwinds out of `.await` like any other panic
//! (or is reported by the runtime as a panicked task). Use
//! [`wrap_async`](crate::result::wrap_async) to capture panics explicitly.
//!
//! # Examples
//!
//! ```rust
//! use optres::deferred::{OptionAsyncExt, ResultAsyncExt};
//!
//! #[tokio::main]
//! async fn main() {
//!     let name = Some("  ada ")
//!         .defer()
//!         .map(str::trim)
//!         .filter(|name| !name.is_empty())
//!         .ok_or("empty name")
//!         .map_async(|name| async move { name.to_uppercase() })
//!         .await;
//!     assert_eq!(name, Ok("ADA".to_string()));
//! }
//! ```

mod ext;
mod option_future;
mod result_future;

pub use ext::{OptionAsyncExt, ResultAsyncExt};
pub use option_future::OptionFuture;
pub use result_future::ResultFuture;
