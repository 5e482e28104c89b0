//! Domain error types.

mod fetch_error;

pub use fetch_error::{FetchError, FetchErrorKind, FetchResult};
