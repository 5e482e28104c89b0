//! picfetch - fetch-and-cache image loading.
//!
//! A URL goes through a shared in-memory cache and, on a miss, a single
//! HTTP GET plus decode. The same load can be delivered three ways: a
//! completion callback, a single-item stream, or a directly awaited value.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing services, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer rendering results to the terminal.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "picfetch";
