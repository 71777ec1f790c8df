// ============================================================================
// GetOrThrow Library
// ============================================================================

//! `Option` with a configurable not-found error.
//!
//! [`GetOrThrow`] holds zero or one value, the message to report if the value
//! is missing, and the [`ExceptionFactory`] that turns that message into an
//! error. Query code returns it; callers decide when absence becomes an error
//! by calling [`GetOrThrow::or_throw`].
//!
//! # Examples
//!
//! ```
//! use getorthrow::{ExceptionFactory, GetOrThrow, not_found_message};
//! use std::sync::Arc;
//!
//! #[derive(Debug, PartialEq)]
//! enum ApiError {
//!     NotFound(String),
//! }
//!
//! struct Users {
//!     names: Vec<String>,
//!     factory: Arc<dyn ExceptionFactory<ApiError>>,
//! }
//!
//! impl Users {
//!     #[not_found_message("User {} not found")]
//!     fn find(&self, id: usize) -> GetOrThrow<String, ApiError> {
//!         GetOrThrow::with_factory(self.names.get(id).cloned(), Arc::clone(&self.factory))
//!     }
//! }
//!
//! let users = Users {
//!     names: vec!["alice".to_string()],
//!     factory: Arc::new(|message: &str| ApiError::NotFound(message.to_string())),
//! };
//!
//! assert_eq!(users.find(0).or_throw(), Ok("alice".to_string()));
//! assert_eq!(
//!     users.find(3).or_throw(),
//!     Err(ApiError::NotFound("User 3 not found".to_string()))
//! );
//! ```

// Lets `#[not_found_message]` expansions resolve `::getorthrow` inside this crate
extern crate self as getorthrow;

pub mod config;
pub mod convert;
pub mod core;
pub mod message;
pub mod result;

// Re-export main types for convenience
pub use config::GetOrThrowConfig;
pub use convert::{GetOrThrowConverter, IntoGetOrThrow};
pub use crate::core::{
    DefaultExceptionFactory, ExceptionFactory, GetOrThrowError, Result, default_factory,
};
pub use message::{MessageInterceptor, NotFoundMessage, PLACEHOLDER};
pub use result::{DEFAULT_ERROR_MESSAGE, GetOrThrow};

pub use getorthrow_derive::not_found_message;

// Used by `#[not_found_message]` expansions: an `FnOnce` bound lets the body
// return borrows of captured `&mut` receivers.
#[doc(hidden)]
pub fn __call_once<R>(f: impl FnOnce() -> R) -> R {
    f()
}
