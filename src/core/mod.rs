pub mod error;
pub mod factory;

pub use error::{GetOrThrowError, Result};
pub use factory::{DefaultExceptionFactory, ExceptionFactory, default_factory};
