use super::error::GetOrThrowError;
use lazy_static::lazy_static;
use log::trace;
use std::sync::Arc;

/// Strategy that turns a not-found message into a concrete error value
///
/// Implementations must be pure functions of the message and must not panic:
/// `GetOrThrow::or_throw` hands the returned value straight to the caller.
/// They are shared between threads, hence the `Send + Sync` bound.
///
/// Any `Fn(&str) -> E` closure is a factory:
///
/// ```
/// use getorthrow::{ExceptionFactory, GetOrThrow};
/// use std::sync::Arc;
///
/// #[derive(Debug, PartialEq)]
/// struct UserNotFound(String);
///
/// let factory: Arc<dyn ExceptionFactory<UserNotFound>> =
///     Arc::new(|message: &str| UserNotFound(message.to_string()));
///
/// let user = GetOrThrow::<u64, UserNotFound>::with_factory(None, factory);
/// assert_eq!(
///     user.or_throw_with("no such user"),
///     Err(UserNotFound("no such user".to_string()))
/// );
/// ```
pub trait ExceptionFactory<E>: Send + Sync {
    fn create_exception(&self, message: &str) -> E;
}

impl<E, F> ExceptionFactory<E> for F
where
    F: Fn(&str) -> E + Send + Sync,
{
    fn create_exception(&self, message: &str) -> E {
        self(message)
    }
}

/// Factory used when no custom one is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExceptionFactory;

impl ExceptionFactory<GetOrThrowError> for DefaultExceptionFactory {
    fn create_exception(&self, message: &str) -> GetOrThrowError {
        GetOrThrowError::NotFound(message.to_string())
    }
}

// Process-wide default factory, built on first use and never reconfigured
lazy_static! {
    static ref DEFAULT_FACTORY: Arc<dyn ExceptionFactory<GetOrThrowError>> = {
        trace!("Initializing default GetOrThrow exception factory");
        Arc::new(DefaultExceptionFactory)
    };
}

/// Shared handle to the process-wide default factory
pub fn default_factory() -> Arc<dyn ExceptionFactory<GetOrThrowError>> {
    Arc::clone(&DEFAULT_FACTORY)
}
