use crate::core::{ExceptionFactory, GetOrThrowError, default_factory};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Message used when nothing more specific was configured
pub const DEFAULT_ERROR_MESSAGE: &str = "Не удалось найти сущность";

/// A value that may be absent, paired with the error to produce if it is
///
/// Absence only turns into an error when the caller asks for the value with
/// [`or_throw`](Self::or_throw). The error itself comes from the bound
/// [`ExceptionFactory`], fed with the current error message.
///
/// Transformations never mutate: each one consumes the wrapper and returns a
/// new one that keeps the current message and factory.
///
/// # Examples
///
/// ```
/// use getorthrow::{GetOrThrow, GetOrThrowError};
///
/// fn find_user(id: u64) -> GetOrThrow<String> {
///     let found = (id == 1).then(|| "Alice".to_string());
///     GetOrThrow::of_nullable(found).change_message(format!("User {} not found", id))
/// }
///
/// assert_eq!(find_user(1).or_throw(), Ok("Alice".to_string()));
/// assert_eq!(
///     find_user(2).or_throw(),
///     Err(GetOrThrowError::NotFound("User 2 not found".to_string()))
/// );
/// ```
pub struct GetOrThrow<T, E = GetOrThrowError> {
    value: Option<T>,
    error_message: String,
    factory: Arc<dyn ExceptionFactory<E>>,
}

impl<T> GetOrThrow<T> {
    /// Absent value with the default message and factory
    pub fn empty() -> Self {
        Self::of_nullable(None)
    }

    /// Present value with the default message and factory
    pub fn of(value: T) -> Self {
        Self::of_nullable(Some(value))
    }

    /// `None` becomes an absent wrapper
    pub fn of_nullable(value: Option<T>) -> Self {
        Self::new(value, DEFAULT_ERROR_MESSAGE, default_factory())
    }
}

impl<T, E> GetOrThrow<T, E> {
    pub fn new(
        value: Option<T>,
        error_message: impl Into<String>,
        factory: Arc<dyn ExceptionFactory<E>>,
    ) -> Self {
        Self {
            value,
            error_message: error_message.into(),
            factory,
        }
    }

    /// Bind a custom factory; the message starts out as [`DEFAULT_ERROR_MESSAGE`]
    pub fn with_factory(value: Option<T>, factory: Arc<dyn ExceptionFactory<E>>) -> Self {
        Self::new(value, DEFAULT_ERROR_MESSAGE, factory)
    }

    // Builds a derived wrapper that keeps this one's message and factory.
    fn carry<U>(
        value: Option<U>,
        error_message: String,
        factory: Arc<dyn ExceptionFactory<E>>,
    ) -> GetOrThrow<U, E> {
        GetOrThrow {
            value,
            error_message,
            factory,
        }
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn factory(&self) -> &Arc<dyn ExceptionFactory<E>> {
        &self.factory
    }

    /// Same value and factory, different message
    pub fn change_message(self, error_message: impl Into<String>) -> Self {
        Self {
            error_message: error_message.into(),
            ..self
        }
    }

    /// Returns the value, or the error built by the bound factory from the
    /// current message
    pub fn or_throw(self) -> Result<T, E> {
        match self.value {
            Some(value) => Ok(value),
            None => Err(self.factory.create_exception(&self.error_message)),
        }
    }

    /// Like [`or_throw`](Self::or_throw), with a message used for this call only
    pub fn or_throw_with(self, error_message: impl Into<String>) -> Result<T, E> {
        self.change_message(error_message).or_throw()
    }

    /// Returns the value, or the error built by `f`; the bound factory is not consulted
    pub fn ok_or_else<X, F>(self, f: F) -> Result<T, X>
    where
        F: FnOnce() -> X,
    {
        self.value.ok_or_else(f)
    }

    pub fn unwrap_or(self, other: T) -> T {
        self.value.unwrap_or(other)
    }

    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(f)
    }

    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            value: self.value.filter(predicate),
            ..self
        }
    }

    pub fn map<U, F>(self, f: F) -> GetOrThrow<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Self::carry(self.value.map(f), self.error_message, self.factory)
    }

    /// Like [`map`](Self::map), for functions that may themselves find nothing
    pub fn flat_map<U, F>(self, f: F) -> GetOrThrow<U, E>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Self::carry(self.value.and_then(f), self.error_message, self.factory)
    }

    /// Keeps a present value, otherwise takes whatever `f` supplies
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Option<T>,
    {
        Self {
            value: self.value.or_else(f),
            ..self
        }
    }

    pub fn if_present<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            f(value);
        }
    }

    pub fn if_present_or_else<F, G>(&self, f: F, otherwise: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match &self.value {
            Some(value) => f(value),
            None => otherwise(),
        }
    }

    /// Borrowing view, so the value can be checked without consuming the wrapper
    pub fn as_borrowed(&self) -> GetOrThrow<&T, E> {
        Self::carry(
            self.value.as_ref(),
            self.error_message.clone(),
            Arc::clone(&self.factory),
        )
    }

    pub fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Zero or one item; each call starts over
    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.value.iter()
    }
}

impl<T> Default for GetOrThrow<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for GetOrThrow<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T, E> From<GetOrThrow<T, E>> for Option<T> {
    fn from(value: GetOrThrow<T, E>) -> Self {
        value.value
    }
}

impl<T: Clone, E> Clone for GetOrThrow<T, E> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            error_message: self.error_message.clone(),
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for GetOrThrow<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetOrThrow")
            .field("value", &self.value)
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

// Equality and hashing look at the value only; message and factory are ignored.
impl<T: PartialEq, E> PartialEq for GetOrThrow<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, E> Eq for GetOrThrow<T, E> {}

impl<T: PartialEq, E> PartialEq<Option<T>> for GetOrThrow<T, E> {
    fn eq(&self, other: &Option<T>) -> bool {
        &self.value == other
    }
}

impl<T: Hash, E> Hash for GetOrThrow<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, E> IntoIterator for GetOrThrow<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a GetOrThrow<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
