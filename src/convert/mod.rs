//! Conversion hook for data-access layers.
//!
//! A query layer that produces a nullable value hands it to a
//! [`GetOrThrowConverter`], which wraps it with the configured factory and
//! default message. The converter is plain data the host owns and passes
//! around; nothing is registered globally.

use crate::config::GetOrThrowConfig;
use crate::core::{ExceptionFactory, GetOrThrowError, Result, default_factory};
use crate::result::GetOrThrow;
use log::warn;
use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

pub struct GetOrThrowConverter<E = GetOrThrowError> {
    factory: Arc<dyn ExceptionFactory<E>>,
    default_message: String,
}

impl GetOrThrowConverter {
    /// Converter backed by the process-wide default factory
    pub fn from_config(config: &GetOrThrowConfig) -> Result<Self> {
        let converter = Self::with_factory_config(config, default_factory())?;
        if config.warn_on_default_factory {
            warn!("Using default GetOrThrow exception factory");
        }
        Ok(converter)
    }
}

impl<E> GetOrThrowConverter<E> {
    pub fn new(factory: Arc<dyn ExceptionFactory<E>>) -> Self {
        Self {
            factory,
            default_message: GetOrThrowConfig::default().default_message,
        }
    }

    /// Fails with `InvalidArgument` when `config` does not validate
    pub fn with_factory_config(
        config: &GetOrThrowConfig,
        factory: Arc<dyn ExceptionFactory<E>>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            factory,
            default_message: config.default_message.clone(),
        })
    }

    pub fn factory(&self) -> &Arc<dyn ExceptionFactory<E>> {
        &self.factory
    }

    pub fn default_message(&self) -> &str {
        &self.default_message
    }

    /// Wrap a nullable value with this converter's factory and message
    pub fn convert<T>(&self, source: Option<T>) -> GetOrThrow<T, E> {
        GetOrThrow::new(source, self.default_message.clone(), Arc::clone(&self.factory))
    }

    /// Wrap a type-erased nullable value, checking that it holds a `T`
    pub fn convert_any<T: Any>(&self, source: Option<Box<dyn Any + Send>>) -> Result<GetOrThrow<T, E>> {
        let value = match source {
            Some(boxed) => match boxed.downcast::<T>() {
                Ok(value) => Some(*value),
                Err(_) => {
                    return Err(GetOrThrowError::TypeMismatch(format!(
                        "cannot convert query result into GetOrThrow<{}>",
                        type_name::<T>()
                    )));
                }
            },
            None => None,
        };
        Ok(self.convert(value))
    }
}

impl<E> Clone for GetOrThrowConverter<E> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
            default_message: self.default_message.clone(),
        }
    }
}

impl<E> fmt::Debug for GetOrThrowConverter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetOrThrowConverter")
            .field("default_message", &self.default_message)
            .finish_non_exhaustive()
    }
}

/// Wrap `Option`s coming out of a query layer
pub trait IntoGetOrThrow<T> {
    /// Wrap with the default factory and message
    fn get_or_throw(self) -> GetOrThrow<T>;

    /// Wrap with the factory and message of `converter`
    fn get_or_throw_with<E>(self, converter: &GetOrThrowConverter<E>) -> GetOrThrow<T, E>;
}

impl<T> IntoGetOrThrow<T> for Option<T> {
    fn get_or_throw(self) -> GetOrThrow<T> {
        GetOrThrow::of_nullable(self)
    }

    fn get_or_throw_with<E>(self, converter: &GetOrThrowConverter<E>) -> GetOrThrow<T, E> {
        converter.convert(self)
    }
}
