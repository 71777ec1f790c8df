use super::template::NotFoundMessage;
use crate::result::GetOrThrow;
use log::debug;
use std::collections::HashMap;
use std::fmt::Display;

/// Rewrites not-found messages of wrappers returned from named calls
///
/// This is the runtime counterpart of `#[not_found_message]` for call sites
/// that are wired up dynamically, such as repository trait objects. Templates
/// are registered once at construction; afterwards the interceptor is
/// read-only and can be shared freely.
///
/// ```
/// use getorthrow::{GetOrThrow, MessageInterceptor};
/// use std::fmt::Display;
///
/// let interceptor = MessageInterceptor::new()
///     .with_template("find_user", "User {} not found");
///
/// let id = 7;
/// let user: GetOrThrow<String> =
///     interceptor.around("find_user", &[&id as &dyn Display], || GetOrThrow::empty());
///
/// assert_eq!(user.error_message(), "User 7 not found");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageInterceptor {
    templates: HashMap<String, NotFoundMessage>,
}

impl MessageInterceptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template for `method`, replacing any previous one
    pub fn with_template(mut self, method: &str, template: impl Into<NotFoundMessage>) -> Self {
        self.templates.insert(method.to_string(), template.into());
        self
    }

    pub fn template_for(&self, method: &str) -> Option<&NotFoundMessage> {
        self.templates.get(method)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Apply the template registered for `method` to `result`
    ///
    /// Without a registered template the result is returned untouched.
    pub fn intercept<T, E>(
        &self,
        method: &str,
        args: &[&dyn Display],
        result: GetOrThrow<T, E>,
    ) -> GetOrThrow<T, E> {
        match self.templates.get(method) {
            Some(template) => {
                let message = template.render(args);
                debug!("Not-found message for '{}' set to '{}'", method, message);
                result.change_message(message)
            }
            None => result,
        }
    }

    /// Run `call`, then [`intercept`](Self::intercept) what it returned
    pub fn around<T, E, F>(&self, method: &str, args: &[&dyn Display], call: F) -> GetOrThrow<T, E>
    where
        F: FnOnce() -> GetOrThrow<T, E>,
    {
        let result = call();
        self.intercept(method, args, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::DEFAULT_ERROR_MESSAGE;

    fn interceptor() -> MessageInterceptor {
        MessageInterceptor::new()
            .with_template("find_order", "Order {} of {} not found")
            .with_template("find_any", "Nothing found")
    }

    #[test]
    fn test_intercept_renders_registered_template() {
        let result = interceptor().intercept(
            "find_order",
            &[&10, &"carol"],
            GetOrThrow::<u32>::empty(),
        );
        assert_eq!(result.error_message(), "Order 10 of carol not found");
        assert_eq!(
            result.or_throw().unwrap_err().message(),
            "Order 10 of carol not found"
        );
    }

    #[test]
    fn test_unregistered_method_passes_through() {
        let result = interceptor().intercept("find_user", &[&1], GetOrThrow::<u32>::empty());
        assert_eq!(result.error_message(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_message_rewritten_for_present_values_too() {
        let result = interceptor().around("find_any", &[], || GetOrThrow::of(3));
        assert_eq!(result.error_message(), "Nothing found");
        assert_eq!(result.or_throw(), Ok(3));
    }

    #[test]
    fn test_with_template_replaces_previous() {
        let interceptor = interceptor().with_template("find_any", "Still nothing");
        assert_eq!(interceptor.len(), 2);
        assert_eq!(
            interceptor.template_for("find_any").map(|t| t.template()),
            Some("Still nothing")
        );
        assert!(!interceptor.is_empty());
        assert!(MessageInterceptor::new().is_empty());
    }
}
