use crate::result::DEFAULT_ERROR_MESSAGE;
use std::fmt::{self, Display};

/// Positional placeholder recognised in templates
pub const PLACEHOLDER: &str = "{}";

/// Not-found message template with positional `{}` placeholders
///
/// Placeholders are filled left to right, one argument each. Surplus
/// arguments are ignored; placeholders left without an argument stay literal.
///
/// ```
/// use getorthrow::NotFoundMessage;
///
/// let message = NotFoundMessage::new("User {} not found in {}");
/// assert_eq!(message.render([&42 as &dyn std::fmt::Display, &"tenant-a"]),
///            "User 42 not found in tenant-a");
/// assert_eq!(message.render([7]), "User 7 not found in {}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotFoundMessage {
    template: String,
}

impl NotFoundMessage {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn placeholder_count(&self) -> usize {
        self.template.matches(PLACEHOLDER).count()
    }

    /// Substitute `args` into the template
    ///
    /// Argument text is inserted as is and never scanned for placeholders.
    pub fn render<I>(&self, args: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut rendered = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();
        let mut args = args.into_iter();

        while let Some(pos) = rest.find(PLACEHOLDER) {
            let Some(arg) = args.next() else {
                break;
            };
            rendered.push_str(&rest[..pos]);
            rendered.push_str(&arg.to_string());
            rest = &rest[pos + PLACEHOLDER.len()..];
        }

        rendered.push_str(rest);
        rendered
    }
}

impl Default for NotFoundMessage {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_MESSAGE)
    }
}

impl From<&str> for NotFoundMessage {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for NotFoundMessage {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}

impl Display for NotFoundMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}
