use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GetOrThrowError {
    /// Produced by the default exception factory; displays the message verbatim.
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl GetOrThrowError {
    /// Message carried by the error, without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg)
            | Self::InvalidArgument(msg)
            | Self::TypeMismatch(msg)
            | Self::Config(msg) => msg,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, GetOrThrowError>;

impl From<serde_json::Error> for GetOrThrowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_displays_message_verbatim() {
        let err = GetOrThrowError::NotFound("User 7 not found".to_string());
        assert_eq!(err.to_string(), "User 7 not found");
        assert_eq!(err.message(), "User 7 not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_other_variants_are_prefixed() {
        let err = GetOrThrowError::InvalidArgument("empty message".to_string());
        assert_eq!(err.to_string(), "Invalid argument: empty message");
        assert_eq!(err.message(), "empty message");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GetOrThrowError = parse_err.into();
        assert!(matches!(err, GetOrThrowError::Config(_)));
    }
}
