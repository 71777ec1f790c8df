use crate::core::{GetOrThrowError, Result};
use crate::result::DEFAULT_ERROR_MESSAGE;
use serde::{Deserialize, Serialize};

/// Settings for wrappers created by the conversion hook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetOrThrowConfig {
    /// Message given to converted wrappers
    pub default_message: String,

    /// Log a warning when a converter falls back to the default factory
    pub warn_on_default_factory: bool,
}

impl GetOrThrowConfig {
    pub fn new() -> Self {
        Self {
            default_message: DEFAULT_ERROR_MESSAGE.to_string(),
            warn_on_default_factory: true,
        }
    }

    /// Set the default message
    pub fn default_message(mut self, message: &str) -> Self {
        self.default_message = message.to_string();
        self
    }

    /// Enable or disable the default factory warning
    pub fn warn_on_default_factory(mut self, warn: bool) -> Self {
        self.warn_on_default_factory = warn;
        self
    }

    /// Parse from JSON; missing fields keep their defaults
    ///
    /// ```
    /// use getorthrow::GetOrThrowConfig;
    ///
    /// let config = GetOrThrowConfig::from_json(r#"{"default_message": "Entity not found"}"#)?;
    /// assert_eq!(config.default_message, "Entity not found");
    /// assert!(config.warn_on_default_factory);
    /// # Ok::<(), getorthrow::GetOrThrowError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_message.trim().is_empty() {
            return Err(GetOrThrowError::InvalidArgument(
                "default_message cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for GetOrThrowConfig {
    fn default() -> Self {
        Self::new()
    }
}
