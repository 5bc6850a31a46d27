//! Context labels.
//!
//! A context label discriminates which override rules apply to a request
//! (for example a privacy-sensitive scenario vs. a crisis scenario). Labels
//! come from an upstream classifier with a bounded vocabulary, but the engine
//! treats them as opaque: any non-empty string is legal, and a label that
//! matches no override simply selects no boosts and the default priority.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An opaque context label.
///
/// # Examples
///
/// ```
/// use ethicore::ContextLabel;
///
/// let ctx = ContextLabel::new("privacy_scenario").unwrap();
/// assert_eq!(ctx.as_str(), "privacy_scenario");
///
/// let fallback = ContextLabel::default_label();
/// assert_eq!(fallback.as_str(), "default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ContextLabel(String);

impl TryFrom<String> for ContextLabel {
    type Error = ValidationError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::new(label)
    }
}

impl ContextLabel {
    /// Creates a context label with validation.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyContextLabel` if the label is empty.
    pub fn new(label: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.is_empty() {
            return Err(ValidationError::EmptyContextLabel);
        }
        Ok(Self(label))
    }

    /// The `"default"` label the upstream classifier falls back to when it
    /// cannot place a scenario.
    #[must_use]
    pub fn default_label() -> Self {
        Self("default".to_string())
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContextLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
