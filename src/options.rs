//! Formatting options and configuration.

use crate::locale::builtin::DEFAULT_LOCALE;

/// Options for a single format call: which locale, and which pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// The locale identifier to resolve.
    pub locale: String,
    /// Pattern override; the locale's default pattern when `None`.
    pub pattern: Option<String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl FormatOptions {
    pub fn new(locale: impl Into<String>) -> Self {
        FormatOptions {
            locale: locale.into(),
            pattern: None,
        }
    }

    pub fn with_pattern(self, pattern: impl Into<String>) -> Self {
        FormatOptions {
            pattern: Some(pattern.into()),
            ..self
        }
    }
}
