//! This module defines logic to serialize/deserialize problem in pragmatic format from json input
//! and to create and write pragmatic solution.

#[cfg(test)]
#[path = "../../tests/unit/format/format_test.rs"]
mod format_test;

use haulage_core::utils::GenericError;
use serde::Serialize;
use std::fmt;

pub mod problem;
pub mod solution;

/// A format error.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` without details.
    pub fn new(code: impl Into<String>, cause: impl Into<String>, action: impl Into<String>) -> Self {
        Self { code: code.into(), cause: cause.into(), action: action.into(), details: None }
    }

    /// Creates a new instance of `FormatError` with details.
    pub fn new_with_details(
        code: impl Into<String>,
        cause: impl Into<String>,
        action: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self { code: code.into(), cause: cause.into(), action: action.into(), details: Some(details.into()) }
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)
    }
}

impl std::error::Error for FormatError {}

/// Keeps multiple format errors.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiFormatError {
    /// Inner errors.
    pub errors: Vec<FormatError>,
}

impl MultiFormatError {
    /// Returns error codes.
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|err| err.code.as_str()).collect()
    }

    /// Formats errors into a string using given separator.
    pub fn format_many(&self, separator: &str) -> String {
        self.errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join(separator)
    }

    /// Serializes errors into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.errors).unwrap_or_else(|_| self.format_many("\n"))
    }
}

impl From<Vec<FormatError>> for MultiFormatError {
    fn from(errors: Vec<FormatError>) -> Self {
        Self { errors }
    }
}

impl From<FormatError> for MultiFormatError {
    fn from(error: FormatError) -> Self {
        Self { errors: vec![error] }
    }
}

impl fmt::Display for MultiFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_many("\n"))
    }
}

impl std::error::Error for MultiFormatError {}

impl From<MultiFormatError> for GenericError {
    fn from(error: MultiFormatError) -> Self {
        GenericError::from(format!("problem has the following errors:\n{}", error.format_many("\n")))
    }
}
