//! Common error infrastructure for combat-core.
//!
//! Domain-specific errors (`WindowError`, `MoveError`, `ComboError`) live next
//! to the types they validate. This module holds what they share.
//!
//! # Design Principles
//!
//! - **Fail fast at build time**: malformed windows, empty ids and dangling
//!   transition targets are rejected by constructors, never at first use
//! - **Total runtime queries**: "nothing matched" is `None`/`false`, not an error
//! - **Severity Classification**: errors are categorized for loader reporting

/// Severity level of an error, used for categorization and reporting.
///
/// - **Validation**: a single authored value is wrong and can be fixed in data
/// - **Fatal**: the catalog or graph cannot be published; initialization must abort
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid authored input that should be corrected and reloaded.
    ///
    /// Examples: unparsable chord description, bad slot index
    Validation,

    /// Construction cannot proceed.
    ///
    /// Examples: inverted time window, transition to an unregistered node
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if initialization must abort.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all combat-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Error codes are stable SCREAMING_SNAKE identifiers for logs and tests
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert!(ErrorSeverity::Fatal.is_fatal());
        assert!(!ErrorSeverity::Validation.is_fatal());
    }
}
