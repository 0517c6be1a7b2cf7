//! Common error infrastructure for horde-core.
//!
//! Domain-specific errors (e.g. [`ConfigurationError`], [`StatError`]) live in
//! the modules that produce them. This module provides the shared severity
//! classification and the [`GameError`] trait they all implement.
//!
//! # Design Principles
//!
//! - **Type Safety**: each subsystem has its own error enum
//! - **Severity Classification**: errors are categorized for recovery strategies
//! - **No panics in the step loop**: expected control flow never uses errors
//!
//! [`ConfigurationError`]: crate::spawn::ConfigurationError
//! [`StatError`]: crate::stats::StatError

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: temporary conditions that may succeed on a later step
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that require investigation
/// - **Fatal**: the subsystem cannot continue until it is reconfigured
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - may succeed on a later step.
    ///
    /// Examples: stale actor reference purged lazily
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: NaN scaling factor, inverted interval range
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - subsystem disabled until reconfigured.
    ///
    /// Examples: empty wave table, missing spawn boundary
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug or a dead subsystem.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all horde-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and tests. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
