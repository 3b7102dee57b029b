//! Error types for set element matching.
//!
//! Every failure is reported to the caller as an ordinary result. Pattern and
//! input errors are caller bugs and are raised before the state is scanned;
//! not-found errors carry the full scanned state so a failed assertion can be
//! diagnosed without re-reading it.

use thiserror::Error;

use crate::{
    constants::SENTINEL,
    matcher::{ExpectedAttrs, FlatMap},
};

/// Structured error types for matcher operations.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The pattern's final segment is not the wildcard sentinel.
    #[error("{pattern:?} does not end with the special value {sentinel:?}")]
    PatternFormat {
        /// The offending pattern
        pattern: String,
        /// The sentinel the pattern should end with
        sentinel: &'static str,
    },

    /// Every expected attribute is empty, so nothing can be compared.
    #[error("{expected:?} has no non-empty values")]
    AmbiguousInput {
        /// The rejected expectations
        expected: ExpectedAttrs,
    },

    /// The value to compare against does not exist.
    #[error("attribute {key:?} not set, cannot be checked against a set")]
    AttributeNotSet {
        /// Exact key that was looked up
        key: String,
    },

    /// No scalar set element holds the expected value.
    #[error("no set element {pattern:?}, with value {value:?} in state: {state:?}")]
    ValueNotFound {
        /// Pattern that was resolved
        pattern: String,
        /// Value that was searched for
        value: String,
        /// The full scanned state
        state: FlatMap,
    },

    /// No set element carries all expected nested attributes.
    #[error("no set element {pattern:?}, with nested attrs {expected:?} in state: {state:?}")]
    NestedAttrsNotFound {
        /// Pattern that was resolved
        pattern: String,
        /// Expected nested attributes
        expected: ExpectedAttrs,
        /// The full scanned state
        state: FlatMap,
    },
}

impl MatchError {
    pub(crate) fn pattern_format(pattern: &str) -> Self {
        MatchError::PatternFormat {
            pattern: pattern.to_string(),
            sentinel: SENTINEL,
        }
    }

    /// Check if the pattern itself was malformed
    pub fn is_pattern_error(&self) -> bool {
        matches!(self, MatchError::PatternFormat { .. })
    }

    /// Check if the expected attributes were rejected as ambiguous
    pub fn is_ambiguous_input(&self) -> bool {
        matches!(self, MatchError::AmbiguousInput { .. })
    }

    /// Check if the comparison value was missing
    pub fn is_attribute_not_set(&self) -> bool {
        matches!(self, MatchError::AttributeNotSet { .. })
    }

    /// Check if the scan completed without a matching element
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MatchError::ValueNotFound { .. } | MatchError::NestedAttrsNotFound { .. }
        )
    }

    /// Get the pattern if this error relates to one
    pub fn pattern(&self) -> Option<&str> {
        match self {
            MatchError::PatternFormat { pattern, .. }
            | MatchError::ValueNotFound { pattern, .. }
            | MatchError::NestedAttrsNotFound { pattern, .. } => Some(pattern),
            _ => None,
        }
    }

    /// Get the scanned state if this is a not-found error
    pub fn state(&self) -> Option<&FlatMap> {
        match self {
            MatchError::ValueNotFound { state, .. }
            | MatchError::NestedAttrsNotFound { state, .. } => Some(state),
            _ => None,
        }
    }
}

impl From<MatchError> for crate::Error {
    fn from(err: MatchError) -> Self {
        crate::Error::Match(err)
    }
}
