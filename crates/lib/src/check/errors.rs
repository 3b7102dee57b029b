//! Error types for resource checks.

use thiserror::Error;

use crate::matcher::MatchError;

/// A matcher failure attributed to the resource whose state it concerns.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("{resource:?} error: {source}")]
    Resource {
        /// Resource whose attributes failed to match
        resource: String,
        #[source]
        source: MatchError,
    },
}

impl CheckError {
    pub(crate) fn resource(resource: &str, source: MatchError) -> Self {
        CheckError::Resource {
            resource: resource.to_string(),
            source,
        }
    }

    /// Name of the resource the failure belongs to
    pub fn resource_name(&self) -> &str {
        match self {
            CheckError::Resource { resource, .. } => resource,
        }
    }

    /// The underlying matcher error
    pub fn match_error(&self) -> &MatchError {
        match self {
            CheckError::Resource { source, .. } => source,
        }
    }

    /// Check if no matching set element was found
    pub fn is_not_found(&self) -> bool {
        self.match_error().is_not_found()
    }
}

impl From<CheckError> for crate::Error {
    fn from(err: CheckError) -> Self {
        crate::Error::Check(err)
    }
}
