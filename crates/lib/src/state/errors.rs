//! State lookup error types.
//!
//! These errors come from locating the flattened attributes of a resource.
//! Callers surface them verbatim; the matchers never interpret them.

use thiserror::Error;

/// Errors that can occur while resolving resource state.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StateError {
    /// No resource with this name exists in the module.
    #[error("Not found: {name} in {module}")]
    ResourceNotFound {
        /// Name of the requested resource
        name: String,
        /// Path of the module that was searched
        module: String,
    },

    /// The resource exists but has no primary instance.
    #[error("No primary instance: {name} in {module}")]
    NoPrimaryInstance {
        /// Name of the requested resource
        name: String,
        /// Path of the module that was searched
        module: String,
    },

    /// Reading or writing a state file failed.
    #[error("State file I/O error: {source}")]
    FileIo {
        #[source]
        source: std::io::Error,
    },

    /// State could not be serialized.
    #[error("State serialization failed: {source}")]
    SerializationFailed {
        #[source]
        source: serde_json::Error,
    },

    /// State could not be deserialized, including unsupported format versions.
    #[error("State deserialization failed: {source}")]
    DeserializationFailed {
        #[source]
        source: serde_json::Error,
    },
}

impl StateError {
    /// Check if the requested resource or its instance is missing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StateError::ResourceNotFound { .. } | StateError::NoPrimaryInstance { .. }
        )
    }

    /// Check if this error came from reading or writing a file
    pub fn is_io_error(&self) -> bool {
        matches!(self, StateError::FileIo { .. })
    }

    /// Check if this error came from (de)serialization
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            StateError::SerializationFailed { .. } | StateError::DeserializationFailed { .. }
        )
    }

    /// Get the resource name if this is a lookup error
    pub fn resource(&self) -> Option<&str> {
        match self {
            StateError::ResourceNotFound { name, .. }
            | StateError::NoPrimaryInstance { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl From<StateError> for crate::Error {
    fn from(err: StateError) -> Self {
        crate::Error::State(err)
    }
}
