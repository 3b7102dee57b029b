//! Resource state lookup.
//!
//! The matchers operate on a [`FlatMap`] and know nothing about where it came
//! from. This module provides the [`StateProvider`] capability that resolves a
//! resource name to the flattened attributes of its primary instance, and
//! [`ModuleState`], an in-memory provider that can be persisted as JSON.
//!
//! A state file looks like:
//!
//! ```json
//! {
//!   "path": "root",
//!   "resources": {
//!     "aws_instance.web": {
//!       "primary": {
//!         "id": "i-0abc",
//!         "attributes": { "tags.%": "1", "tags.Name": "web" }
//!       }
//!     }
//!   }
//! }
//! ```

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::matcher::FlatMap;

mod errors;
mod persistence;

pub use errors::StateError;

/// Path of the root module.
pub const ROOT_MODULE: &str = "root";

/// Resolves resource names to flattened instance attributes.
///
/// Implementations must be `Send` and `Sync` so that checks can run from
/// several threads against the same state. The returned map must not change
/// while it is borrowed.
pub trait StateProvider: Send + Sync {
    /// Returns the attributes of the primary instance of `resource`.
    ///
    /// # Errors
    /// - [`StateError::ResourceNotFound`] if no such resource exists.
    /// - [`StateError::NoPrimaryInstance`] if it exists without a primary instance.
    fn instance_attributes(&self, resource: &str) -> Result<&FlatMap, StateError>;
}

/// A single instance of a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceState {
    /// Provider-assigned identifier of the instance.
    #[serde(default)]
    pub id: String,
    /// Flattened attributes of the instance.
    #[serde(default)]
    pub attributes: FlatMap,
}

impl InstanceState {
    /// Creates an instance from an id and attribute pairs.
    pub fn new<K, V>(id: impl Into<String>, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            id: id.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A named resource, possibly without a primary instance (e.g. mid-replacement).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<InstanceState>,
}

/// In-memory state of a single module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleState {
    pub(crate) path: String,
    pub(crate) resources: BTreeMap<String, ResourceState>,
}

impl ModuleState {
    /// Creates an empty root module.
    pub fn new() -> Self {
        Self::with_path(ROOT_MODULE)
    }

    /// Creates an empty module with the given path.
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            resources: BTreeMap::new(),
        }
    }

    /// Returns the module path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Inserts or replaces a resource, returning the previous one.
    pub fn insert_resource(
        &mut self,
        name: impl Into<String>,
        resource: ResourceState,
    ) -> Option<ResourceState> {
        self.resources.insert(name.into(), resource)
    }

    /// Inserts a resource whose primary instance is `instance`.
    pub fn insert_instance(
        &mut self,
        name: impl Into<String>,
        instance: InstanceState,
    ) -> Option<ResourceState> {
        self.insert_resource(
            name,
            ResourceState {
                primary: Some(instance),
            },
        )
    }

    /// Looks up a resource by name.
    pub fn resource(&self, name: &str) -> Option<&ResourceState> {
        self.resources.get(name)
    }

    /// Returns all resource names in order.
    pub fn resource_names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// Number of resources in the module.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns `true` if the module has no resources.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Parses module state from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, StateError> {
        persistence::from_json_str(json)
    }

    /// Saves the module state to a specified file as JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), StateError> {
        persistence::save_to_file(self, path)
    }

    /// Loads module state from a specified JSON file.
    ///
    /// # Errors
    /// Returns [`StateError::FileIo`] if the file cannot be read and
    /// [`StateError::DeserializationFailed`] if it is not valid state.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StateError> {
        persistence::load_from_file(path)
    }
}

impl Default for ModuleState {
    fn default() -> Self {
        Self::new()
    }
}

impl StateProvider for ModuleState {
    fn instance_attributes(&self, resource: &str) -> Result<&FlatMap, StateError> {
        let rs = self
            .resources
            .get(resource)
            .ok_or_else(|| StateError::ResourceNotFound {
                name: resource.to_string(),
                module: self.path.clone(),
            })?;

        rs.primary
            .as_ref()
            .map(|instance| &instance.attributes)
            .ok_or_else(|| StateError::NoPrimaryInstance {
                name: resource.to_string(),
                module: self.path.clone(),
            })
    }
}
