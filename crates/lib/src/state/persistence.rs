//! Persistence operations for ModuleState
//!
//! This module handles serialization and file I/O for saving/loading
//! module state to/from JSON files.

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ModuleState, ResourceState, StateError};

/// The current persistence file format version.
/// v0 indicates this is an unstable format subject to breaking changes.
const PERSISTENCE_VERSION: u8 = 0;

/// Helper to check if version is default (0) for serde skip_serializing_if
fn is_v0(v: &u8) -> bool {
    *v == 0
}

fn default_module_path() -> String {
    super::ROOT_MODULE.to_string()
}

/// Validates the persistence version during deserialization.
fn validate_persistence_version<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let version = u8::deserialize(deserializer)?;
    if version != PERSISTENCE_VERSION {
        return Err(serde::de::Error::custom(format!(
            "unsupported persistence version {version}; only version {PERSISTENCE_VERSION} is supported"
        )));
    }
    Ok(version)
}

/// On-disk form of a module.
#[derive(Serialize, Deserialize)]
struct SerializableModule {
    /// File format version for compatibility checking
    #[serde(
        rename = "_v",
        default,
        skip_serializing_if = "is_v0",
        deserialize_with = "validate_persistence_version"
    )]
    version: u8,
    #[serde(default = "default_module_path")]
    path: String,
    #[serde(default)]
    resources: BTreeMap<String, ResourceState>,
}

impl Serialize for ModuleState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SerializableModule {
            version: PERSISTENCE_VERSION,
            path: self.path.clone(),
            resources: self.resources.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ModuleState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Version validation happens via deserialize_with on SerializableModule._v
        let serializable = SerializableModule::deserialize(deserializer)?;
        Ok(ModuleState {
            path: serializable.path,
            resources: serializable.resources,
        })
    }
}

/// Parses module state from a JSON string.
pub(crate) fn from_json_str(json: &str) -> Result<ModuleState, StateError> {
    serde_json::from_str(json).map_err(|source| StateError::DeserializationFailed { source })
}

/// Saves the module state to a specified file as pretty-printed JSON.
pub(crate) fn save_to_file<P: AsRef<Path>>(state: &ModuleState, path: P) -> Result<(), StateError> {
    let json = serde_json::to_string_pretty(state)
        .map_err(|source| StateError::SerializationFailed { source })?;
    std::fs::write(path, json).map_err(|source| StateError::FileIo { source })
}

/// Loads module state from a specified JSON file.
///
/// A missing file is reported as [`StateError::FileIo`].
pub(crate) fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ModuleState, StateError> {
    let json = std::fs::read_to_string(path).map_err(|source| StateError::FileIo { source })?;
    from_json_str(&json)
}
