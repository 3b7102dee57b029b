//! Assertions over named resources.
//!
//! A [`Check`] ties a matcher to resource names: it resolves each resource
//! through a [`StateProvider`] and runs the matcher over the flattened
//! attributes. Lookup errors pass through untouched; matcher errors are
//! attributed to the resource they concern.
//!
//! Checks deserialize from JSON, tagged by `type`:
//!
//! ```rust
//! use setmatch::{
//!     check::Check,
//!     state::{InstanceState, ModuleState},
//! };
//!
//! let mut state = ModuleState::new();
//! state.insert_instance(
//!     "aws_security_group.web",
//!     InstanceState::new("sg-1", [("ingress.1234.from_port", "443"), ("ingress.1234.protocol", "tcp")]),
//! );
//!
//! let check: Check = serde_json::from_str(
//!     r#"{
//!         "type": "elem_nested_attrs",
//!         "resource": "aws_security_group.web",
//!         "attr": "ingress.*",
//!         "values": { "from_port": "443", "protocol": "tcp" }
//!     }"#,
//! )?;
//! assert!(check.run(&state).is_ok());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    matcher::{self, ExpectedAttrs},
    state::StateProvider,
};

mod errors;

pub use errors::CheckError;

/// A single assertion about set elements of one or two resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Check {
    /// Some scalar element of `attr` in `resource` equals `value`.
    ElemAttr {
        resource: String,
        attr: String,
        value: String,
    },
    /// Some object element of `attr` in `resource` has all of `values`.
    ElemNestedAttrs {
        resource: String,
        attr: String,
        values: ExpectedAttrs,
    },
    /// The value at `second_key` of `second` is an element of `first_key` in `first`.
    ///
    /// E.g. `first_key = "availability_zones.*"` against
    /// `second_key = "names.0"` of an availability zones data source.
    ElemAttrPair {
        first: String,
        first_key: String,
        second: String,
        second_key: String,
    },
}

impl Check {
    /// Evaluates the check against `state`.
    ///
    /// # Errors
    /// - [`StateError`](crate::state::StateError) if a resource cannot be resolved.
    /// - [`CheckError::Resource`] wrapping the matcher failure otherwise.
    pub fn run<P: StateProvider + ?Sized>(&self, state: &P) -> Result<()> {
        match self {
            Check::ElemAttr {
                resource,
                attr,
                value,
            } => {
                let attrs = state.instance_attributes(resource)?;
                matcher::match_value(attrs, attr, value)
                    .map_err(|e| CheckError::resource(resource, e))?;
            }
            Check::ElemNestedAttrs {
                resource,
                attr,
                values,
            } => {
                let attrs = state.instance_attributes(resource)?;
                matcher::match_nested_attrs(attrs, attr, values)
                    .map_err(|e| CheckError::resource(resource, e))?;
            }
            Check::ElemAttrPair {
                first,
                first_key,
                second,
                second_key,
            } => {
                let first_attrs = state.instance_attributes(first)?;
                let second_attrs = state.instance_attributes(second)?;
                matcher::match_attribute_pair(first_attrs, first_key, second_attrs, second_key)
                    .map_err(|e| {
                        if e.is_attribute_not_set() {
                            CheckError::resource(second, e)
                        } else {
                            CheckError::resource(first, e)
                        }
                    })?;
            }
        }
        debug!(check = %self.describe(), "Check passed");
        Ok(())
    }

    /// Names of the resources this check reads.
    pub fn resources(&self) -> Vec<&str> {
        match self {
            Check::ElemAttr { resource, .. } | Check::ElemNestedAttrs { resource, .. } => {
                vec![resource.as_str()]
            }
            Check::ElemAttrPair { first, second, .. } => vec![first.as_str(), second.as_str()],
        }
    }

    /// One-line human readable label.
    pub fn describe(&self) -> String {
        match self {
            Check::ElemAttr {
                resource,
                attr,
                value,
            } => format!("{resource} {attr} = {value:?}"),
            Check::ElemNestedAttrs {
                resource,
                attr,
                values,
            } => {
                let pairs: Vec<String> = values.iter().map(|(k, v)| format!("{k}={v:?}")).collect();
                format!("{resource} {attr} {{{}}}", pairs.join(", "))
            }
            Check::ElemAttrPair {
                first,
                first_key,
                second,
                second_key,
            } => format!("{first} {first_key} = {second} {second_key}"),
        }
    }
}

/// Result of evaluating one check as part of [`run_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// Label from [`Check::describe`]
    pub check: String,
    pub passed: bool,
    /// Error message when the check failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Evaluates every check independently; a failing check does not stop the rest.
pub fn run_all<P: StateProvider + ?Sized>(checks: &[Check], state: &P) -> Vec<CheckOutcome> {
    checks
        .iter()
        .map(|check| {
            let result = check.run(state);
            CheckOutcome {
                check: check.describe(),
                passed: result.is_ok(),
                error: result.err().map(|e| e.to_string()),
            }
        })
        .collect()
}
