//! Matching of unordered set elements in flattened state.
//!
//! Flattened state maps dotted paths to scalar strings. Set elements are stored
//! under identifiers (often hashes) that are not stable, so a caller cannot
//! address "the element with key `Name`" by index. The functions here resolve a
//! pattern ending in the wildcard sentinel against every candidate identifier
//! present in the state:
//!
//! - [`match_value`]: an element whose scalar value equals the expected value.
//! - [`match_nested_attrs`]: an element that is an object whose nested
//!   attributes all equal the expected ones.
//! - [`match_attribute_pair`]: an element equal to the value at an exact key of
//!   a second flattened state.
//!
//! All three are pure, single pass and read-only over their inputs.
//!
//! ```rust
//! use setmatch::matcher::{FlatMap, match_value};
//!
//! let state: FlatMap = [("zones.0", "us-east-1a"), ("zones.1", "us-east-1b")]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//!
//! assert!(match_value(&state, "zones.*", "us-east-1b").is_ok());
//! assert!(match_value(&state, "zones.*", "us-east-1c").unwrap_err().is_not_found());
//! ```

use std::collections::BTreeMap;

mod errors;
mod nested;
mod pair;
mod value;

pub use errors::MatchError;
pub use nested::match_nested_attrs;
pub use pair::match_attribute_pair;
pub use value::match_value;

/// Flattened attribute state: dotted path to scalar value.
pub type FlatMap = BTreeMap<String, String>;

/// Expected nested attributes of one set element, keyed by the path suffix
/// after the wildcard.
pub type ExpectedAttrs = BTreeMap<String, String>;
