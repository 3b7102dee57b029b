//!
//! setmatch: find elements of unordered sets inside flattened attribute state.
//!
//! Tree-shaped resource state is often flattened into a map from dotted paths to
//! scalar strings, e.g. `tags.0.key = "Name"`. Elements of unordered sets are
//! stored under identifiers that carry no meaning and may change between
//! states, so an assertion such as "some tag has key `Name`" cannot name an
//! index. This library resolves patterns ending in the `*` sentinel against all
//! candidate identifiers instead.
//!
//! ## Core Concepts
//!
//! * **Attribute paths (`path::AttributePath`)**: Parsed patterns whose final segment is a wildcard.
//! * **Matchers (`matcher`)**: Pure functions over a `FlatMap`:
//!     * **`match_value`**: some scalar element equals a value.
//!     * **`match_nested_attrs`**: some object element has all given nested attributes.
//!     * **`match_attribute_pair`**: some element equals the value at an exact key of another map.
//! * **State (`state::StateProvider`)**: Resolves resource names to flattened attributes;
//!   `state::ModuleState` is an in-memory, JSON-persistable implementation.
//! * **Checks (`check::Check`)**: Matchers bound to resource names, evaluated against a provider.

pub mod check;
pub mod constants;
pub mod matcher;
pub mod path;
pub mod state;

pub use check::Check;
pub use matcher::{FlatMap, MatchError, match_attribute_pair, match_nested_attrs, match_value};
pub use state::{ModuleState, StateProvider};

/// Result type used throughout the setmatch library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the setmatch library.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured matcher errors from the matcher module
    #[error(transparent)]
    Match(matcher::MatchError),

    /// Structured state lookup errors from the state module
    #[error(transparent)]
    State(state::StateError),

    /// Structured check errors from the check module
    #[error(transparent)]
    Check(check::CheckError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Match(_) => "matcher",
            Error::State(_) => "state",
            Error::Check(_) => "check",
        }
    }

    /// Check if this error indicates a resource or set element was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Match(match_err) => match_err.is_not_found(),
            Error::State(state_err) => state_err.is_not_found(),
            Error::Check(check_err) => check_err.is_not_found(),
        }
    }

    /// Check if this error was caused by malformed caller input.
    pub fn is_input_error(&self) -> bool {
        let match_err = match self {
            Error::Match(match_err) => match_err,
            Error::Check(check_err) => check_err.match_error(),
            Error::State(_) => return false,
        };
        match_err.is_pattern_error() || match_err.is_ambiguous_input()
    }

    /// Returns the matcher error, looking through check attribution.
    pub fn match_error(&self) -> Option<&MatchError> {
        match self {
            Error::Match(match_err) => Some(match_err),
            Error::Check(check_err) => Some(check_err.match_error()),
            Error::State(_) => None,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::State(state_err) => state_err.is_io_error(),
            _ => false,
        }
    }
}
