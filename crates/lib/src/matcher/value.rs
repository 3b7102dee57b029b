use tracing::debug;

use super::{FlatMap, MatchError};
use crate::path::{AttributePath, split_key};

/// Verifies that some scalar element of the set at `pattern` equals `expected`.
///
/// Only keys with exactly as many segments as the pattern are considered, so
/// `zones.*` matches `zones.0` but never `zones.0.name`.
///
/// # Errors
/// - [`MatchError::PatternFormat`] if `pattern` does not end with `*`.
/// - [`MatchError::ValueNotFound`] if no element holds `expected`.
pub fn match_value(state: &FlatMap, pattern: &str, expected: &str) -> Result<(), MatchError> {
    let path = AttributePath::parse(pattern)?;

    let found = state
        .iter()
        .filter(|(_, value)| value.as_str() == expected)
        .find_map(|(key, _)| path.matches_exact(&split_key(key)).map(|id| (key, id)));

    match found {
        Some((key, id)) => {
            debug!(pattern, key = %key, candidate = id, "Matched set element value");
            Ok(())
        }
        None => Err(MatchError::ValueNotFound {
            pattern: pattern.to_string(),
            value: expected.to_string(),
            state: state.clone(),
        }),
    }
}
