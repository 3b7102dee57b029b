use super::{FlatMap, MatchError, match_value};

/// Verifies that the value at `key_b` of `state_b` is an element of the set at
/// `pattern_a` in `state_a`.
///
/// # Errors
/// - [`MatchError::AttributeNotSet`] if `key_b` is absent from `state_b`.
/// - Any error of [`match_value`], unchanged.
pub fn match_attribute_pair(
    state_a: &FlatMap,
    pattern_a: &str,
    state_b: &FlatMap,
    key_b: &str,
) -> Result<(), MatchError> {
    let value = state_b
        .get(key_b)
        .ok_or_else(|| MatchError::AttributeNotSet {
            key: key_b.to_string(),
        })?;

    match_value(state_a, pattern_a, value)
}
