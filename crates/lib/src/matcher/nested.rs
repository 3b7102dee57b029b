use std::collections::HashMap;

use tracing::{debug, trace, warn};

use super::{ExpectedAttrs, FlatMap, MatchError};
use crate::{
    constants::{MIN_NESTED_KEY_SEGMENTS, SEPARATOR},
    path::{AttributePath, split_key},
};

/// Matched constraint count for one candidate element.
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    matched: usize,
}

/// Verifies that some element of the set at `pattern` is an object whose
/// nested attributes equal every non-empty entry of `expected`.
///
/// Keys of `expected` are attribute paths relative to the element, e.g. `key`
/// for `tags.*` resolving `tags.0.key`, or `rule.port` for `tags.0.rule.port`.
///
/// Entries with an empty expected value are ignored: they are neither required
/// nor compared, so an unset attribute cannot be told apart from one set to the
/// empty string. At least one entry must be non-empty.
///
/// If `expected` is not specific enough, the match may land on an element other
/// than the one intended.
///
/// # Errors
/// - [`MatchError::PatternFormat`] if `pattern` does not end with `*`.
/// - [`MatchError::AmbiguousInput`] if every expected value is empty.
/// - [`MatchError::NestedAttrsNotFound`] if no single element satisfies all of
///   the non-empty expectations.
pub fn match_nested_attrs(
    state: &FlatMap,
    pattern: &str,
    expected: &ExpectedAttrs,
) -> Result<(), MatchError> {
    let path = AttributePath::parse(pattern)?;

    let required = expected.values().filter(|v| !v.is_empty()).count();
    if required == 0 {
        warn!(pattern, "Rejected nested attribute match with only empty values");
        return Err(MatchError::AmbiguousInput {
            expected: expected.clone(),
        });
    }

    let mut tallies: HashMap<&str, Tally> = HashMap::new();
    for (key, value) in state {
        let key_segments = split_key(key);
        if key_segments.len() < MIN_NESTED_KEY_SEGMENTS || key_segments.len() <= path.len() {
            continue;
        }
        let Some(candidate) = path.matches_prefix(&key_segments) else {
            continue;
        };

        let nested_key = key_segments[path.len()..].join(SEPARATOR.to_string().as_str());
        let Some(want) = expected.get(&nested_key) else {
            continue;
        };
        if want.is_empty() || want != value {
            continue;
        }

        let tally = tallies.entry(candidate).or_default();
        tally.matched += 1;
        trace!(candidate, attr = %nested_key, matched = tally.matched, required, "Nested attribute matched");
        if tally.matched == required {
            debug!(pattern, candidate, "Matched set element nested attributes");
            return Ok(());
        }
    }

    Err(MatchError::NestedAttrsNotFound {
        pattern: pattern.to_string(),
        expected: expected.clone(),
        state: state.clone(),
    })
}
