//! Wildcard attribute paths.
//!
//! An [`AttributePath`] is a pattern such as `tags.*` used to address an element
//! of an unordered set in flattened state. Set elements have no stable index, so
//! the final segment is a placeholder that accepts whatever identifier the
//! flattened key carries at that position.
//!
//! Only the final segment can be a wildcard. A `*` anywhere else in the pattern
//! is compared literally.
//!
//! # Usage
//!
//! ```rust
//! use setmatch::path::AttributePath;
//!
//! let path = AttributePath::parse("tags.*")?;
//! assert_eq!(path.matches_prefix(&["tags", "0", "key"]), Some("0"));
//! assert_eq!(path.matches_prefix(&["labels", "0", "key"]), None);
//! # Ok::<(), setmatch::matcher::MatchError>(())
//! ```
//!
//! Unlike document paths, attribute paths are never normalized: `a..*` has an
//! empty middle segment and only matches keys with one as well.

use std::fmt;

use crate::{
    constants::{SENTINEL, SEPARATOR},
    matcher::MatchError,
};

/// A single segment of an [`AttributePath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Must equal the key segment at the same position.
    Literal(String),
    /// Accepts any key segment at this position.
    Wildcard,
}

impl Segment {
    /// Returns `true` if this segment accepts the given key segment.
    pub fn accepts(&self, key_segment: &str) -> bool {
        match self {
            Segment::Literal(literal) => literal == key_segment,
            Segment::Wildcard => true,
        }
    }

    /// Returns `true` for the wildcard placeholder.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(literal) => f.write_str(literal),
            Segment::Wildcard => f.write_str(SENTINEL),
        }
    }
}

/// A parsed pattern ending in the wildcard sentinel.
///
/// Construction guarantees the last segment is [`Segment::Wildcard`] and no
/// other segment is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributePath {
    segments: Vec<Segment>,
}

impl AttributePath {
    /// Parses a pattern string.
    ///
    /// # Errors
    /// Returns [`MatchError::PatternFormat`] if the final segment is not the
    /// sentinel, which includes the empty pattern.
    pub fn parse(pattern: &str) -> Result<Self, MatchError> {
        let parts: Vec<&str> = pattern.split(SEPARATOR).collect();
        let Some((last, init)) = parts.split_last() else {
            return Err(MatchError::pattern_format(pattern));
        };
        if *last != SENTINEL {
            return Err(MatchError::pattern_format(pattern));
        }

        let mut segments: Vec<Segment> = init
            .iter()
            .map(|part| Segment::Literal((*part).to_string()))
            .collect();
        segments.push(Segment::Wildcard);
        Ok(Self { segments })
    }

    /// Returns the parsed segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments, including the trailing wildcard.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; a parsed path has at least the wildcard segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Position of the wildcard segment.
    pub fn wildcard_index(&self) -> usize {
        self.segments.len() - 1
    }

    /// Compares the leading segments of a key against this path.
    ///
    /// Returns the candidate identifier, the key segment under the wildcard,
    /// when every pattern segment accepts its key segment. Stops at the first
    /// literal mismatch. Keys shorter than the pattern never match.
    pub fn matches_prefix<'k>(&self, key_segments: &[&'k str]) -> Option<&'k str> {
        if key_segments.len() < self.segments.len() {
            return None;
        }

        let mut candidate = None;
        for (segment, key_segment) in self.segments.iter().zip(key_segments) {
            if !segment.accepts(key_segment) {
                return None;
            }
            if segment.is_wildcard() {
                candidate = Some(*key_segment);
            }
        }
        candidate
    }

    /// Like [`matches_prefix`](Self::matches_prefix), but the key must have
    /// exactly as many segments as the pattern.
    pub fn matches_exact<'k>(&self, key_segments: &[&'k str]) -> Option<&'k str> {
        if key_segments.len() != self.segments.len() {
            return None;
        }
        self.matches_prefix(key_segments)
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Splits a flat key into its segments.
pub fn split_key(key: &str) -> Vec<&str> {
    key.split(SEPARATOR).collect()
}
