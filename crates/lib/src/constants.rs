//! Constants used throughout the setmatch library.
//!
//! This module provides central definitions for the flat path format shared by
//! patterns and flattened state keys.

/// Separator between the segments of a flat path, e.g. `tags.0.key`.
pub const SEPARATOR: char = '.';

/// Reserved final pattern segment that matches any single key segment.
pub const SENTINEL: &str = "*";

/// A set or list element with nested attributes is addressed by at least
/// `container.index.attr`.
pub const MIN_NESTED_KEY_SEGMENTS: usize = 3;
