use setmatch::{MatchError, match_value};

use crate::helpers::*;

#[test]
fn test_value_present_in_set() {
    let state = zones_state();

    assert!(match_value(&state, "zones.*", "us-east-1b").is_ok());
    assert!(match_value(&state, "zones.*", "us-east-1a").is_ok());
}

#[test]
fn test_value_absent_from_set() {
    let state = zones_state();

    let err = match_value(&state, "zones.*", "us-east-1c").unwrap_err();
    assert!(err.is_not_found());
    match err {
        MatchError::ValueNotFound {
            pattern,
            value,
            state: scanned,
        } => {
            assert_eq!(pattern, "zones.*");
            assert_eq!(value, "us-east-1c");
            assert_eq!(scanned, state);
        }
        other => panic!("Expected ValueNotFound, got: {other:?}"),
    }
}

#[test]
fn test_value_requires_exact_length() {
    let state = flat(&[("zones.0.sub", "us-east-1b")]);

    let err = match_value(&state, "zones.*", "us-east-1b").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_value_requires_literal_prefix() {
    let state = flat(&[("regions.0", "us-east-1b"), ("zone.0", "us-east-1b")]);

    let err = match_value(&state, "zones.*", "us-east-1b").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_value_in_hashed_set() {
    let state = sample_module();
    let attrs = state
        .resource("aws_autoscaling_group.bar")
        .and_then(|rs| rs.primary.as_ref())
        .map(|instance| &instance.attributes)
        .unwrap();

    assert!(match_value(attrs, "availability_zones.*", "us-west-2a").is_ok());
    assert!(match_value(attrs, "availability_zones.*", "us-west-2b").is_ok());
    assert!(
        match_value(attrs, "availability_zones.*", "us-west-2c")
            .unwrap_err()
            .is_not_found()
    );

    // The wildcard accepts any segment, including the `#` count entry
    assert!(match_value(attrs, "availability_zones.*", "2").is_ok());
}

#[test]
fn test_value_in_nested_set() {
    let state = security_group_state();

    assert!(match_value(&state, "ingress.2541437006.cidr_blocks.*", "0.0.0.0/0").is_ok());
    assert!(
        match_value(&state, "ingress.3984623157.cidr_blocks.*", "0.0.0.0/0")
            .unwrap_err()
            .is_not_found()
    );
}

#[test]
fn test_value_empty_string_element() {
    let state = flat(&[("names.0", "")]);

    assert!(match_value(&state, "names.*", "").is_ok());
    assert!(match_value(&flat(&[]), "names.*", "").unwrap_err().is_not_found());
}

#[test]
fn test_value_pattern_without_wildcard() {
    let state = zones_state();

    for pattern in ["zones", "zones.0", "zones.*.name", ""] {
        let err = match_value(&state, pattern, "us-east-1a").unwrap_err();
        assert!(err.is_pattern_error(), "{pattern:?} should be rejected");
        assert_eq!(err.pattern(), Some(pattern));
    }

    // Rejected regardless of state contents
    let err = match_value(&flat(&[]), "zones.0", "x").unwrap_err();
    assert!(err.is_pattern_error());
}

#[test]
fn test_value_pattern_error_message() {
    let err = match_value(&zones_state(), "zones", "x").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#""zones" does not end with the special value "*""#
    );
}

#[test]
fn test_value_sentinel_only_wildcard_at_end() {
    let state = flat(&[("a.*.0", "v"), ("a.b.0", "w")]);

    assert!(match_value(&state, "a.*.*", "v").is_ok());
    assert!(match_value(&state, "a.*.*", "w").unwrap_err().is_not_found());
}

#[test]
fn test_value_deterministic() {
    let state = zones_state();

    for _ in 0..10 {
        assert!(match_value(&state, "zones.*", "us-east-1b").is_ok());
        assert!(match_value(&state, "zones.*", "nope").is_err());
    }
}
