use setmatch::{MatchError, match_nested_attrs};

use crate::helpers::*;

// ===== BASIC MATCHING =====

#[test]
fn test_nested_all_attrs_match() {
    let state = tags_state();

    let result = match_nested_attrs(&state, "tags.*", &expected(&[("key", "Name"), ("value", "foo")]));
    assert!(result.is_ok());

    let result = match_nested_attrs(&state, "tags.*", &expected(&[("key", "Env"), ("value", "prod")]));
    assert!(result.is_ok());
}

#[test]
fn test_nested_value_mismatch() {
    let state = tags_state();
    let want = expected(&[("key", "Name"), ("value", "bar")]);

    let err = match_nested_attrs(&state, "tags.*", &want).unwrap_err();
    assert!(err.is_not_found());
    match err {
        MatchError::NestedAttrsNotFound {
            pattern,
            expected: reported,
            state: scanned,
        } => {
            assert_eq!(pattern, "tags.*");
            assert_eq!(reported, want);
            assert_eq!(scanned, state);
        }
        other => panic!("Expected NestedAttrsNotFound, got: {other:?}"),
    }
}

#[test]
fn test_nested_single_requirement() {
    let state = tags_state();

    assert!(match_nested_attrs(&state, "tags.*", &expected(&[("key", "Name")])).is_ok());
    assert!(match_nested_attrs(&state, "tags.*", &expected(&[("value", "prod")])).is_ok());
}

#[test]
fn test_nested_attrs_must_share_one_element() {
    let state = tags_state();

    // key of element 0 with value of element 1
    let err = match_nested_attrs(&state, "tags.*", &expected(&[("key", "Name"), ("value", "prod")]))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_nested_unknown_attr_never_matches() {
    let state = tags_state();

    let err = match_nested_attrs(&state, "tags.*", &expected(&[("key", "Name"), ("owner", "me")]))
        .unwrap_err();
    assert!(err.is_not_found());
}

// ===== HASHED SETS AND DEEP ATTRIBUTES =====

#[test]
fn test_nested_hashed_set_elements() {
    let state = security_group_state();

    let want = expected(&[("from_port", "443"), ("to_port", "443"), ("protocol", "tcp")]);
    assert!(match_nested_attrs(&state, "ingress.*", &want).is_ok());

    let want = expected(&[("from_port", "443"), ("description", "internal")]);
    assert!(
        match_nested_attrs(&state, "ingress.*", &want)
            .unwrap_err()
            .is_not_found()
    );
}

#[test]
fn test_nested_multi_segment_attrs() {
    let state = security_group_state();

    let want = expected(&[("from_port", "80"), ("cidr_blocks.0", "10.0.0.0/8")]);
    assert!(match_nested_attrs(&state, "ingress.*", &want).is_ok());

    let want = expected(&[("from_port", "80"), ("cidr_blocks.0", "0.0.0.0/0")]);
    assert!(match_nested_attrs(&state, "ingress.*", &want).is_err());
}

#[test]
fn test_nested_deeper_pattern() {
    let state = flat(&[
        ("rule.0.port.17.number", "22"),
        ("rule.0.port.17.proto", "tcp"),
        ("rule.1.port.17.number", "53"),
        ("rule.1.port.17.proto", "udp"),
    ]);

    let want = expected(&[("number", "53"), ("proto", "udp")]);
    assert!(match_nested_attrs(&state, "rule.1.port.*", &want).is_ok());
    assert!(match_nested_attrs(&state, "rule.0.port.*", &want).is_err());
}

#[test]
fn test_nested_short_keys_are_skipped() {
    // A nested attribute needs at least container.id.attr
    let state = flat(&[("a.b", "x")]);

    let err = match_nested_attrs(&state, "*", &expected(&[("b", "x")])).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_nested_scalar_elements_are_not_attributes() {
    let state = flat(&[("outer.tags.0", "x")]);

    let err = match_nested_attrs(&state, "outer.tags.*", &expected(&[("", "x")])).unwrap_err();
    assert!(err.is_not_found());
}

// ===== EMPTY VALUE SEMANTICS =====

#[test]
fn test_nested_empty_values_are_ignored() {
    let state = security_group_state();

    // description is "" on one element and "internal" on the other; both match
    let want = expected(&[("from_port", "80"), ("description", "")]);
    assert!(match_nested_attrs(&state, "ingress.*", &want).is_ok());

    let want = expected(&[("from_port", "443"), ("description", "")]);
    assert!(match_nested_attrs(&state, "ingress.*", &want).is_ok());

    // an attribute that does not exist at all is not verified either
    let want = expected(&[("from_port", "443"), ("self", "")]);
    assert!(match_nested_attrs(&state, "ingress.*", &want).is_ok());
}

#[test]
fn test_nested_all_empty_is_ambiguous() {
    let want = expected(&[("key", ""), ("value", "")]);

    let err = match_nested_attrs(&tags_state(), "tags.*", &want).unwrap_err();
    assert!(err.is_ambiguous_input());
    assert_eq!(err, MatchError::AmbiguousInput { expected: want.clone() });

    // rejected without looking at the state
    let err = match_nested_attrs(&flat(&[]), "tags.*", &want).unwrap_err();
    assert!(err.is_ambiguous_input());

    let err = match_nested_attrs(&tags_state(), "tags.*", &expected(&[])).unwrap_err();
    assert!(err.is_ambiguous_input());
}

// ===== PATTERN VALIDATION =====

#[test]
fn test_nested_pattern_without_wildcard() {
    let state = tags_state();
    let want = expected(&[("key", "Name")]);

    for pattern in ["tags", "tags.0", "tags.*.key", ""] {
        let err = match_nested_attrs(&state, pattern, &want).unwrap_err();
        assert!(err.is_pattern_error(), "{pattern:?} should be rejected");
    }
}

#[test]
fn test_nested_pattern_checked_before_values() {
    let err = match_nested_attrs(&tags_state(), "tags", &expected(&[("key", "")])).unwrap_err();
    assert!(err.is_pattern_error());
}

#[test]
fn test_nested_inner_sentinel_is_literal() {
    let state = flat(&[("a.*.0.k", "v"), ("a.x.1.k", "w")]);

    assert!(match_nested_attrs(&state, "a.*.*", &expected(&[("k", "v")])).is_ok());
    assert!(match_nested_attrs(&state, "a.*.*", &expected(&[("k", "w")])).is_err());
}

#[test]
fn test_nested_deterministic() {
    let state = security_group_state();
    let want = expected(&[("from_port", "80"), ("protocol", "tcp")]);

    let first = match_nested_attrs(&state, "ingress.*", &want);
    for _ in 0..10 {
        assert_eq!(match_nested_attrs(&state, "ingress.*", &want), first);
    }
    assert!(first.is_ok());
}
