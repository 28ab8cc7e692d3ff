use super::*;

#[test]
fn test_as_str_matches_debug() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str(), format!("{code:?}"));
    }
}

#[test]
fn test_parse_round_trips_every_code() {
    for code in ErrorCode::ALL {
        assert_eq!(ErrorCode::parse(code.as_str()), Some(*code));
    }
    assert_eq!(ErrorCode::parse("e1001"), Some(ErrorCode::E1001));
    assert_eq!(ErrorCode::parse("E9999"), None);
}

#[test]
fn test_descriptions_are_nonempty() {
    for code in ErrorCode::ALL {
        assert!(!code.description().is_empty(), "{code} has no description");
    }
}
