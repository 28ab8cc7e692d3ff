use super::*;

#[test]
fn test_parse_major_minor() {
    assert_eq!(Version::parse("1.0"), Some(Version::new(1, 0)));
    assert_eq!(Version::parse("0.5"), Some(Version::new(0, 5)));
    assert_eq!(Version::parse("2"), Some(Version::new(2, 0)));
}

#[test]
fn test_parse_rejects_malformed() {
    assert_eq!(Version::parse(""), None);
    assert_eq!(Version::parse("1."), None);
    assert_eq!(Version::parse(".1"), None);
    assert_eq!(Version::parse("1.2.3"), None);
    assert_eq!(Version::parse("-1.0"), None);
    assert_eq!(Version::parse("one.two"), None);
}

#[test]
fn test_ordering_is_numeric() {
    assert!(Version::new(1, 10) > Version::new(1, 9));
    assert!(Version::new(2, 0) > Version::new(1, 99));
    assert!(Version::ZERO < Version::new(0, 1));
}

#[test]
fn test_display_and_ident() {
    let v = Version::new(1, 2);
    assert_eq!(v.to_string(), "1.2");
    assert_eq!(v.to_ident(), "1_2");
}
