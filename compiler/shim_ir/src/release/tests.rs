use super::*;

fn chrome() -> ReleaseTable {
    let mut table = ReleaseTable::new("Chrome");
    table.push(Release::new("M13", Version::new(0, 5)));
    table.push(Release::new("M14", Version::new(1, 0)));
    table.push(Release::new("M15", Version::new(1, 1)));
    table
}

#[test]
fn test_resolve_keeps_request_order_and_drops_unknown() {
    let table = chrome();
    let resolved = table.resolve(&["M15", "M99", "M13"]);
    let names: Vec<&str> = resolved.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["M15", "M13"]);
}

#[test]
fn test_first_version() {
    assert_eq!(chrome().first_version(), Some(Version::new(0, 5)));
    assert_eq!(ReleaseTable::new("Empty").first_version(), None);
}

#[test]
fn test_availability_half_open() {
    let table = chrome();
    let avail = Availability::new(Some(Version::new(1, 0)), Some(Version::new(1, 1)));
    let at = |name: &str| avail.is_available_at(table.get(name).unwrap());
    assert!(!at("M13"));
    assert!(at("M14"));
    assert!(!at("M15"));
}

#[test]
fn test_availability_open_bounds() {
    let release = Release::new("M99", Version::new(42, 0));
    assert!(Availability::default().is_available_at(&release));
    assert!(Availability::new(None, Some(Version::new(50, 0))).is_available_at(&release));
    assert!(!Availability::new(None, Some(Version::new(1, 0))).is_available_at(&release));
}

#[test]
fn test_change_points() {
    let avail = Availability::new(Some(Version::new(0, 5)), Some(Version::new(2, 0)));
    let points: Vec<Version> = avail.change_points().collect();
    assert_eq!(points, vec![Version::new(0, 5), Version::new(2, 0)]);
    assert_eq!(Availability::default().change_points().count(), 0);
}

#[test]
fn test_availability_overlaps() {
    let v = Version::new;
    let early = Availability::new(None, Some(v(1, 0)));
    let late = Availability::new(Some(v(1, 0)), None);
    assert!(!early.overlaps(&late));
    assert!(!late.overlaps(&early));
    assert!(Availability::default().overlaps(&late));
    let middle = Availability::new(Some(v(0, 5)), Some(v(1, 1)));
    assert!(middle.overlaps(&late));
    assert!(middle.overlaps(&early));
}
