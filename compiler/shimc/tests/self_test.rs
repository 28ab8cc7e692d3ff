#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
//! Runs the bundled golden fixtures through the self-test harness.

use shimc::selftest::{
    default_fixture_dir, discover_fixtures, run_fixture, run_self_tests, FixtureOutcome,
};

#[test]
fn bundled_fixtures_are_discovered() {
    let fixtures = discover_fixtures(&[default_fixture_dir()]);
    let names: Vec<String> = fixtures
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["ppb_graphics.idl", "ppb_mouse.idl", "ppp_input.idl"]);
}

#[test]
fn every_bundled_fixture_matches_its_golden_file() {
    for fixture in discover_fixtures(&[default_fixture_dir()]) {
        let outcome = run_fixture(&fixture);
        if let FixtureOutcome::Mismatch(diff) = &outcome {
            let rendered: Vec<String> = diff.iter().map(ToString::to_string).collect();
            panic!("{} differs:\n{}", fixture.display(), rendered.join("\n"));
        }
        assert_eq!(outcome, FixtureOutcome::Passed, "{}", fixture.display());
    }
}

#[test]
fn self_test_run_succeeds() {
    let summary = run_self_tests(&[default_fixture_dir()]);
    assert_eq!(summary.results.len(), 3);
    assert_eq!(summary.failed(), 0);
    assert_eq!(summary.exit_code(), 0);
}
