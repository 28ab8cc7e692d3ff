//! Golden-file self-test.
//!
//! Each fixture `foo.idl` sits next to a checked-in `foo.expected` holding
//! the shim methods the generator must produce for it. Both texts are
//! compared after collapsing whitespace; on mismatch a statement-level diff
//! is reported.

mod diff;

use std::fs;
use std::path::{Path, PathBuf};

use shim_gen::{GenConfig, ShimGenerator};

pub use diff::{diff_statements, DiffLine, DiffTag};

/// Releases every fixture is generated for.
pub const TEST_RELEASES: [&str; 3] = ["M13", "M14", "M15"];

/// Fixtures shipped with this crate.
pub fn default_fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Collapse every whitespace run to one space and trim the ends.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Golden file for a fixture.
pub fn expected_path(fixture: &Path) -> PathBuf {
    fixture.with_extension("expected")
}

/// `.idl` files named directly or found in the given directories (not
/// recursively), sorted and de-duplicated.
pub fn discover_fixtures(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut fixtures = Vec::new();
    for path in paths {
        if path.is_dir() {
            let Ok(entries) = fs::read_dir(path) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_file() && is_idl(&path) {
                    fixtures.push(path);
                }
            }
        } else if is_idl(path) {
            fixtures.push(path.clone());
        }
    }
    fixtures.sort();
    fixtures.dedup();
    fixtures
}

fn is_idl(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "idl")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixtureOutcome {
    Passed,
    /// Output differs from the golden file.
    Mismatch(Vec<DiffLine>),
    /// The fixture could not be run at all.
    Error(String),
}

#[derive(Clone, Debug)]
pub struct FixtureResult {
    pub path: PathBuf,
    pub outcome: FixtureOutcome,
}

#[derive(Clone, Debug, Default)]
pub struct SelfTestSummary {
    pub results: Vec<FixtureResult>,
}

impl SelfTestSummary {
    pub fn passed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == FixtureOutcome::Passed)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    /// 0 when every fixture passed, 1 otherwise. An empty run fails.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.results.is_empty() || self.failed() > 0)
    }
}

/// Generate the wrapper methods for one fixture and compare them with its
/// golden file.
#[tracing::instrument(level = "debug", skip_all, fields(fixture = %path.display()))]
pub fn run_fixture(path: &Path) -> FixtureOutcome {
    let golden = expected_path(path);
    let expected = match fs::read_to_string(&golden) {
        Ok(text) => text,
        Err(err) => {
            return FixtureOutcome::Error(format!(
                "cannot read `{}`: {err}",
                golden.display()
            ))
        }
    };
    let ast = match shim_parse::parse_files(&[path]) {
        Ok(ast) => ast,
        Err(err) => return FixtureOutcome::Error(err.to_string()),
    };

    let config = GenConfig::default();
    let generator = ShimGenerator::new(&ast, &config);
    let versions = generator.determine_interfaces(&TEST_RELEASES);
    let actual = normalize(&generator.generate_wrapper_methods(&versions, false));
    let expected = normalize(&expected);
    if actual == expected {
        tracing::info!("Passed pnacl generator test.");
        FixtureOutcome::Passed
    } else {
        tracing::info!("Failed pnacl generator test.");
        FixtureOutcome::Mismatch(diff_statements(&expected, &actual))
    }
}

pub fn run_self_tests(paths: &[PathBuf]) -> SelfTestSummary {
    let results = discover_fixtures(paths)
        .into_iter()
        .map(|path| {
            let outcome = run_fixture(&path);
            FixtureResult { path, outcome }
        })
        .collect();
    SelfTestSummary { results }
}
