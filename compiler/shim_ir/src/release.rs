//! Releases and per-release availability.
//!
//! A `label` block in an IDL file names releases and pins each one to a
//! version:
//!
//! ```text
//! label Chrome {
//!   M13 = 0.5,
//!   M14 = 1.0
//! };
//! ```
//!
//! Nodes carry an [`Availability`] range in versions; comparing it with a
//! release's version answers "does this node exist in release R".

use crate::Version;

/// A labelled point in an interface's evolution.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Release {
    pub name: String,
    pub version: Version,
}

impl Release {
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Release {
            name: name.into(),
            version,
        }
    }
}

/// The ordered entries of one `label` block.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct ReleaseTable {
    /// Label name (e.g. `Chrome`).
    pub label: String,
    entries: Vec<Release>,
}

impl ReleaseTable {
    pub fn new(label: impl Into<String>) -> Self {
        ReleaseTable {
            label: label.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, release: Release) {
        self.entries.push(release);
    }

    pub fn get(&self, name: &str) -> Option<&Release> {
        self.entries.iter().find(|r| r.name == name)
    }

    pub fn entries(&self) -> &[Release] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Version of the earliest entry, used as the default start of
    /// interfaces that do not declare one.
    pub fn first_version(&self) -> Option<Version> {
        self.entries.iter().map(|r| r.version).min()
    }

    /// Resolve requested release names in request order.
    ///
    /// Names this table does not define are dropped.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Vec<Release> {
        names
            .iter()
            .filter_map(|name| self.get(name.as_ref()).cloned())
            .collect()
    }
}

/// Half-open version range in which a node exists.
///
/// `since` is inclusive and `deprecated` exclusive; a missing bound is open.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Availability {
    pub since: Option<Version>,
    pub deprecated: Option<Version>,
}

impl Availability {
    pub const fn new(since: Option<Version>, deprecated: Option<Version>) -> Self {
        Availability { since, deprecated }
    }

    #[inline]
    pub fn is_available_at(&self, release: &Release) -> bool {
        self.contains(release.version)
    }

    pub fn contains(&self, version: Version) -> bool {
        self.since.is_none_or(|since| version >= since)
            && self.deprecated.is_none_or(|end| version < end)
    }

    /// Whether some version lies in both ranges.
    pub fn overlaps(&self, other: &Availability) -> bool {
        let starts_before_other_ends = match (self.since, other.deprecated) {
            (Some(since), Some(end)) => since < end,
            _ => true,
        };
        let other_starts_before_end = match (other.since, self.deprecated) {
            (Some(since), Some(end)) => since < end,
            _ => true,
        };
        starts_before_other_ends && other_starts_before_end
    }

    /// Versions at which this node changes shape (appears or disappears).
    pub fn change_points(&self) -> impl Iterator<Item = Version> {
        self.since.into_iter().chain(self.deprecated)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests use unwrap for brevity")]
mod tests;
