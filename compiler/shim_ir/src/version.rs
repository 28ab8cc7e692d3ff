//! Interface versions.
//!
//! IDL versions are written `major.minor` (`0.5`, `1.0`, `1.1`). They appear
//! in release labels and in `version=` / `deprecate=` attributes.

use std::fmt;

/// A `major.minor` interface version.
///
/// Ordering is numeric on `(major, minor)`, so `1.10` sorts after `1.9`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const ZERO: Version = Version { major: 0, minor: 0 };

    #[inline]
    pub const fn new(major: u32, minor: u32) -> Self {
        Version { major, minor }
    }

    /// Parse `major.minor` text. A bare `major` means `major.0`.
    ///
    /// Returns `None` for anything else (empty parts, signs, extra dots).
    pub fn parse(text: &str) -> Option<Self> {
        let (major, minor) = match text.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (text, "0"),
        };
        if !is_digits(major) || !is_digits(minor) {
            return None;
        }
        Some(Version {
            major: major.parse().ok()?,
            minor: minor.parse().ok()?,
        })
    }

    /// Identifier-safe spelling: `1.0` → `1_0`.
    pub fn to_ident(self) -> String {
        format!("{}_{}", self.major, self.minor)
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests;
