//! Statement-level diff of normalized C text.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiffTag {
    Same,
    Removed,
    Added,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DiffLine {
    pub tag: DiffTag,
    pub text: String,
}

impl fmt::Display for DiffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.tag {
            DiffTag::Same => "  ",
            DiffTag::Removed => "- ",
            DiffTag::Added => "+ ",
        };
        write!(f, "{marker}{}", self.text)
    }
}

/// Diff `old` against `new`, one entry per `;`-separated statement.
///
/// Uses a longest-common-subsequence table, so common statements stay
/// aligned and removals are listed before additions at each change.
pub fn diff_statements(old: &str, new: &str) -> Vec<DiffLine> {
    let old: Vec<&str> = old.split(';').collect();
    let new: Vec<&str> = new.split(';').collect();
    let (n, m) = (old.len(), new.len());

    // lcs[i][j]: common length of old[i..] and new[j..].
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if old[i] == new[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let line = |tag, text: &str| DiffLine {
        tag,
        text: text.to_string(),
    };
    let mut out = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old[i] == new[j] {
            out.push(line(DiffTag::Same, old[i]));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            out.push(line(DiffTag::Removed, old[i]));
            i += 1;
        } else {
            out.push(line(DiffTag::Added, new[j]));
            j += 1;
        }
    }
    out.extend(old[i..].iter().map(|s| line(DiffTag::Removed, *s)));
    out.extend(new[j..].iter().map(|s| line(DiffTag::Added, *s)));
    out
}

#[cfg(test)]
mod tests;
