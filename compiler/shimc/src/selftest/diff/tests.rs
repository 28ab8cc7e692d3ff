use pretty_assertions::assert_eq;

use super::*;

fn render(lines: &[DiffLine]) -> Vec<String> {
    lines.iter().map(ToString::to_string).collect()
}

#[test]
fn test_identical() {
    assert_eq!(render(&diff_statements("a;b", "a;b")), vec!["  a", "  b"]);
}

#[test]
fn test_changed_statement() {
    assert_eq!(
        render(&diff_statements("a;b;c", "a;x;c")),
        vec!["  a", "- b", "+ x", "  c"]
    );
}

#[test]
fn test_insertions_and_removals_at_ends() {
    assert_eq!(
        render(&diff_statements("a;b", "b;c")),
        vec!["- a", "  b", "+ c"]
    );
    assert_eq!(render(&diff_statements("", "x")), vec!["- ", "+ x"]);
}
