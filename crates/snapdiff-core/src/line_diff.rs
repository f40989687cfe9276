//! Line diff engine: status-tagged, line-numbered alignment of two
//! line sequences.
//!
//! Uses the `similar` crate (Myers diff algorithm) over line slices.
//! Unlike a hunked diff, every line of both inputs appears exactly once
//! in the output, so the rows fully reconstruct either side.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

use crate::status::ChangeStatus;

/// One row of diff output.
///
/// An unchanged row carries both line numbers; a removed row carries only
/// the old one and an added row only the new one. `None` is the absence
/// sentinel; it can never collide with a real (1-based) line number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRow {
    /// 1-based position in the old sequence, if the row consumes one.
    pub old_line: Option<usize>,
    /// 1-based position in the new sequence, if the row consumes one.
    pub new_line: Option<usize>,
    /// Three-way classification of the row.
    pub status: ChangeStatus,
    /// The line content, verbatim.
    pub text: String,
}

/// The result of diffing two line sequences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    /// Diff rows in alignment order.
    pub rows: Vec<DiffRow>,
    /// Number of lines in the old sequence.
    pub old_len: usize,
    /// Number of lines in the new sequence.
    pub new_len: usize,
}

impl LineDiff {
    /// Returns `true` if every row is unchanged (the sequences are equal).
    pub fn is_unchanged(&self) -> bool {
        self.rows
            .iter()
            .all(|r| r.status == ChangeStatus::Unchanged)
    }

    /// Number of added rows.
    pub fn additions(&self) -> usize {
        self.count(ChangeStatus::Added)
    }

    /// Number of removed rows.
    pub fn deletions(&self) -> usize {
        self.count(ChangeStatus::Removed)
    }

    fn count(&self, status: ChangeStatus) -> usize {
        self.rows.iter().filter(|r| r.status == status).count()
    }
}

/// Compute a line-level diff between two line sequences.
///
/// A minimal-edit alignment: lines equal in their relative position on
/// both sides come out as unchanged rows rather than remove+add pairs.
/// Two counters start at 1; an unchanged row advances both, a removed
/// row only the old, an added row only the new. Never fails for any pair
/// of finite sequences, including empty ones, empty lines, and
/// duplicates.
pub fn diff_lines(old_lines: &[&str], new_lines: &[&str]) -> LineDiff {
    let diff = TextDiff::from_slices(old_lines, new_lines);

    let mut rows = Vec::with_capacity(old_lines.len().max(new_lines.len()));
    let mut old_line = 1usize;
    let mut new_line = 1usize;

    for change in diff.iter_all_changes() {
        let text = change.value().to_string();
        match change.tag() {
            ChangeTag::Equal => {
                rows.push(DiffRow {
                    old_line: Some(old_line),
                    new_line: Some(new_line),
                    status: ChangeStatus::Unchanged,
                    text,
                });
                old_line += 1;
                new_line += 1;
            }
            ChangeTag::Delete => {
                rows.push(DiffRow {
                    old_line: Some(old_line),
                    new_line: None,
                    status: ChangeStatus::Removed,
                    text,
                });
                old_line += 1;
            }
            ChangeTag::Insert => {
                rows.push(DiffRow {
                    old_line: None,
                    new_line: Some(new_line),
                    status: ChangeStatus::Added,
                    text,
                });
                new_line += 1;
            }
        }
    }

    LineDiff {
        rows,
        old_len: old_lines.len(),
        new_len: new_lines.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// The old side rebuilt from unchanged+removed rows in emitted order.
    fn reconstruct_old(diff: &LineDiff) -> Vec<String> {
        diff.rows
            .iter()
            .filter(|r| r.status != ChangeStatus::Added)
            .map(|r| r.text.clone())
            .collect()
    }

    /// The new side rebuilt from unchanged+added rows in emitted order.
    fn reconstruct_new(diff: &LineDiff) -> Vec<String> {
        diff.rows
            .iter()
            .filter(|r| r.status != ChangeStatus::Removed)
            .map(|r| r.text.clone())
            .collect()
    }

    #[test]
    fn both_empty_no_rows() {
        let diff = diff_lines(&[], &[]);
        assert!(diff.rows.is_empty());
        assert_eq!(diff.old_len, 0);
        assert_eq!(diff.new_len, 0);
    }

    #[test]
    fn identical_sequences_all_unchanged() {
        let lines = ["alpha", "beta", "gamma"];
        let diff = diff_lines(&lines, &lines);

        assert!(diff.is_unchanged());
        assert_eq!(diff.rows.len(), 3);
        for (i, row) in diff.rows.iter().enumerate() {
            assert_eq!(row.old_line, Some(i + 1));
            assert_eq!(row.new_line, Some(i + 1));
            assert_eq!(row.text, lines[i]);
        }
    }

    #[test]
    fn empty_old_all_added() {
        let diff = diff_lines(&[], &["one", "two"]);
        assert_eq!(diff.additions(), 2);
        assert_eq!(diff.deletions(), 0);
        assert_eq!(diff.rows[0].new_line, Some(1));
        assert_eq!(diff.rows[1].new_line, Some(2));
        assert!(diff.rows.iter().all(|r| r.old_line.is_none()));
    }

    #[test]
    fn empty_new_all_removed() {
        let diff = diff_lines(&["one", "two"], &[]);
        assert_eq!(diff.deletions(), 2);
        assert_eq!(diff.additions(), 0);
        assert_eq!(diff.rows[0].old_line, Some(1));
        assert_eq!(diff.rows[1].old_line, Some(2));
        assert!(diff.rows.iter().all(|r| r.new_line.is_none()));
    }

    #[test]
    fn middle_replacement() {
        let diff = diff_lines(&["a", "b", "c"], &["a", "x", "c"]);

        assert_eq!(diff.rows[0].status, ChangeStatus::Unchanged);
        assert_eq!(diff.rows[0].old_line, Some(1));
        assert_eq!(diff.rows[0].new_line, Some(1));

        assert_eq!(diff.additions(), 1);
        assert_eq!(diff.deletions(), 1);
        assert_eq!(reconstruct_old(&diff), vec!["a", "b", "c"]);
        assert_eq!(reconstruct_new(&diff), vec!["a", "x", "c"]);

        let last = diff.rows.last().unwrap();
        assert_eq!(last.status, ChangeStatus::Unchanged);
        assert_eq!(last.old_line, Some(3));
        assert_eq!(last.new_line, Some(3));
    }

    #[test]
    fn trailing_addition_numbering() {
        let diff = diff_lines(&["a", "b"], &["a", "b", "c"]);

        assert_eq!(diff.rows.len(), 3);
        assert_eq!(diff.rows[0].status, ChangeStatus::Unchanged);
        assert_eq!(diff.rows[1].status, ChangeStatus::Unchanged);

        let added = &diff.rows[2];
        assert_eq!(added.status, ChangeStatus::Added);
        assert_eq!(added.new_line, Some(3));
        assert_eq!(added.old_line, None);
        assert_eq!(added.text, "c");
    }

    #[test]
    fn duplicate_and_empty_lines() {
        let old = ["", "x", "", "x"];
        let new = ["", "", "x"];
        let diff = diff_lines(&old, &new);

        assert_eq!(reconstruct_old(&diff), old);
        assert_eq!(reconstruct_new(&diff), new);
    }

    #[test]
    fn counters_advance_per_side() {
        let diff = diff_lines(&["a", "b", "c", "d"], &["b", "c", "e"]);

        let mut expect_old = 1usize;
        let mut expect_new = 1usize;
        for row in &diff.rows {
            match row.status {
                ChangeStatus::Unchanged => {
                    assert_eq!(row.old_line, Some(expect_old));
                    assert_eq!(row.new_line, Some(expect_new));
                    expect_old += 1;
                    expect_new += 1;
                }
                ChangeStatus::Removed => {
                    assert_eq!(row.old_line, Some(expect_old));
                    assert_eq!(row.new_line, None);
                    expect_old += 1;
                }
                ChangeStatus::Added => {
                    assert_eq!(row.old_line, None);
                    assert_eq!(row.new_line, Some(expect_new));
                    expect_new += 1;
                }
            }
        }
        assert_eq!(expect_old - 1, diff.old_len);
        assert_eq!(expect_new - 1, diff.new_len);
    }

    #[test]
    fn equal_lines_not_split_into_remove_add() {
        let diff = diff_lines(&["keep", "drop"], &["keep", "take"]);
        let keep = &diff.rows[0];
        assert_eq!(keep.status, ChangeStatus::Unchanged);
        assert_eq!(keep.text, "keep");
    }

    proptest! {
        /// Reconstruction law: unchanged+removed rows rebuild the old
        /// sequence, unchanged+added rows rebuild the new one.
        #[test]
        fn reconstructs_both_sides(
            old in prop::collection::vec("[ab]{0,3}", 0..16),
            new in prop::collection::vec("[ab]{0,3}", 0..16),
        ) {
            let old_refs: Vec<&str> = old.iter().map(String::as_str).collect();
            let new_refs: Vec<&str> = new.iter().map(String::as_str).collect();
            let diff = diff_lines(&old_refs, &new_refs);

            prop_assert_eq!(reconstruct_old(&diff), old);
            prop_assert_eq!(reconstruct_new(&diff), new);
        }

        /// Self-diff is the identity alignment.
        #[test]
        fn self_diff_identity(lines in prop::collection::vec("[a-c]{0,4}", 0..16)) {
            let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            let diff = diff_lines(&refs, &refs);

            prop_assert!(diff.is_unchanged());
            for (i, row) in diff.rows.iter().enumerate() {
                prop_assert_eq!(row.old_line, Some(i + 1));
                prop_assert_eq!(row.new_line, Some(i + 1));
            }
        }
    }
}
