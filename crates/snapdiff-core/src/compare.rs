//! Snapshot set comparator: classify file names across two snapshots.
//!
//! Given the sets of relative paths present in two version snapshots,
//! every name is classified as unchanged (present in both), removed
//! (old only), or added (new only). Output order is fixed because the
//! rendering layers rely on the grouping: unchanged, then removed, then
//! added, each group ascending lexicographic.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::status::ChangeStatus;

/// A single classified file in a snapshot comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Relative path within the version snapshot.
    pub path: String,
    /// Classification for the (old, new) snapshot pair.
    pub status: ChangeStatus,
}

/// The result of comparing two snapshot file sets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotComparison {
    /// Classified entries in rendering order: unchanged, removed, added,
    /// each group sorted by path.
    pub entries: Vec<FileEntry>,
}

impl SnapshotComparison {
    /// Returns `true` if neither snapshot contained any file.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of classified files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of files present only in the new snapshot.
    pub fn additions(&self) -> usize {
        self.count(ChangeStatus::Added)
    }

    /// Number of files present only in the old snapshot.
    pub fn removals(&self) -> usize {
        self.count(ChangeStatus::Removed)
    }

    /// Number of files present in both snapshots.
    pub fn unchanged(&self) -> usize {
        self.count(ChangeStatus::Unchanged)
    }

    fn count(&self, status: ChangeStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }
}

/// Compare the file sets of two version snapshots.
///
/// Pure function of its inputs; empty sets are valid and produce an
/// empty comparison. `BTreeSet` inputs make the within-group ordering
/// free: iteration is already ascending lexicographic.
pub fn compare_snapshots(
    old_names: &BTreeSet<String>,
    new_names: &BTreeSet<String>,
) -> SnapshotComparison {
    let mut entries = Vec::with_capacity(old_names.len() + new_names.len());

    entries.extend(old_names.intersection(new_names).map(|path| FileEntry {
        path: path.clone(),
        status: ChangeStatus::Unchanged,
    }));
    entries.extend(old_names.difference(new_names).map(|path| FileEntry {
        path: path.clone(),
        status: ChangeStatus::Removed,
    }));
    entries.extend(new_names.difference(old_names).map(|path| FileEntry {
        path: path.clone(),
        status: ChangeStatus::Added,
    }));

    SnapshotComparison { entries }
}
