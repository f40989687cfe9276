//! Diff core for snapdiff.
//!
//! Two pure components: the snapshot set comparator (which files were
//! added, removed, or unchanged between two version snapshots) and the
//! line diff engine (a line-numbered, status-tagged alignment of two
//! line sequences).
//!
//! Neither component performs I/O or holds state; both may be invoked
//! concurrently without coordination. Listing directories, reading files,
//! and rendering output belong to the boundary crates (`snapdiff-fs`,
//! `snapdiff-render`).
//!
//! # Key Types
//!
//! - [`ChangeStatus`] -- The three-way tag shared by both components
//! - [`SnapshotComparison`] / [`FileEntry`] -- Snapshot-level comparison
//! - [`LineDiff`] / [`DiffRow`] -- Line-level diff alignment

pub mod compare;
pub mod line_diff;
pub mod status;

pub use compare::{compare_snapshots, FileEntry, SnapshotComparison};
pub use line_diff::{diff_lines, DiffRow, LineDiff};
pub use status::ChangeStatus;
