//! Snapshot file access: line reading and two-sided presence checks.

use std::path::{Component, Path};

use crate::error::{FsError, FsResult};

/// Where a file exists relative to the two compared snapshots.
///
/// The diff engine assumes both sequences exist; the boundary resolves
/// presence first and only diffs in the [`FilePresence::Both`] case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilePresence {
    /// Present in both snapshots; a two-sided diff applies.
    Both,
    /// Present only in the old snapshot.
    OldOnly,
    /// Present only in the new snapshot.
    NewOnly,
    /// Present in neither snapshot.
    Absent,
}

/// Check which of the two snapshot directories contain `relative`.
///
/// The path comes from the request and must stay inside the snapshots:
/// anything with a `..`, root, or prefix component resolves to
/// [`FilePresence::Absent`] without touching the filesystem.
pub fn locate_file(old_dir: &Path, new_dir: &Path, relative: &str) -> FilePresence {
    if !is_snapshot_relative(relative) {
        return FilePresence::Absent;
    }
    let in_old = old_dir.join(relative).is_file();
    let in_new = new_dir.join(relative).is_file();
    match (in_old, in_new) {
        (true, true) => FilePresence::Both,
        (true, false) => FilePresence::OldOnly,
        (false, true) => FilePresence::NewOnly,
        (false, false) => FilePresence::Absent,
    }
}

/// A non-empty path made only of normal components, so joining it onto
/// a snapshot directory cannot escape that directory.
fn is_snapshot_relative(relative: &str) -> bool {
    !relative.is_empty()
        && Path::new(relative)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

/// Read a file into the line sequence fed to the diff engine.
///
/// Line terminators are normalized here, before the core ever sees the
/// content: both `\n` and `\r\n` delimit lines, and a trailing
/// terminator does not produce a final empty line. Two files identical
/// except for terminator style therefore diff as equal. Non-UTF-8
/// content is rejected; the core is never handed binary data.
pub fn read_lines(path: &Path) -> FsResult<Vec<String>> {
    let bytes = std::fs::read(path)?;
    let content =
        String::from_utf8(bytes).map_err(|_| FsError::NonUtf8(path.to_path_buf()))?;
    Ok(content.lines().map(str::to_string).collect())
}
