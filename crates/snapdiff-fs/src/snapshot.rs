//! Project and version snapshot discovery.
//!
//! A projects root contains one directory per project; each project
//! directory contains one directory per version snapshot. Files inside a
//! snapshot are addressed by their `/`-separated relative path.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{FsError, FsResult};

/// List the project names under the root, sorted ascending.
pub fn list_projects(root: &Path) -> FsResult<Vec<String>> {
    list_subdirs(root)
}

/// List the version names of a project, sorted ascending.
pub fn list_versions(root: &Path, project: &str) -> FsResult<Vec<String>> {
    let project_path = project_dir(root, project)?;
    list_subdirs(&project_path)
}

/// Resolve the directory of one version snapshot, verifying it exists.
pub fn version_dir(root: &Path, project: &str, version: &str) -> FsResult<PathBuf> {
    let project_path = project_dir(root, project)?;
    if !is_bare_name(version) {
        return Err(FsError::VersionNotFound {
            project: project.to_string(),
            version: version.to_string(),
        });
    }
    let dir = project_path.join(version);
    if !dir.is_dir() {
        return Err(FsError::VersionNotFound {
            project: project.to_string(),
            version: version.to_string(),
        });
    }
    Ok(dir)
}

fn project_dir(root: &Path, project: &str) -> FsResult<PathBuf> {
    if !is_bare_name(project) {
        return Err(FsError::ProjectNotFound(project.to_string()));
    }
    let project_path = root.join(project);
    if !project_path.is_dir() {
        return Err(FsError::ProjectNotFound(project.to_string()));
    }
    Ok(project_path)
}

/// Project and version names come from requests; only a single plain
/// path component (no `..`, no separators, no root) may reach `join`.
fn is_bare_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Walk a snapshot directory into the set of relative file paths.
///
/// Only regular files count; directories themselves do not appear. The
/// `BTreeSet` gives the comparator a duplicate-free, sorted input.
pub fn list_files(dir: &Path) -> FsResult<BTreeSet<String>> {
    let mut files = BTreeSet::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        // strip_prefix cannot fail: every entry is beneath `dir`.
        if let Ok(rel) = entry.path().strip_prefix(dir) {
            files.insert(relative_name(rel));
        }
    }
    tracing::debug!(dir = %dir.display(), count = files.len(), "walked snapshot");
    Ok(files)
}

/// Render a relative path with `/` separators regardless of platform.
fn relative_name(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn list_subdirs(path: &Path) -> FsResult<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}
