//! Request handlers.
//!
//! Each handler is a thin pass: resolve paths through `snapdiff-fs`,
//! run the pure core, hand the result to `snapdiff-render`. Failures
//! short-circuit via [`ServerError`] before the core is ever invoked.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;

use snapdiff_core::{compare_snapshots, diff_lines};
use snapdiff_fs::{
    list_files, list_projects, list_versions, locate_file, read_lines, version_dir,
    FilePresence,
};
use snapdiff_render::html;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};

/// `GET /` — the project index.
pub async fn index_handler(
    State(config): State<Arc<ServerConfig>>,
) -> ServerResult<Html<String>> {
    let projects = list_projects(&config.projects_root)?;
    Ok(Html(html::index_page(&projects)))
}

/// `GET /versions/:project` — comparison pairs of a project's versions.
pub async fn versions_handler(
    State(config): State<Arc<ServerConfig>>,
    Path(project): Path<String>,
) -> ServerResult<Html<String>> {
    let versions = list_versions(&config.projects_root, &project)?;
    Ok(Html(html::versions_page(&project, &versions)))
}

/// `GET /explore/:project/:old/:new` — per-file status between two versions.
pub async fn explore_handler(
    State(config): State<Arc<ServerConfig>>,
    Path((project, old_version, new_version)): Path<(String, String, String)>,
) -> ServerResult<Html<String>> {
    let old_dir = version_dir(&config.projects_root, &project, &old_version)?;
    let new_dir = version_dir(&config.projects_root, &project, &new_version)?;

    let old_files = list_files(&old_dir)?;
    let new_files = list_files(&new_dir)?;
    let comparison = compare_snapshots(&old_files, &new_files);

    Ok(Html(html::explorer_page(
        &project,
        &old_version,
        &new_version,
        &comparison,
    )))
}

/// `GET /compare/:project/:old/:new/*file` — line diff of one file.
///
/// A file present on one side only gets a single-sided view; a file
/// present on neither side is a 404 and the diff engine never runs.
pub async fn compare_handler(
    State(config): State<Arc<ServerConfig>>,
    Path((project, old_version, new_version, file)): Path<(String, String, String, String)>,
) -> ServerResult<Html<String>> {
    let old_dir = version_dir(&config.projects_root, &project, &old_version)?;
    let new_dir = version_dir(&config.projects_root, &project, &new_version)?;

    match locate_file(&old_dir, &new_dir, &file) {
        FilePresence::Both => {
            let old_lines = read_lines(&old_dir.join(&file))?;
            let new_lines = read_lines(&new_dir.join(&file))?;
            let old_refs: Vec<&str> = old_lines.iter().map(String::as_str).collect();
            let new_refs: Vec<&str> = new_lines.iter().map(String::as_str).collect();
            let diff = diff_lines(&old_refs, &new_refs);
            Ok(Html(html::compare_page(&file, &diff)))
        }
        FilePresence::OldOnly => {
            let lines = read_lines(&old_dir.join(&file))?;
            Ok(Html(html::single_file_page(&file, &lines, "Old")))
        }
        FilePresence::NewOnly => {
            let lines = read_lines(&new_dir.join(&file))?;
            Ok(Html(html::single_file_page(&file, &lines, "New")))
        }
        FilePresence::Absent => Err(ServerError::FileNotFound(file)),
    }
}
