//! HTML page rendering.
//!
//! Builds the browser-facing views: project index, version picker, file
//! explorer, and the two file views (two-sided diff, single-sided
//! content). Styling follows the reference palette: gray for unchanged,
//! red for removed, green for added.

use snapdiff_core::{ChangeStatus, LineDiff, SnapshotComparison};

use crate::escape::{escape_attr, escape_markup};

/// Rendered stand-in for an absent line number.
const ABSENT: &str = "X";

fn status_style(status: ChangeStatus) -> &'static str {
    match status {
        ChangeStatus::Removed => "background-color: #ffcccc;",
        ChangeStatus::Added => "background-color: #ccffcc;",
        ChangeStatus::Unchanged => "background-color: #f0f0f0;",
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title>\
         <style>body{{font-family:monospace;margin:2em;}}\
         table{{border-collapse:collapse;}}\
         td{{padding:0 0.5em;white-space:pre;}}</style></head>\n\
         <body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = escape_markup(title),
        body = body,
    )
}

/// The project index: one link per project under the root.
pub fn index_page(projects: &[String]) -> String {
    if projects.is_empty() {
        return page("Projects", "<p>No projects found.</p>\n");
    }
    let mut body = String::from("<ul>\n");
    for project in projects {
        body.push_str(&format!(
            "<li><a href=\"/versions/{href}\">{name}</a></li>\n",
            href = escape_attr(project),
            name = escape_markup(project),
        ));
    }
    body.push_str("</ul>\n");
    page("Projects", &body)
}

/// The version picker: every ordered (old, new) pair of a project's versions.
pub fn versions_page(project: &str, versions: &[String]) -> String {
    let mut body = String::new();
    if versions.len() < 2 {
        body.push_str("<p>At least two versions are needed to compare.</p>\n");
    }
    body.push_str("<ul>\n");
    for old in versions {
        for new in versions {
            if old == new {
                continue;
            }
            body.push_str(&format!(
                "<li><a href=\"/explore/{p}/{old_href}/{new_href}\">{old_name} → {new_name}</a></li>\n",
                p = escape_attr(project),
                old_href = escape_attr(old),
                new_href = escape_attr(new),
                old_name = escape_markup(old),
                new_name = escape_markup(new),
            ));
        }
    }
    body.push_str("</ul>\n");
    page(&format!("Versions of {project}"), &body)
}

/// The file explorer: every file of both snapshots with its status,
/// grouped unchanged / removed / added in the comparator's order.
pub fn explorer_page(
    project: &str,
    old_version: &str,
    new_version: &str,
    comparison: &SnapshotComparison,
) -> String {
    let title = format!("{project}: {old_version} → {new_version}");
    if comparison.is_empty() {
        return page(&title, "<p>Both versions are empty.</p>\n");
    }
    let mut body = String::from("<table>\n");
    for entry in &comparison.entries {
        body.push_str(&format!(
            "<tr style=\"{style}\"><td>{status}</td>\
             <td><a href=\"/compare/{p}/{old}/{new}/{href}\">{path}</a></td></tr>\n",
            style = status_style(entry.status),
            status = entry.status,
            p = escape_attr(project),
            old = escape_attr(old_version),
            new = escape_attr(new_version),
            href = escape_attr(&entry.path),
            path = escape_markup(&entry.path),
        ));
    }
    body.push_str("</table>\n");
    page(&title, &body)
}

/// The two-sided diff view of one file.
pub fn compare_page(filename: &str, diff: &LineDiff) -> String {
    let mut body = String::from("<table>\n");
    for row in &diff.rows {
        let old = row
            .old_line
            .map_or_else(|| ABSENT.to_string(), |n| n.to_string());
        let new = row
            .new_line
            .map_or_else(|| ABSENT.to_string(), |n| n.to_string());
        body.push_str(&format!(
            "<tr style=\"{style}\"><td>{old}</td><td>{new}</td><td>{text}</td></tr>\n",
            style = status_style(row.status),
            old = old,
            new = new,
            text = escape_markup(&row.text),
        ));
    }
    body.push_str("</table>\n");
    page(&format!("Diff of {filename}"), &body)
}

/// The single-sided view of a file present in only one version.
///
/// `side` labels which version holds the file ("Old" or "New").
pub fn single_file_page(filename: &str, lines: &[String], side: &str) -> String {
    let mut body = format!("<p>Only present in the {side} version.</p>\n<table>\n");
    for (i, line) in lines.iter().enumerate() {
        body.push_str(&format!(
            "<tr><td>{num}</td><td>{text}</td></tr>\n",
            num = i + 1,
            text = escape_markup(line),
        ));
    }
    body.push_str("</table>\n");
    page(&format!("{filename} ({side} only)"), &body)
}

/// The notice shown when a resource does not resolve.
pub fn not_found_page(message: &str) -> String {
    page("Not found", &format!("<p>{}</p>\n", escape_markup(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapdiff_core::{compare_snapshots, diff_lines};
    use std::collections::BTreeSet;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn index_links_projects() {
        let html = index_page(&["demo".to_string(), "other".to_string()]);
        assert!(html.contains("<a href=\"/versions/demo\">demo</a>"));
        assert!(html.contains("<a href=\"/versions/other\">other</a>"));
    }

    #[test]
    fn index_empty_notice() {
        let html = index_page(&[]);
        assert!(html.contains("No projects found."));
    }

    #[test]
    fn versions_pairs_exclude_self() {
        let html = versions_page("demo", &["v1".to_string(), "v2".to_string()]);
        assert!(html.contains("/explore/demo/v1/v2"));
        assert!(html.contains("/explore/demo/v2/v1"));
        assert!(!html.contains("/explore/demo/v1/v1"));
    }

    #[test]
    fn explorer_grouped_rows_and_links() {
        let comparison = compare_snapshots(&set(&["a.txt", "b.txt"]), &set(&["b.txt", "c.txt"]));
        let html = explorer_page("demo", "v1", "v2", &comparison);

        assert!(html.contains("/compare/demo/v1/v2/b.txt"));
        assert!(html.contains("#ffcccc")); // removed a.txt
        assert!(html.contains("#ccffcc")); // added c.txt
        let unchanged_pos = html.find("b.txt").unwrap();
        let removed_pos = html.find("a.txt").unwrap();
        assert!(unchanged_pos < removed_pos, "unchanged group renders first");
    }

    #[test]
    fn link_attributes_escape_quotes() {
        let html = index_page(&["de\"mo".to_string()]);
        assert!(html.contains("href=\"/versions/de&quot;mo\""));
        assert!(!html.contains("href=\"/versions/de\"mo\""));

        let comparison = compare_snapshots(&set(&["a\"b.txt"]), &set(&["a\"b.txt"]));
        let html = explorer_page("p", "v\"1", "v2", &comparison);
        assert!(html.contains("v&quot;1"));
        assert!(html.contains("a&quot;b.txt"));
        assert!(!html.contains("/compare/p/v\"1"));
    }

    #[test]
    fn compare_renders_absence_sentinel() {
        let diff = diff_lines(&["a", "b"], &["a", "b", "c"]);
        let html = compare_page("f.txt", &diff);

        assert!(html.contains("<td>X</td><td>3</td><td>c</td>"));
        assert!(html.contains("<td>1</td><td>1</td><td>a</td>"));
    }

    #[test]
    fn compare_escapes_line_content() {
        let diff = diff_lines(&[], &["<b>bold</b>"]);
        let html = compare_page("f.txt", &diff);

        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn single_file_numbers_lines() {
        let html = single_file_page(
            "gone.txt",
            &["first".to_string(), "second".to_string()],
            "Old",
        );
        assert!(html.contains("Only present in the Old version."));
        assert!(html.contains("<td>2</td><td>second</td>"));
    }

    #[test]
    fn not_found_carries_message() {
        let html = not_found_page("file not found in either version");
        assert!(html.contains("file not found in either version"));
    }
}
