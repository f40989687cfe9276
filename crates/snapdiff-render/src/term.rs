//! Terminal rendering for the CLI.

use colored::Colorize;

use snapdiff_core::{ChangeStatus, LineDiff, SnapshotComparison};

/// Render a snapshot comparison one file per line, status first.
pub fn render_comparison(comparison: &SnapshotComparison) -> String {
    let mut out = String::new();
    for entry in &comparison.entries {
        let tag = match entry.status {
            ChangeStatus::Unchanged => "unchanged".dimmed(),
            ChangeStatus::Removed => "  removed".red(),
            ChangeStatus::Added => "    added".green(),
        };
        out.push_str(&format!("{} {}\n", tag, entry.path));
    }
    out
}

/// Render a line diff with both line-number columns, `-` marking absence.
pub fn render_diff(diff: &LineDiff) -> String {
    let mut out = String::new();
    for row in &diff.rows {
        let old = row
            .old_line
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        let new = row
            .new_line
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        let line = format!("{:>4} {:>4} ", old, new);
        let rendered = match row.status {
            ChangeStatus::Unchanged => format!("  {}", row.text).normal(),
            ChangeStatus::Removed => format!("- {}", row.text).red(),
            ChangeStatus::Added => format!("+ {}", row.text).green(),
        };
        out.push_str(&format!("{}{}\n", line.dimmed(), rendered));
    }
    out
}
