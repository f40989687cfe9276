//! The three-way change tag shared by snapshot comparison and line diffs.

use serde::{Deserialize, Serialize};

/// Classification of a file or diff row relative to the (old, new) pair.
///
/// The same three tags apply at both granularities: a file is unchanged,
/// removed, or added between two snapshots, and a diff row is an
/// unchanged, removed, or added line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    /// Present on both sides.
    Unchanged,
    /// Present only on the old side.
    Removed,
    /// Present only on the new side.
    Added,
}

impl ChangeStatus {
    /// The lowercase name used in rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeStatus::Unchanged => "unchanged",
            ChangeStatus::Removed => "removed",
            ChangeStatus::Added => "added",
        }
    }
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_as_str() {
        for status in [
            ChangeStatus::Unchanged,
            ChangeStatus::Removed,
            ChangeStatus::Added,
        ] {
            assert_eq!(status.to_string(), status.as_str());
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ChangeStatus::Removed).unwrap(),
            "\"removed\""
        );
        let back: ChangeStatus = serde_json::from_str("\"added\"").unwrap();
        assert_eq!(back, ChangeStatus::Added);
    }
}
