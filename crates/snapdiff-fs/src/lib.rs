//! Filesystem boundary for snapdiff.
//!
//! Owns everything the diff core refuses to do: discovering projects and
//! their version snapshots under a caller-supplied root, walking a
//! snapshot directory into a relative-path set, and reading a file into
//! the line sequence the core diffs. The root path is always an explicit
//! argument; there is no process-wide base directory.
//!
//! # Key Types
//!
//! - [`list_projects`] / [`list_versions`] / [`version_dir`] -- Discovery
//! - [`list_files`] -- Snapshot walk into a relative-path set
//! - [`read_lines`] / [`locate_file`] / [`FilePresence`] -- File access

pub mod content;
pub mod error;
pub mod snapshot;

pub use content::{locate_file, read_lines, FilePresence};
pub use error::{FsError, FsResult};
pub use snapshot::{list_files, list_projects, list_versions, version_dir};
