//! Presentation boundary for snapdiff.
//!
//! Pure formatters that map the core's structured results into markup or
//! colored terminal text. No diff logic lives here, and nothing here is
//! required to use the core: a JSON API serializes the core types
//! directly and skips this crate entirely.

pub mod escape;
pub mod html;
pub mod term;

pub use escape::{escape_attr, escape_markup};
