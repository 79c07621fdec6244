//! On-disk cache for downloaded SVG assets.
//!
//! Files live in a single flat directory and are keyed by the logo title:
//!
//! - File name is `svg_<title lowercased, spaces as underscores>.svg`
//! - Directory is created on demand (idempotent, recursive)
//! - Existing files with the same name are overwritten
//!
//! There is no eviction or size bound; the directory grows for the life of
//! the temp dir.

pub mod naming;
pub mod store;

pub use crate::Error;

pub use naming::file_name_for;
pub use store::SvgCache;
