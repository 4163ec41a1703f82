//! Shared utilities.

mod fs;

pub use fs::{sibling_with_marker, write_atomic};
