//! Runtime bundle expectations and verification.
//!
//! - `platform` - Host platform detection
//! - `manifest` - Expected artifact list per platform
//! - `check` - Existence sweep across projects and the resulting report

mod check;
mod manifest;
mod platform;

pub use check::{BundleChecker, BundleReport, PROJECTS};
pub use manifest::expected_files;
pub use platform::Platform;
