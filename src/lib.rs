//! Runtime bundle verification for the Godot MuJoCo bridge.
//!
//! Checks that the platform-specific native libraries (the bridge library and
//! the MuJoCo runtime) are present in the `bin` directory of each Godot
//! project before a build or release is considered valid.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundle;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use bundle::{BundleChecker, BundleReport, PROJECTS, Platform, expected_files};
pub use error::{CheckError, Result};
