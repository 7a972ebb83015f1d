//! Existence sweep over every project's runtime bundle.

use super::{Platform, expected_files};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Projects under the repository root whose `bin` directory is checked, in
/// report order.
pub const PROJECTS: [&str; 2] = ["example", "godot_demo"];

/// Checks the runtime bundle of each project in [`PROJECTS`].
#[derive(Clone, Debug)]
pub struct BundleChecker {
    root: PathBuf,
    platform: Platform,
}

impl BundleChecker {
    /// Creates a checker for the repository at `root`.
    pub fn new(root: impl Into<PathBuf>, platform: Platform) -> Self {
        Self {
            root: root.into(),
            platform,
        }
    }

    /// Returns the repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the platform whose bundle is expected.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Output directory of `project`, i.e. `<root>/<project>/bin`.
    pub fn bin_dir(&self, project: &str) -> PathBuf {
        self.root.join(project).join("bin")
    }

    /// Artifacts `project` must contain for this checker's platform.
    pub fn expected_for(&self, project: &str) -> Vec<PathBuf> {
        expected_files(self.platform, &self.bin_dir(project))
    }

    /// Tests every expected artifact and collects the absent ones.
    ///
    /// Missing paths keep project order, then the per-platform file order.
    /// The filesystem is only queried, never modified.
    pub fn run(&self) -> BundleReport {
        let mut report = BundleReport::default();

        for project in PROJECTS {
            log::debug!("Checking {}", self.bin_dir(project).display());

            for path in self.expected_for(project) {
                report.checked += 1;
                if !artifact_exists(&path) {
                    report.missing.push(path);
                }
            }
        }

        log::info!(
            "Checked {} artifact(s) for {}: {} missing",
            report.checked,
            self.platform,
            report.missing.len()
        );

        report
    }
}

/// A path that cannot be queried counts as missing.
fn artifact_exists(path: &Path) -> bool {
    match path.try_exists() {
        Ok(true) => {
            log::debug!("  ✓ {}", path.display());
            true
        }
        Ok(false) => {
            log::debug!("  ✗ {}", path.display());
            false
        }
        Err(e) => {
            log::warn!("Cannot check {}: {}", path.display(), e);
            false
        }
    }
}

/// Outcome of a [`BundleChecker::run`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BundleReport {
    checked: usize,
    missing: Vec<PathBuf>,
}

impl BundleReport {
    /// Number of artifacts tested across all projects.
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Absent artifacts in encounter order.
    pub fn missing(&self) -> &[PathBuf] {
        &self.missing
    }

    /// True when nothing is missing.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Process exit code: 0 when complete, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_complete() { 0 } else { 1 }
    }

    /// Writes the human-readable report.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.is_complete() {
            let projects: Vec<String> = PROJECTS.iter().map(|p| format!("{p}/")).collect();
            return writeln!(
                out,
                "Runtime bundle check passed for {}.",
                projects.join(" and ")
            );
        }

        writeln!(out, "Missing runtime bundle files:")?;
        for path in &self.missing {
            writeln!(out, "  - {}", path.display())?;
        }
        Ok(())
    }
}
