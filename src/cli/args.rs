//! Command line argument parsing and validation.
//!
//! This module parses the optional overrides with clap and turns them into a
//! [`RuntimeConfig`] holding the resolved repository root and platform.

use crate::bundle::Platform;
use crate::error::{CheckError, Result};
use clap::Parser;
use clap::error::ErrorKind;
use path_absolutize::Absolutize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Runtime bundle checker for the Godot MuJoCo projects
#[derive(Parser, Debug, Default)]
#[command(
    name = "check_runtime_bundle",
    version,
    about = "Checks that the Godot MuJoCo runtime bundle exists in example/ and godot_demo/",
    long_about = "Checks that each project's bin/ directory contains the native libraries for the platform.

The repository root defaults to the parent of the directory containing this executable.

Usage:
  scripts/check_runtime_bundle
  check_runtime_bundle --root .
  check_runtime_bundle --root . --platform windows

Exit code 0 = every expected file exists; 1 = one or more are missing."
)]
pub struct Args {
    /// Repository root containing example/ and godot_demo/
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Platform whose bundle is expected (defaults to the host)
    #[arg(short, long, value_name = "PLATFORM")]
    pub platform: Option<Platform>,
}

impl Args {
    /// Parse command line arguments
    ///
    /// Returns `Ok(None)` once `--help` or `--version` output has been printed.
    pub fn parse_args() -> Result<Option<Self>> {
        Self::parse_args_from(std::env::args_os())
    }

    /// Parse arguments from an explicit iterator, the first item being the binary name.
    ///
    /// Usage errors become [`CheckError::InvalidArguments`] so the process
    /// exits with 1 rather than clap's own usage code.
    pub fn parse_args_from<I, T>(args: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(args) => Ok(Some(args)),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.print()?;
                Ok(None)
            }
            Err(e) => {
                let message = e.to_string();
                let reason = message.trim_end();
                Err(CheckError::InvalidArguments {
                    reason: reason.strip_prefix("error: ").unwrap_or(reason).to_string(),
                })
            }
        }
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(root) = &self.root {
            if root.as_os_str().is_empty() {
                return Err(CheckError::InvalidArguments {
                    reason: "Root cannot be empty".to_string(),
                });
            }
            if !root.is_dir() {
                return Err(CheckError::InvalidArguments {
                    reason: format!("Root is not a directory: {}", root.display()),
                });
            }
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    root: PathBuf,
    platform: Platform,
}

impl TryFrom<&Args> for RuntimeConfig {
    type Error = CheckError;

    fn try_from(args: &Args) -> Result<Self> {
        let root = match &args.root {
            Some(root) => root.absolutize()?.into_owned(),
            None => default_root()?,
        };
        let platform = args.platform.unwrap_or_else(Platform::current);

        Ok(Self { root, platform })
    }
}

impl RuntimeConfig {
    /// Returns the absolute repository root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the platform whose bundle is checked
    pub fn platform(&self) -> Platform {
        self.platform
    }
}

/// Parent of the directory holding the running executable.
fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?.canonicalize()?;
    root_from_executable(&exe)
}

fn root_from_executable(exe: &Path) -> Result<PathBuf> {
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| CheckError::RootResolution {
            path: exe.to_path_buf(),
            reason: "executable has no grandparent directory".to_string(),
        })
}
