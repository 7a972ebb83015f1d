//! Host platform identity.

/// Operating system family that selects the expected runtime bundle.
///
/// Detected from the host via [`Platform::current`], or chosen explicitly on
/// the command line to verify a bundle built for another OS.
///
/// # Platform Support
///
/// - ✅ macOS: bridge dylib plus `mujoco.framework`
/// - ✅ Linux: bridge and MuJoCo shared objects
/// - ✅ Windows: bridge and MuJoCo DLLs
/// - Any other OS maps to [`Platform::Other`], which expects nothing
///
/// # Examples
///
/// ```no_run
/// use godot_mujoco_bundle_check::Platform;
///
/// let platform = Platform::current();
/// println!("Checking bundle for {}", platform);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Platform {
    /// macOS (Darwin)
    #[value(name = "macos")]
    MacOs,
    /// Linux
    Linux,
    /// Windows
    Windows,
    /// Any other operating system
    #[value(skip)]
    Other,
}

impl Platform {
    /// Returns the platform this binary is running on.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Maps an OS name as reported by `std::env::consts::OS` to a platform.
    ///
    /// `"darwin"` is accepted as an alias for macOS. Unrecognized names map
    /// to [`Platform::Other`].
    pub fn from_os_name(os: &str) -> Self {
        match os.to_ascii_lowercase().as_str() {
            "macos" | "darwin" => Self::MacOs,
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            _ => Self::Other,
        }
    }

    /// Lowercase name used in logs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_os_names_map_to_platforms() {
        assert_eq!(Platform::from_os_name("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os_name("Darwin"), Platform::MacOs);
        assert_eq!(Platform::from_os_name("linux"), Platform::Linux);
        assert_eq!(Platform::from_os_name("windows"), Platform::Windows);
    }

    #[test]
    fn unknown_os_names_map_to_other() {
        for os in ["freebsd", "openbsd", "android", "ios", ""] {
            assert_eq!(Platform::from_os_name(os), Platform::Other, "{os}");
        }
    }

    #[test]
    fn current_matches_build_target() {
        let expected = if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        };
        assert_eq!(Platform::current(), expected);
    }
}
