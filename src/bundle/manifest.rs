//! Expected runtime bundle contents per platform.

use super::Platform;
use std::path::{Path, PathBuf};

/// Returns the artifacts that must exist in `bin_dir` for `platform`.
///
/// The list is fixed per platform: the bridge library first, then the MuJoCo
/// runtime. [`Platform::Other`] expects nothing and yields an empty list.
pub fn expected_files(platform: Platform, bin_dir: &Path) -> Vec<PathBuf> {
    match platform {
        Platform::MacOs => vec![
            bin_dir.join("libgodot_mujoco_bridge.dylib"),
            bin_dir
                .join("mujoco.framework")
                .join("Versions")
                .join("A")
                .join("libmujoco.3.4.0.dylib"),
        ],
        Platform::Linux => vec![
            bin_dir.join("libgodot_mujoco_bridge.so"),
            bin_dir.join("libmujoco.so"),
        ],
        Platform::Windows => vec![
            bin_dir.join("godot_mujoco_bridge.dll"),
            bin_dir.join("mujoco.dll"),
        ],
        Platform::Other => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative(platform: Platform) -> Vec<PathBuf> {
        let base = Path::new("proj").join("bin");
        expected_files(platform, &base)
            .into_iter()
            .map(|p| p.strip_prefix(&base).map(Path::to_path_buf).unwrap_or(p))
            .collect()
    }

    #[test]
    fn macos_expects_bridge_and_framework() {
        assert_eq!(
            relative(Platform::MacOs),
            vec![
                PathBuf::from("libgodot_mujoco_bridge.dylib"),
                Path::new("mujoco.framework")
                    .join("Versions")
                    .join("A")
                    .join("libmujoco.3.4.0.dylib"),
            ]
        );
    }

    #[test]
    fn linux_expects_shared_objects() {
        assert_eq!(
            relative(Platform::Linux),
            vec![
                PathBuf::from("libgodot_mujoco_bridge.so"),
                PathBuf::from("libmujoco.so"),
            ]
        );
    }

    #[test]
    fn windows_expects_dlls() {
        assert_eq!(
            relative(Platform::Windows),
            vec![
                PathBuf::from("godot_mujoco_bridge.dll"),
                PathBuf::from("mujoco.dll"),
            ]
        );
    }

    #[test]
    fn other_platform_expects_nothing() {
        assert!(expected_files(Platform::Other, Path::new("anywhere")).is_empty());
        assert!(expected_files(Platform::Other, Path::new("/")).is_empty());
    }

    #[test]
    fn every_path_is_under_bin_dir() {
        let base = Path::new("/repo/example/bin");
        for platform in [Platform::MacOs, Platform::Linux, Platform::Windows] {
            let files = expected_files(platform, base);
            assert_eq!(files.len(), 2);
            assert_ne!(files[0], files[1]);
            assert!(files.iter().all(|p| p.starts_with(base)), "{platform}");
        }
    }
}
