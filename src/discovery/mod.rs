//! Finding configuration files on disk.
//!
//! # Example
//!
//! ```ignore
//! use plotcfg::discovery::discover_paths;
//!
//! let scan = discover_paths(&["cfg/".into()])?;
//! println!("Found {} configurations", scan.total());
//! ```

mod scanner;

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

pub use scanner::{is_config_file, scan_directory, ScanResult, CONFIG_EXTENSION};

/// Collect configuration files from explicit paths.
///
/// Files are taken as given regardless of extension. Directories are
/// scanned recursively for `.cfg` files.
pub fn discover_paths(paths: &[PathBuf]) -> Result<ScanResult> {
    let mut result = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            result.merge(scan_directory(path));
        } else if path.is_file() {
            result.configs.push(path.clone());
        } else {
            return Err(ConfigError::Io {
                path: path.clone(),
                message: "No such file or directory".to_string(),
            });
        }
    }

    tracing::debug!(count = result.total(), "discovered configuration files");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_mixed_paths() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/a.cfg"), "").unwrap();
        fs::write(dir.path().join("sub/b.cfg"), "").unwrap();
        fs::write(dir.path().join("odd.txt"), "").unwrap();

        let result = discover_paths(&[dir.path().join("sub"), dir.path().join("odd.txt")]).unwrap();
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn test_discover_missing_path() {
        let dir = tempdir().unwrap();
        let err = discover_paths(&[dir.path().join("absent")]).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
