//! File system scanner for configuration files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File extension of configuration files.
pub const CONFIG_EXTENSION: &str = "cfg";

/// Result of scanning for configuration files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered configuration files, sorted.
    pub configs: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn merge(&mut self, other: ScanResult) {
        self.configs.extend(other.configs);
    }
}

/// Recursively collect configuration files under `root`.
///
/// Hidden files and directories are skipped.
pub fn scan_directory(root: &Path) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if entry.file_type().is_file() && is_config_file(path) {
            result.configs.push(path.to_path_buf());
        }
    }

    result.configs.sort();
    result
}

/// Whether `path` names a configuration file.
pub fn is_config_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(CONFIG_EXTENSION)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_config_file() {
        assert!(is_config_file(Path::new("hms.cfg")));
        assert!(is_config_file(Path::new("/abs/dir/shms.cfg")));
        assert!(!is_config_file(Path::new("common.inc")));
        assert!(!is_config_file(Path::new("cfg")));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        assert!(scan_directory(dir.path()).is_empty());
    }

    #[test]
    fn test_scan_recursive() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("hallc/shms")).unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();

        fs::write(dir.path().join("hms.cfg"), "newpage\n").unwrap();
        fs::write(dir.path().join("hallc/shms/shms.cfg"), "newpage\n").unwrap();
        fs::write(dir.path().join("hallc/common.inc"), "guicolor white\n").unwrap();
        fs::write(dir.path().join(".git/stale.cfg"), "newpage\n").unwrap();

        let result = scan_directory(dir.path());

        assert_eq!(result.total(), 2);
        assert!(result.configs[0].ends_with("hallc/shms/shms.cfg"));
        assert!(result.configs[1].ends_with("hms.cfg"));
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        assert!(scan_directory(Path::new("/nonexistent/path")).is_empty());
    }

    #[test]
    fn test_merge() {
        let mut a = ScanResult::new();
        a.configs.push(PathBuf::from("a.cfg"));
        let mut b = ScanResult::new();
        b.configs.push(PathBuf::from("b.cfg"));

        a.merge(b);
        assert_eq!(a.total(), 2);
    }
}
