//! Environment expansion and search-path helpers for path-valued fields.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Expand `~` and `$VAR` references using the process environment.
pub fn expand_path(value: &str) -> Result<String> {
    expand_path_with(value, |name| std::env::var(name).ok())
}

/// Expand `~` and `$VAR` references with a custom variable lookup.
///
/// A `~` at the start of the string, or right after a `:` path separator,
/// becomes `$HOME` (left alone if `HOME` is unset). `$NAME` takes the
/// longest run of alphanumerics and underscores as the variable name. An
/// undefined variable, or a `$` with no name after it, is an error.
pub fn expand_path_with<F>(value: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(value.len());

    if let Some(pos) = value.find('~') {
        let at_entry_start = pos == 0 || value.as_bytes()[pos - 1] == b':';
        match lookup("HOME") {
            Some(home) if at_entry_start => {
                out.push_str(&value[..pos]);
                out.push_str(&home);
                out.push_str(&value[pos + 1..]);
            }
            _ => out.push_str(value),
        }
    } else {
        out.push_str(value);
    }

    if out.len() < 2 {
        return Ok(out);
    }

    let mut result = String::with_capacity(out.len());
    let mut rest = out.as_str();
    while let Some(pos) = rest.find('$') {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let name_len = after
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        let name = &after[..name_len];

        if name.is_empty() {
            return Err(ConfigError::EnvExpansion {
                message: format!("spurious \"$\" in \"{}\"", value),
                help: Some("Did you mean to reference an environment variable?".to_string()),
            });
        }

        match lookup(name) {
            Some(val) => result.push_str(&val),
            None => {
                return Err(ConfigError::EnvExpansion {
                    message: format!("undefined environment variable ${}", name),
                    help: Some("Set the variable or correct the configuration".to_string()),
                });
            }
        }
        rest = &after[name_len..];
    }
    result.push_str(rest);

    Ok(result)
}

/// Append `dir` to a colon-separated search path.
pub fn append_to_path(path: &mut String, dir: &str) {
    if dir.is_empty() {
        return;
    }
    if !path.is_empty() {
        path.push(':');
    }
    path.push_str(dir);
}

/// Locate `name` as a regular file.
///
/// Absolute paths are used as-is. Relative paths are tried against the
/// current directory first, then against each non-empty entry of the
/// colon-separated `search_path`, in order.
pub fn find_in_path(name: &str, search_path: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);
    if candidate.is_file() {
        return Some(candidate.to_path_buf());
    }
    if name.is_empty() || candidate.is_absolute() {
        return None;
    }

    search_path
        .split(':')
        .filter(|dir| !dir.is_empty())
        .map(|dir| Path::new(dir).join(name))
        .find(|path| path.is_file())
}

/// Directory part of `path`, `.` when there is none.
pub fn dirname(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "HOME" => Some("/home/shift".to_string()),
            "CFG_DIR" => Some("/opt/cfg".to_string()),
            "RUN_DIR" => Some("/data".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_plain_value_unchanged() {
        assert_eq!(expand_path_with("hms.cfg", lookup).unwrap(), "hms.cfg");
    }

    #[test]
    fn test_expand_variable() {
        assert_eq!(
            expand_path_with("$CFG_DIR/hms.cfg", lookup).unwrap(),
            "/opt/cfg/hms.cfg"
        );
    }

    #[test]
    fn test_expand_several_variables() {
        assert_eq!(
            expand_path_with("$CFG_DIR:$RUN_DIR/x", lookup).unwrap(),
            "/opt/cfg:/data/x"
        );
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_path_with("~/cfg", lookup).unwrap(), "/home/shift/cfg");
        assert_eq!(
            expand_path_with("/a:~/cfg", lookup).unwrap(),
            "/a:/home/shift/cfg"
        );
        assert_eq!(expand_path_with("a~b", lookup).unwrap(), "a~b");
    }

    #[test]
    fn test_undefined_variable() {
        let err = expand_path_with("$NOPE/x", lookup).unwrap_err();
        assert!(matches!(err, ConfigError::EnvExpansion { .. }));
        assert!(err.to_string().contains("$NOPE"));
    }

    #[test]
    fn test_spurious_dollar() {
        let err = expand_path_with("a$/b", lookup).unwrap_err();
        assert!(matches!(err, ConfigError::EnvExpansion { .. }));
    }

    #[test]
    fn test_append_to_path() {
        let mut path = String::new();
        append_to_path(&mut path, "a");
        append_to_path(&mut path, "");
        append_to_path(&mut path, "b");
        assert_eq!(path, "a:b");
    }

    #[test]
    fn test_find_in_path() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("x.cfg"), "watchfile\n").unwrap();

        let search = format!(":{}:{}", dir.path().display(), sub.display());
        let found = find_in_path("x.cfg", &search).unwrap();
        assert_eq!(found, sub.join("x.cfg"));

        // Directories are not regular files
        assert_eq!(find_in_path("sub", &dir.path().display().to_string()), None);
        assert_eq!(find_in_path("missing.cfg", &search), None);
    }

    #[test]
    fn test_find_absolute() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("abs.cfg");
        fs::write(&file, "").unwrap();

        assert_eq!(find_in_path(file.to_str().unwrap(), ""), Some(file.clone()));
        let missing = dir.path().join("none.cfg");
        assert_eq!(find_in_path(missing.to_str().unwrap(), "/tmp"), None);
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname(Path::new("a/b.cfg")), PathBuf::from("a"));
        assert_eq!(dirname(Path::new("b.cfg")), PathBuf::from("."));
    }
}
