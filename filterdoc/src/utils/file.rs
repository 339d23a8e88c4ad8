//! File utility functions

use std::path::{Path, PathBuf};

/// Expand a user supplied path to an absolute path.
///
/// - `~` and `~/path` expand to the home directory
/// - relative paths (`.`, `..`, `defs/filters.json`) are joined onto the
///   current directory
/// - absolute paths pass through unchanged
///
/// ```text
/// expand_path("~/.filterdoc")   // -> /home/user/.filterdoc
/// expand_path("filters.json")   // -> /current/dir/filters.json
/// expand_path("/etc/filters")   // -> /etc/filters
/// ```
pub fn expand_path(path: &str) -> PathBuf {
    let path = path.trim();
    let cwd = || std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if path.is_empty() {
        return cwd();
    }

    let expanded = match path.strip_prefix('~') {
        Some("") => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => match dirs::home_dir() {
            Some(home) => home.join(&rest[1..]),
            None => PathBuf::from(path),
        },
        _ => PathBuf::from(path),
    };

    if expanded.is_relative() {
        cwd().join(expanded)
    } else {
        expanded
    }
}

/// Resolve `path` against the directory containing `config_file`.
///
/// Paths written inside a config file are relative to that file, not to the
/// directory the tool happens to run from. Home and absolute paths are
/// expanded as in [`expand_path`].
pub fn resolve_from_config(config_file: &Path, path: &str) -> PathBuf {
    let trimmed = path.trim();
    if trimmed.starts_with('~') || Path::new(trimmed).is_absolute() {
        return expand_path(trimmed);
    }
    match config_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            expand_path(&dir.join(trimmed).to_string_lossy())
        }
        _ => expand_path(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_absolute_unix() {
        let result = expand_path("/absolute/path");
        assert_eq!(result, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_expand_path_bare_name() {
        let result = expand_path("filters.json");
        assert!(result.is_absolute());
        assert!(result.ends_with("filters.json"));
    }

    #[test]
    fn test_expand_path_relative_dotdot() {
        let result = expand_path("..");
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(result, cwd.join(".."));
    }

    #[test]
    fn test_expand_path_tilde() {
        let result = expand_path("~/.filterdoc");
        assert!(!result.to_string_lossy().contains('~'));
        assert!(result.ends_with(".filterdoc"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~"), home);
        }
    }

    #[test]
    fn test_expand_path_tilde_in_name_is_literal() {
        let result = expand_path("~backup");
        assert!(result.ends_with("~backup"));
    }

    #[test]
    fn test_expand_path_trims_whitespace() {
        assert_eq!(
            expand_path("  /path/to/dir  "),
            PathBuf::from("/path/to/dir")
        );
        assert!(expand_path("   ").is_absolute());
    }

    #[test]
    fn test_resolve_from_config_relative() {
        let config = Path::new("/etc/filterdoc/filterdoc.json");
        let result = resolve_from_config(config, "filters.json");
        assert_eq!(result, PathBuf::from("/etc/filterdoc/filters.json"));
    }

    #[test]
    fn test_resolve_from_config_absolute() {
        let config = Path::new("/etc/filterdoc/filterdoc.json");
        let result = resolve_from_config(config, "/srv/filters.json");
        assert_eq!(result, PathBuf::from("/srv/filters.json"));
    }

    #[test]
    fn test_resolve_from_config_without_parent() {
        let result = resolve_from_config(Path::new("filterdoc.json"), "filters.json");
        assert_eq!(result, expand_path("filters.json"));
    }
}
