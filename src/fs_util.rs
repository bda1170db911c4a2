//! Filesystem helpers shared by the builder and the maintenance commands.

use std::path::Path;

use crate::errors::{Result, SiteError};

/// Returns `true` if the path is a regular directory (not a symlink).
///
/// Uses `symlink_metadata()` so a symlinked folder is never renamed or
/// walked into by mistake.
#[must_use]
pub(crate) fn is_regular_dir(path: &Path) -> bool {
    path.symlink_metadata()
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}

/// Create `dir` and any missing parents.
pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| SiteError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write `contents` to `path`, creating the parent directory first.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    std::fs::write(path, contents).map_err(|source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn is_regular_dir_true_for_regular_dir() {
        let dir = tempdir().unwrap();
        let subdir = dir.path().join("subdir");
        fs::create_dir(&subdir).unwrap();
        assert!(is_regular_dir(&subdir));
    }

    #[test]
    fn is_regular_dir_false_for_file_and_missing() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("test.txt");
        fs::write(&file, "hello").unwrap();
        assert!(!is_regular_dir(&file));
        assert!(!is_regular_dir(&dir.path().join("missing")));
    }

    #[cfg(unix)]
    #[test]
    fn is_regular_dir_false_for_symlink_to_dir() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target_dir");
        fs::create_dir(&target).unwrap();
        let link = dir.path().join("link_dir");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert!(!is_regular_dir(&link));
    }

    #[test]
    fn write_file_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a/b/index.html");
        write_file(&path, "<html>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html>");
    }

    #[test]
    fn write_file_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_file(&path, "one").unwrap();
        write_file(&path, "two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "two");
    }

    #[test]
    fn write_file_reports_path_on_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file").unwrap();
        let err = write_file(&blocker.join("child.txt"), "x").unwrap_err();
        assert!(matches!(err, SiteError::Write { .. }));
        assert!(err.to_string().contains("blocker"));
    }
}
