//! Strip an export prefix from skill folder names.

use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::errors::{Result, SiteError};
use crate::fs_util::is_regular_dir;

/// A folder that matched the prefix but was left in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRename {
    pub from: PathBuf,
    pub reason: String,
}

/// Result of a rename pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenameReport {
    /// `(old, new)` paths of renamed folders.
    pub renamed: Vec<(PathBuf, PathBuf)>,
    pub skipped: Vec<SkippedRename>,
}

/// Rename every immediate subfolder of the source directory that starts with
/// `prefix` to its name without the prefix.
///
/// Folders whose target already exists, or whose name is exactly the
/// prefix, are skipped. A failed rename is recorded and does not stop the
/// pass.
///
/// # Errors
///
/// Returns `SiteError::Config` for an empty prefix,
/// `SiteError::SourceNotFound` if the source directory is missing, or
/// `SiteError::Io` if it cannot be listed.
pub fn strip_folder_prefix(config: &SiteConfig, prefix: &str) -> Result<RenameReport> {
    if prefix.is_empty() {
        return Err(SiteError::Config {
            message: "rename prefix must not be empty".to_string(),
        });
    }
    let root = &config.source_dir;
    if !is_regular_dir(root) {
        return Err(SiteError::SourceNotFound { path: root.clone() });
    }
    tracing::info!(root = %root.display(), prefix, "scanning for prefixed folders");

    let mut names = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with(prefix) && is_regular_dir(&entry.path()) {
            names.push(name);
        }
    }
    names.sort();

    let mut report = RenameReport::default();
    for name in names {
        let from = root.join(&name);
        let new_name = &name[prefix.len()..];
        if new_name.is_empty() {
            tracing::warn!(folder = %name, "stripped name would be empty, skipping");
            report.skipped.push(SkippedRename {
                from,
                reason: "name is only the prefix".to_string(),
            });
            continue;
        }

        let to = root.join(new_name);
        if to.exists() {
            tracing::warn!(folder = %name, dest = %new_name, "destination already exists, skipping");
            report.skipped.push(SkippedRename {
                from,
                reason: format!("destination {new_name} already exists"),
            });
            continue;
        }

        match std::fs::rename(&from, &to) {
            Ok(()) => {
                tracing::info!("renamed {name} -> {new_name}");
                report.renamed.push((from, to));
            }
            Err(e) => {
                tracing::error!(folder = %name, "rename failed: {e}");
                report.skipped.push(SkippedRename {
                    from,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}
