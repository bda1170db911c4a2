//! Skill discovery under the source tree.
//!
//! Discovery is split in two phases: a lazy walk that yields `SKILL.md`
//! paths, and an eager pass that reads them into [`Document`]s. Rendering
//! only starts once the full list is known.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::SiteConfig;
use crate::errors::{Result, SiteError};
use crate::models::Document;
use crate::parser::{read_document, SKILL_FILE};

/// Hidden directories (`.git`, `.github`, ...) below the root are not searched.
fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name().to_string_lossy().starts_with('.')
}

fn is_skill_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() && entry.file_name() == SKILL_FILE
}

/// Lazily walk `root`, yielding every `SKILL.md` path in file-name order.
///
/// Symlinks are not followed.
pub fn walk_skill_files(root: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden_dir(e))
        .filter_map(|entry| match entry {
            Ok(e) if is_skill_file(&e) => Some(Ok(e.into_path())),
            Ok(_) => None,
            Err(err) => Some(Err(SiteError::from(err))),
        })
}

/// Collect all `SKILL.md` paths under `root`.
///
/// # Errors
///
/// Returns `SiteError::SourceNotFound` if `root` is not a directory, or
/// `SiteError::Walk` if part of the tree cannot be read.
pub fn find_skill_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(SiteError::SourceNotFound {
            path: root.to_path_buf(),
        });
    }
    walk_skill_files(root).collect()
}

/// Discover and parse every skill under the configured source directory.
///
/// Documents are sorted by slug so generated output is reproducible.
///
/// # Errors
///
/// Propagates walk and read failures, and returns `SiteError::DuplicateSlug`
/// when two skill folders share a name.
pub fn discover_documents(config: &SiteConfig) -> Result<Vec<Document>> {
    let paths = find_skill_files(&config.source_dir)?;
    let mut documents = paths
        .iter()
        .map(|p| read_document(p, &config.default_description))
        .collect::<Result<Vec<_>>>()?;

    documents.sort_by(|a, b| a.slug.cmp(&b.slug));
    ensure_unique_slugs(&documents)?;

    tracing::debug!(
        count = documents.len(),
        root = %config.source_dir.display(),
        "discovered skills"
    );
    Ok(documents)
}

/// Fail on the first slug shared by two documents. Expects slug order.
fn ensure_unique_slugs(documents: &[Document]) -> Result<()> {
    for pair in documents.windows(2) {
        if pair[0].slug == pair[1].slug {
            return Err(SiteError::DuplicateSlug {
                slug: pair[1].slug.clone(),
                first: pair[0].source.clone(),
                second: pair[1].source.clone(),
            });
        }
    }
    Ok(())
}
