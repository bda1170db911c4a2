//! One-shot text fixes applied across every SKILL.md in the source tree.
//!
//! Each fix is a pure `&str -> FixOutcome` function. [`fix_skills`] is the
//! filesystem adapter: it walks the tree, applies one fix per file and
//! writes back the files that changed.

use std::path::PathBuf;
use std::sync::LazyLock;

use clap::ValueEnum;
use regex::{Captures, Regex};
use similar::TextDiff;

use crate::config::SiteConfig;
use crate::discovery::find_skill_files;
use crate::errors::Result;
use crate::fs_util::write_file;

/// Markdown image whose URL is root-relative (`/path`, not `//host`).
/// Alt text may hold one level of balanced brackets.
static RELATIVE_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!\[(?:[^\[\]\n]|\[[^\[\]\n]*\])*\])\((/[^/)][^)]*)\)")
        .expect("image regex must compile")
});

/// Boilerplate "View as markdown" link left over from the blog export.
static VIEW_AS_MARKDOWN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\r?\n|^)\[\]\(/api/posts/[a-zA-Z0-9]+/markdown "View as markdown"\)(\r?\n|$)"#)
        .expect("markdown link regex must compile")
});

/// Available corpus fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FixKind {
    /// Collapse a level-1 heading repeated right after itself
    DedupeHeadings,
    /// Prefix root-relative image paths with the image host
    PrefixImages,
    /// Remove "View as markdown" boilerplate links
    StripLinks,
}

impl FixKind {
    /// Short description used in log lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FixKind::DedupeHeadings => "double headings",
            FixKind::PrefixImages => "relative image paths",
            FixKind::StripLinks => "markdown links",
        }
    }
}

/// Result of applying a fix to one document's text.
#[derive(Debug, Clone, PartialEq)]
pub struct FixOutcome {
    /// The (possibly) rewritten text.
    pub content: String,
    /// Whether `content` differs from the input.
    pub changed: bool,
}

impl FixOutcome {
    fn from_pair(original: &str, content: String) -> Self {
        let changed = content != original;
        Self { content, changed }
    }
}

/// Apply `kind` to `text`.
#[must_use]
pub fn apply_fix(kind: FixKind, text: &str, config: &SiteConfig) -> FixOutcome {
    match kind {
        FixKind::DedupeHeadings => dedupe_headings(text),
        FixKind::PrefixImages => prefix_image_paths(text, &config.image_host),
        FixKind::StripLinks => strip_markdown_links(text),
    }
}

/// Split a line into its text and its line ending (`"\n"`, `"\r\n"` or `""`).
fn split_ending(line: &str) -> (&str, &str) {
    if let Some(text) = line.strip_suffix("\r\n") {
        (text, "\r\n")
    } else if let Some(text) = line.strip_suffix('\n') {
        (text, "\n")
    } else {
        (line, "")
    }
}

/// Collapse `# Heading` lines immediately repeated after blank lines.
///
/// Only exact textual repeats are removed; headings that differ in case or
/// trailing whitespace are left alone. The blank lines between the copies
/// are dropped along with the repeat.
#[must_use]
pub fn dedupe_headings(text: &str) -> FixOutcome {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < lines.len() {
        let (heading, mut ending) = split_ending(lines[i]);
        if !(heading.starts_with("# ") && heading.len() > 2) {
            out.push_str(lines[i]);
            i += 1;
            continue;
        }

        let mut next = i + 1;
        while !ending.is_empty() {
            let mut k = next;
            while k < lines.len() && lines[k].trim().is_empty() {
                k += 1;
            }
            let Some(candidate) = lines.get(k) else {
                break;
            };
            let (repeat, repeat_ending) = split_ending(candidate);
            if repeat.trim_start() != heading {
                break;
            }
            ending = repeat_ending;
            next = k + 1;
        }

        out.push_str(heading);
        out.push_str(ending);
        i = next;
    }

    FixOutcome::from_pair(text, out)
}

/// Prefix root-relative Markdown image URLs with `host`.
#[must_use]
pub fn prefix_image_paths(text: &str, host: &str) -> FixOutcome {
    let host = host.trim_end_matches('/');
    let content = RELATIVE_IMAGE_RE
        .replace_all(text, |caps: &Captures| format!("{}({host}{})", &caps[1], &caps[2]))
        .into_owned();
    FixOutcome::from_pair(text, content)
}

/// Remove `[](/api/posts/<id>/markdown "View as markdown")` lines.
#[must_use]
pub fn strip_markdown_links(text: &str) -> FixOutcome {
    let content = VIEW_AS_MARKDOWN_RE.replace_all(text, "${2}").into_owned();
    FixOutcome::from_pair(text, content)
}

/// A file rewritten (or, in dry-run mode, that would be rewritten).
#[derive(Debug, Clone)]
pub struct FileChange {
    pub path: PathBuf,
    pub original: String,
    pub updated: String,
}

impl FileChange {
    /// Unified diff between the original and the updated text.
    #[must_use]
    pub fn diff(&self) -> String {
        let label = self.path.display().to_string();
        TextDiff::from_lines(&self.original, &self.updated)
            .unified_diff()
            .context_radius(3)
            .header(&label, &label)
            .to_string()
    }
}

/// Outcome of running one fix over the whole tree.
#[derive(Debug, Clone)]
pub struct FixReport {
    pub kind: FixKind,
    /// Number of SKILL.md files examined.
    pub scanned: usize,
    pub changes: Vec<FileChange>,
    pub dry_run: bool,
}

/// Apply `kind` to every SKILL.md under the source directory.
///
/// Changed files are rewritten in place unless `dry_run` is set.
///
/// # Errors
///
/// Returns an error if the tree cannot be walked or a file cannot be read
/// or written. Files processed before the failure stay rewritten.
pub fn fix_skills(config: &SiteConfig, kind: FixKind, dry_run: bool) -> Result<FixReport> {
    let paths = find_skill_files(&config.source_dir)?;
    tracing::info!(
        root = %config.source_dir.display(),
        dry_run,
        "scanning for {}",
        kind.label()
    );

    let mut changes = Vec::new();
    for path in &paths {
        let original = std::fs::read_to_string(path)?;
        let outcome = apply_fix(kind, &original, config);
        if !outcome.changed {
            continue;
        }

        let rel = path.strip_prefix(&config.source_dir).unwrap_or(path);
        tracing::info!(
            "[{}] found {} in {}",
            if dry_run { "DRY RUN" } else { "FIX" },
            kind.label(),
            rel.display()
        );
        if !dry_run {
            write_file(path, &outcome.content)?;
        }
        changes.push(FileChange {
            path: path.clone(),
            original,
            updated: outcome.content,
        });
    }

    Ok(FixReport {
        kind,
        scanned: paths.len(),
        changes,
        dry_run,
    })
}
