use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::Result;
use crate::models::Document;

/// File name that marks a folder as a skill.
pub const SKILL_FILE: &str = "SKILL.md";

/// Leading `---` block, closed by the first `---` that starts a line.
static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---").expect("frontmatter regex must compile")
});

/// Key/value metadata from a `---` block.
pub type Metadata = HashMap<String, String>;

/// Split a leading `---` metadata block from the document body.
///
/// Returns `(metadata, body)`. Each block line is split on its first colon;
/// lines without a colon or with an empty key are ignored. When no block is
/// present the metadata is empty and the body is the input unchanged.
#[must_use]
pub fn parse_frontmatter(content: &str) -> (Metadata, String) {
    let Some(caps) = FRONTMATTER_RE.captures(content) else {
        return (Metadata::new(), content.to_string());
    };

    let mut metadata = Metadata::new();
    for line in caps[1].lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        metadata.insert(key.to_string(), value.trim().to_string());
    }

    let block_len = caps.get(0).map_or(0, |m| m.end());
    let body = content[block_len..].trim().to_string();
    (metadata, body)
}

/// Read and parse the SKILL.md at `path`, using its folder name as slug.
///
/// # Errors
///
/// Returns `SiteError::Io` if the file cannot be read.
pub fn read_document(path: &Path, default_description: &str) -> Result<Document> {
    let raw = std::fs::read_to_string(path)?;
    let slug = path
        .parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Document::from_source(slug, &raw, default_description).with_source(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn no_block_returns_full_text() {
        let (meta, body) = parse_frontmatter("# Title\n\nBody\n");
        assert!(meta.is_empty());
        assert_eq!(body, "# Title\n\nBody\n");
    }

    #[test]
    fn basic_block() {
        let (meta, body) =
            parse_frontmatter("---\nname: my-skill\ndescription: Does things\n---\n\n# Body\n");
        assert_eq!(meta["name"], "my-skill");
        assert_eq!(meta["description"], "Does things");
        assert_eq!(body, "# Body");
    }

    #[test]
    fn value_keeps_later_colons() {
        let (meta, _) = parse_frontmatter("---\nurl: https://example.com:8080/x\n---\n");
        assert_eq!(meta["url"], "https://example.com:8080/x");
    }

    #[test]
    fn lines_without_colon_are_skipped() {
        let (meta, _) = parse_frontmatter("---\nname: a\njust text\n: orphan\n---\nbody");
        assert_eq!(meta.len(), 1);
        assert_eq!(meta["name"], "a");
    }

    #[test]
    fn keys_and_values_are_trimmed() {
        let (meta, _) = parse_frontmatter("---\n  name  :   spaced out  \n---\n");
        assert_eq!(meta["name"], "spaced out");
    }

    #[test]
    fn block_must_start_the_document() {
        let text = "intro\n---\nname: x\n---\n";
        let (meta, body) = parse_frontmatter(text);
        assert!(meta.is_empty());
        assert_eq!(body, text);
    }

    #[test]
    fn unterminated_block_is_not_metadata() {
        let text = "---\nname: x\nno closing\n";
        let (meta, body) = parse_frontmatter(text);
        assert!(meta.is_empty());
        assert_eq!(body, text);
    }

    #[test]
    fn crlf_line_endings() {
        let (meta, body) = parse_frontmatter("---\r\nname: win\r\n---\r\nBody\r\n");
        assert_eq!(meta["name"], "win");
        assert_eq!(body, "Body");
    }

    #[test]
    fn closes_at_first_delimiter() {
        let (meta, body) = parse_frontmatter("---\nname: a\n---\ntext\n---\nmore\n");
        assert_eq!(meta["name"], "a");
        assert_eq!(body, "text\n---\nmore");
    }

    #[test]
    fn read_document_uses_folder_name_as_slug() {
        let dir = tempdir().unwrap();
        let skill = dir.path().join("flutter-tips");
        fs::create_dir(&skill).unwrap();
        let path = skill.join(SKILL_FILE);
        fs::write(&path, "---\nname: Flutter Tips\n---\nHello").unwrap();

        let doc = read_document(&path, "none").unwrap();
        assert_eq!(doc.slug, "flutter-tips");
        assert_eq!(doc.name, "Flutter Tips");
        assert_eq!(doc.description, "none");
        assert_eq!(doc.body, "Hello");
        assert_eq!(doc.source, path);
    }

    #[test]
    fn read_document_missing_file_is_error() {
        let result = read_document(Path::new("/nonexistent/x/SKILL.md"), "none");
        assert!(result.is_err());
    }
}
