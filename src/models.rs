use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::parser::parse_frontmatter;

/// One skill document, as discovered under the source tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Display title: metadata `name`, else the folder name.
    pub name: String,
    /// Metadata `description`, else the configured default.
    pub description: String,
    /// Folder name, used as the URL path segment.
    pub slug: String,
    /// Markdown text with the metadata block removed.
    #[serde(skip)]
    pub body: String,
    /// File the document was read from.
    pub source: PathBuf,
}

impl Document {
    /// Build a document from raw SKILL.md text.
    ///
    /// Empty `name` or `description` values fall back to the same defaults
    /// as missing keys.
    #[must_use]
    pub fn from_source(slug: String, raw: &str, default_description: &str) -> Self {
        let (metadata, body) = parse_frontmatter(raw);
        let pick = |key: &str| metadata.get(key).filter(|v| !v.is_empty()).cloned();

        Self {
            name: pick("name").unwrap_or_else(|| slug.clone()),
            description: pick("description").unwrap_or_else(|| default_description.to_string()),
            slug,
            body,
            source: PathBuf::new(),
        }
    }

    #[must_use]
    pub fn with_source(mut self, path: &Path) -> Self {
        self.source = path.to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_fields_win() {
        let doc = Document::from_source(
            "folder".to_string(),
            "---\nname: Pretty Name\ndescription: Short\n---\nBody",
            "default",
        );
        assert_eq!(doc.name, "Pretty Name");
        assert_eq!(doc.description, "Short");
        assert_eq!(doc.slug, "folder");
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn missing_metadata_uses_defaults() {
        let doc = Document::from_source("folder".to_string(), "Just text", "default");
        assert_eq!(doc.name, "folder");
        assert_eq!(doc.description, "default");
        assert_eq!(doc.body, "Just text");
    }

    #[test]
    fn empty_values_use_defaults() {
        let doc = Document::from_source(
            "folder".to_string(),
            "---\nname:\ndescription:   \n---\nBody",
            "default",
        );
        assert_eq!(doc.name, "folder");
        assert_eq!(doc.description, "default");
    }

    #[test]
    fn serialize_json_skips_body() {
        let doc = Document::from_source("s".to_string(), "---\nname: n\n---\nsecret", "d")
            .with_source(Path::new("skills/s/SKILL.md"));
        let v = serde_json::to_value(&doc).unwrap();
        assert_eq!(v["name"], "n");
        assert_eq!(v["slug"], "s");
        assert_eq!(v["source"], "skills/s/SKILL.md");
        assert!(v.get("body").is_none());
    }
}
