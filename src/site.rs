//! Site build orchestration.
//!
//! Steps run strictly in order: output directory, stylesheet, discovery,
//! skill pages, index, sitemap and feed. A failure stops the build and
//! leaves whatever was already written.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::config::SiteConfig;
use crate::discovery::discover_documents;
use crate::errors::Result;
use crate::feed::{generate_rss, generate_sitemap};
use crate::fs_util::{ensure_dir, write_file};
use crate::markdown::render_markdown;
use crate::models::Document;
use crate::template::{render_cards, render_page, PageLayout, STYLESHEET};

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    /// Number of skill pages written.
    pub pages: usize,
    pub output_dir: PathBuf,
}

/// Build the site using the current time for the sitemap and feed.
///
/// # Errors
///
/// Returns the first discovery, read or write error encountered.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    build_site_at(config, Utc::now())
}

/// Build the site with an explicit build timestamp.
///
/// # Errors
///
/// Returns the first discovery, read or write error encountered.
pub fn build_site_at(config: &SiteConfig, now: DateTime<Utc>) -> Result<BuildReport> {
    let out = &config.output_dir;
    tracing::info!(source = %config.source_dir.display(), output = %out.display(), "building site");

    ensure_dir(out)?;
    write_file(&out.join("style.css"), STYLESHEET)?;
    tracing::debug!("wrote style.css");

    let documents = discover_documents(config)?;

    for doc in &documents {
        write_file(&out.join(&doc.slug).join("index.html"), &render_detail_page(config, doc))?;
        tracing::debug!(slug = %doc.slug, "wrote skill page");
    }

    write_file(&out.join("index.html"), &render_index_page(config, &documents))?;
    write_file(&out.join("sitemap.xml"), &generate_sitemap(config, &documents, now))?;
    write_file(&out.join("rss.xml"), &generate_rss(config, &documents, now)?)?;

    tracing::info!(pages = documents.len(), "build complete");
    Ok(BuildReport {
        pages: documents.len(),
        output_dir: out.clone(),
    })
}

/// Full HTML page for one skill.
#[must_use]
pub fn render_detail_page(config: &SiteConfig, doc: &Document) -> String {
    let body = render_markdown(&doc.body);
    render_page(
        config,
        &doc.name,
        &body,
        PageLayout::Detail {
            slug: &doc.slug,
            raw_markdown: &doc.body,
        },
    )
}

/// Landing page listing every skill as a card.
#[must_use]
pub fn render_index_page(config: &SiteConfig, documents: &[Document]) -> String {
    let cards = render_cards(documents).into_string();
    render_page(config, &config.title, &cards, PageLayout::Index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn setup() -> (tempfile::TempDir, SiteConfig) {
        let root = tempdir().unwrap();
        let skills = root.path().join("skills");
        for (slug, content) in [
            ("beta", "---\nname: Beta Skill\ndescription: Second <one>\n---\n# Beta\n\nBody b"),
            ("alpha", "---\nname: Alpha Skill\n---\n# Alpha\n\nSee https://example.com"),
        ] {
            let dir = skills.join(slug);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("SKILL.md"), content).unwrap();
        }
        let config = SiteConfig {
            source_dir: skills,
            output_dir: root.path().join("_site"),
            ..SiteConfig::default()
        };
        (root, config)
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn writes_every_output_file() {
        let (_root, config) = setup();
        let report = build_site(&config).unwrap();
        assert_eq!(report.pages, 2);

        let out = &config.output_dir;
        for file in [
            "style.css",
            "index.html",
            "sitemap.xml",
            "rss.xml",
            "alpha/index.html",
            "beta/index.html",
        ] {
            assert!(out.join(file).is_file(), "missing {file}");
        }
        assert_eq!(read(&out.join("style.css")), STYLESHEET);
    }

    #[test]
    fn detail_page_title_from_metadata() {
        let (_root, config) = setup();
        build_site(&config).unwrap();
        let page = read(&config.output_dir.join("beta/index.html"));
        assert!(page.contains("<title>Beta Skill</title>"));
        assert!(page.contains("<h1>Beta</h1>"));
    }

    #[test]
    fn index_lists_cards_in_slug_order() {
        let (_root, config) = setup();
        build_site(&config).unwrap();
        let index = read(&config.output_dir.join("index.html"));
        let alpha = index.find("Alpha Skill").unwrap();
        let beta = index.find("Beta Skill").unwrap();
        assert!(alpha < beta);
        assert_eq!(index.matches("No description provided.").count(), 1);
        assert!(index.contains("Second &lt;one&gt;"));
    }

    #[test]
    fn rebuild_is_byte_identical_with_same_timestamp() {
        let (_root, config) = setup();
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        build_site_at(&config, now).unwrap();
        let files = ["index.html", "alpha/index.html", "sitemap.xml", "rss.xml"];
        let first: Vec<String> = files.iter().map(|f| read(&config.output_dir.join(f))).collect();

        build_site_at(&config, now).unwrap();
        let second: Vec<String> = files.iter().map(|f| read(&config.output_dir.join(f))).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn pages_do_not_depend_on_timestamp() {
        let (_root, config) = setup();
        build_site_at(&config, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()).unwrap();
        let before = read(&config.output_dir.join("index.html"));
        build_site_at(&config, Utc.with_ymd_and_hms(2027, 6, 1, 0, 0, 0).unwrap()).unwrap();
        assert_eq!(before, read(&config.output_dir.join("index.html")));
    }

    #[test]
    fn missing_source_fails_after_creating_output() {
        let root = tempdir().unwrap();
        let config = SiteConfig {
            source_dir: root.path().join("nope"),
            output_dir: root.path().join("_site"),
            ..SiteConfig::default()
        };
        assert!(build_site(&config).is_err());
        assert!(config.output_dir.join("style.css").is_file());
    }

    #[test]
    fn render_detail_page_links_bare_urls() {
        let doc = Document::from_source("a".to_string(), "See https://example.com", "d");
        let page = render_detail_page(&SiteConfig::default(), &doc);
        assert!(page.contains(r#"<a href="https://example.com">"#));
        assert!(page.contains("readonly>See https://example.com</textarea>"));
    }
}
