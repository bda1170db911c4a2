//! HTML page templates and the shared stylesheet.
//!
//! Pages are maud markup. Rendered Markdown and the card grid are inserted
//! pre-escaped; every other value goes through maud's escaping.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::config::SiteConfig;
use crate::models::Document;

/// Stylesheet written to `style.css` and referenced by every page.
pub const STYLESHEET: &str = include_str!("assets/style.css");

const FONTS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Outfit:wght@300;400;600;800&display=swap";

/// Clipboard helpers. Each button shows a confirmation for two seconds and
/// is disabled meanwhile; failures are only logged to the console.
const SCRIPT: PreEscaped<&str> = PreEscaped(
    r#"
function copyToClipboard(text, btn) {
    navigator.clipboard.writeText(text).then(() => {
        const originalText = btn.innerText;
        btn.innerText = '✅ Copied!';
        btn.disabled = true;
        setTimeout(() => {
            btn.innerText = originalText;
            btn.disabled = false;
        }, 2000);
    }).catch(err => {
        console.error('Failed to copy: ', err);
    });
}
function copyInstall(btn, elementId) {
    const text = document.getElementById(elementId).innerText;
    copyToClipboard(text, btn);
}
function copyMarkdown(btn) {
    const text = document.getElementById('raw-markdown').value;
    copyToClipboard(text, btn);
}
"#,
);

/// Which of the two page shapes to render.
#[derive(Debug, Clone, Copy)]
pub enum PageLayout<'a> {
    /// Site landing page with the card grid.
    Index,
    /// A single skill page.
    Detail {
        slug: &'a str,
        /// Markdown body offered by the "Copy as Markdown" button.
        raw_markdown: &'a str,
    },
}

/// Render a complete HTML document.
///
/// `content` is trusted HTML: a rendered skill body for detail pages, or
/// the card grid for the index.
#[must_use]
pub fn render_page(config: &SiteConfig, title: &str, content: &str, layout: PageLayout<'_>) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                base href=(config.base_href);
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link href=(FONTS_URL) rel="stylesheet";
                link rel="stylesheet" href="style.css";
                link rel="alternate" type="application/rss+xml" title=(config.title) href="rss.xml";
            }
            body {
                div class="container" {
                    @match layout {
                        PageLayout::Index => {
                            (index_body(config, content))
                        }
                        PageLayout::Detail { slug, raw_markdown } => {
                            (detail_body(config, content, slug, raw_markdown))
                        }
                    }
                    script { (SCRIPT) }
                }
            }
        }
    };
    markup.into_string()
}

fn index_body(config: &SiteConfig, cards: &str) -> Markup {
    html! {
        header {
            h1 { (config.title) }
            p class="byline" { "by " (config.author) }
            div class="install-block" {
                span id="index-install-cmd" { (config.install_all_command()) }
                button class="copy-btn" onclick="copyInstall(this, 'index-install-cmd')" { "Copy" }
            }
        }
        main class="skills-grid" { (PreEscaped(cards)) }
        footer class="site-footer" {
            a href="rss.xml" { "RSS" }
            " • "
            a href=(format!("https://github.com/{}", config.repository)) { "GitHub" }
        }
    }
}

fn detail_body(config: &SiteConfig, content: &str, slug: &str, raw: &str) -> Markup {
    html! {
        div class="nav-header" {
            a href="." class="back-link" { "← Back to Skills" }
            button class="gradient-btn" onclick="copyMarkdown(this)" { "Copy as Markdown" }
        }
        div class="install-block" {
            span id="install-cmd" { (config.install_command(slug)) }
            button class="copy-btn" onclick="copyInstall(this, 'install-cmd')" { "Copy" }
        }
        div class="detail-content" { (PreEscaped(content)) }
        textarea id="raw-markdown" class="raw-markdown" readonly { (raw) }
    }
}

/// Index card for one document.
#[must_use]
pub fn render_card(doc: &Document) -> Markup {
    html! {
        article class="skill-card" {
            div {
                h2 class="skill-title" { (doc.name) }
                p class="skill-desc" { (doc.description) }
            }
            a href=(format!("{}/", doc.slug)) class="btn" { "View Skill" }
        }
    }
}

/// Cards for every document, in order.
#[must_use]
pub fn render_cards(documents: &[Document]) -> Markup {
    html! {
        @for doc in documents {
            (render_card(doc))
        }
    }
}
