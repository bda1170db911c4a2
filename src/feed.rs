//! Sitemap and RSS generation.
//!
//! The sitemap is built as a string; the feed goes through the `rss`
//! builders and is validated before it is written. The build timestamp is
//! passed in so every entry shares one date and tests can pin it.

use chrono::{DateTime, Utc};
use rss::{validation::Validate, ChannelBuilder, GuidBuilder, ItemBuilder};

use crate::config::SiteConfig;
use crate::errors::{Result, SiteError};
use crate::models::Document;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Escape the five XML special characters. `&` is replaced first.
#[must_use]
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Absolute URL of a skill page, with trailing slash.
#[must_use]
pub fn page_url(config: &SiteConfig, slug: &str) -> String {
    format!("{}/{slug}/", config.site_url())
}

/// Generate `sitemap.xml`: the site root plus one entry per document.
#[must_use]
pub fn generate_sitemap(config: &SiteConfig, documents: &[Document], now: DateTime<Utc>) -> String {
    let today = now.format("%Y-%m-%d").to_string();
    let mut xml = String::with_capacity(256 + documents.len() * 160);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
    xml.push('\n');

    push_url(&mut xml, &format!("{}/", config.site_url()), &today, "daily", "1.0");
    for doc in documents {
        push_url(&mut xml, &page_url(config, &doc.slug), &today, "weekly", "0.8");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn push_url(xml: &mut String, loc: &str, lastmod: &str, changefreq: &str, priority: &str) {
    xml.push_str("    <url>\n");
    xml.push_str(&format!("        <loc>{}</loc>\n", escape_xml(loc)));
    xml.push_str(&format!("        <lastmod>{lastmod}</lastmod>\n"));
    xml.push_str(&format!("        <changefreq>{changefreq}</changefreq>\n"));
    xml.push_str(&format!("        <priority>{priority}</priority>\n"));
    xml.push_str("    </url>\n");
}

/// RFC 2822 date in the `GMT` form feed readers expect.
fn rfc2822_gmt(now: DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Generate `rss.xml` (RSS 2.0) with one item per document.
///
/// Every item shares the build timestamp as its publication date.
///
/// # Errors
///
/// Returns `SiteError::Feed` if the channel fails RSS validation, for
/// example when the site URL cannot be parsed.
pub fn generate_rss(config: &SiteConfig, documents: &[Document], now: DateTime<Utc>) -> Result<String> {
    let stamp = rfc2822_gmt(now);

    let items: Vec<_> = documents
        .iter()
        .map(|doc| {
            let link = page_url(config, &doc.slug);
            ItemBuilder::default()
                .title(doc.name.clone())
                .link(Some(link.clone()))
                .description(doc.description.clone())
                .guid(GuidBuilder::default().permalink(true).value(link).build())
                .pub_date(stamp.clone())
                .build()
        })
        .collect();

    let channel = ChannelBuilder::default()
        .title(&config.title)
        .link(config.site_url())
        .description(&config.description)
        .language("en-us".to_string())
        .last_build_date(stamp)
        .items(items)
        .build();

    channel.validate().map_err(|e| SiteError::Feed {
        message: format!("rss validation failed: {e}"),
    })?;
    Ok(channel.to_string())
}
