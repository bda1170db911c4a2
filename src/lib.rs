pub mod config;
pub mod discovery;
pub mod errors;
pub mod feed;
pub mod fixer;
mod fs_util;
pub mod markdown;
pub mod models;
pub mod parser;
pub mod readme;
pub mod rename;
pub mod site;
pub mod template;

// Re-export key types at crate root for convenience.
pub use config::SiteConfig;
pub use discovery::{discover_documents, find_skill_files, walk_skill_files};
pub use errors::{Result, SiteError};
pub use feed::{escape_xml, generate_rss, generate_sitemap};
pub use fixer::{
    apply_fix, dedupe_headings, fix_skills, prefix_image_paths, strip_markdown_links, FileChange,
    FixKind, FixOutcome, FixReport,
};
pub use markdown::render_markdown;
pub use models::Document;
pub use parser::{parse_frontmatter, read_document, Metadata, SKILL_FILE};
pub use readme::{format_readme, update_readme};
pub use rename::{strip_folder_prefix, RenameReport, SkippedRename};
pub use site::{build_site, build_site_at, BuildReport};
pub use template::{render_page, PageLayout, STYLESHEET};
