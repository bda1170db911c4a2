//! README summary generated from skill metadata.

use crate::config::SiteConfig;
use crate::discovery::find_skill_files;
use crate::errors::Result;
use crate::fs_util::write_file;
use crate::parser::parse_frontmatter;

/// Build README text from `(raw SKILL.md text)` entries, in order.
///
/// Only documents whose metadata has a non-empty `name` are listed.
/// Returns the text and the number of skills it lists.
#[must_use]
pub fn format_readme<'a>(config: &SiteConfig, sources: impl IntoIterator<Item = &'a str>) -> (String, usize) {
    let owner = config.owner();
    let mut out = format!("# {} by @{owner}\n\n", config.title);
    let mut count = 0;

    for raw in sources {
        let (metadata, _) = parse_frontmatter(raw);
        let Some(name) = metadata.get("name").filter(|n| !n.is_empty()) else {
            continue;
        };
        tracing::debug!(%name, "found skill");

        out.push_str(&format!("### {name}\n"));
        if let Some(description) = metadata.get("description").filter(|d| !d.is_empty()) {
            out.push_str(&format!("{description}\n\n"));
        }
        out.push_str("```bash\n");
        out.push_str(&format!("npx skills add {owner}/{name}\n"));
        out.push_str("```\n\n");
        count += 1;
    }

    (out, count)
}

/// Regenerate the README at the configured path, overwriting it.
///
/// Returns the number of skills listed.
///
/// # Errors
///
/// Returns an error if the source tree cannot be walked or read, or the
/// README cannot be written.
pub fn update_readme(config: &SiteConfig) -> Result<usize> {
    let paths = find_skill_files(&config.source_dir)?;
    let sources = paths
        .iter()
        .map(std::fs::read_to_string)
        .collect::<std::io::Result<Vec<_>>>()?;

    let (content, count) = format_readme(config, sources.iter().map(String::as_str));
    write_file(&config.readme_path, &content)?;
    tracing::info!(path = %config.readme_path.display(), skills = count, "updated README");
    Ok(count)
}
