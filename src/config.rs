//! Site configuration.
//!
//! A [`SiteConfig`] is built once at startup (defaults, then an optional YAML
//! file, then command-line overrides) and passed by reference to every
//! operation. Library code never reads the process environment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SiteError};

/// Settings shared by the site builder and the corpus maintenance commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SiteConfig {
    /// Root of the skill tree (folders containing `SKILL.md`).
    pub source_dir: PathBuf,
    /// Directory the generated site is written to.
    pub output_dir: PathBuf,
    /// Absolute site URL used in the sitemap and feed, without trailing slash.
    pub base_url: String,
    /// Value of the `<base href>` tag in every page.
    pub base_href: String,
    pub title: String,
    pub author: String,
    /// Channel description of the RSS feed.
    pub description: String,
    /// `owner/repo` used in install commands and the GitHub link.
    pub repository: String,
    /// Card text for skills without a `description` key.
    pub default_description: String,
    /// Host prepended to root-relative image paths by the image fixer.
    pub image_host: String,
    /// Folder-name prefix removed by the rename command.
    pub rename_prefix: String,
    pub readme_path: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("skills"),
            output_dir: PathBuf::from("_site"),
            base_url: "https://rodydavis.github.io/skills".to_string(),
            base_href: "/".to_string(),
            title: "Agent Skills".to_string(),
            author: "Rody Davis".to_string(),
            description: "A collection of agent skills by Rody Davis.".to_string(),
            repository: "rodydavis/skills".to_string(),
            default_description: "No description provided.".to_string(),
            image_host: "https://rodydavis.com".to_string(),
            rename_prefix: "rodydavis_com_posts_".to_string(),
            readme_path: PathBuf::from("README.md"),
        }
    }
}

impl SiteConfig {
    /// Load a config from a YAML file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Io` if the file cannot be read, `SiteError::Yaml`
    /// if it is not valid YAML, or `SiteError::Config` if a value is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: SiteConfig = if text.trim().is_empty() {
            SiteConfig::default()
        } else {
            serde_yaml_ng::from_str(&text)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check values that would otherwise produce broken output.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Config` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if !self.repository.contains('/') {
            return Err(SiteError::Config {
                message: format!(
                    "repository must be in owner/repo form, got '{}'",
                    self.repository
                ),
            });
        }
        if self.base_href.is_empty() {
            return Err(SiteError::Config {
                message: "base-href must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn site_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Owner part of `repository` (`rodydavis` for `rodydavis/skills`).
    #[must_use]
    pub fn owner(&self) -> &str {
        self.repository
            .split_once('/')
            .map_or(self.repository.as_str(), |(owner, _)| owner)
    }

    /// Command that installs every skill in the repository.
    #[must_use]
    pub fn install_all_command(&self) -> String {
        format!("npx skills add {}", self.repository)
    }

    /// Command that installs a single skill.
    #[must_use]
    pub fn install_command(&self, slug: &str) -> String {
        format!("npx skills add {} --skill {slug}", self.repository)
    }
}
