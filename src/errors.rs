use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building the site or rewriting skills.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a generated file failed.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// YAML deserialization error in a config file.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Invalid configuration value.
    #[error("config error: {message}")]
    Config { message: String },

    /// The generated feed did not pass RSS validation.
    #[error("feed error: {message}")]
    Feed { message: String },

    /// The skills source directory does not exist.
    #[error("skills directory not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Two skill folders share the same name.
    #[error(
        "duplicate slug '{slug}': {} and {}",
        first.display(),
        second.display()
    )]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Convenience alias for `Result<T, SiteError>`.
pub type Result<T> = std::result::Result<T, SiteError>;
