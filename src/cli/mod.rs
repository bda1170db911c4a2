use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use skillsite::{FixKind, SiteConfig};

mod build;
mod fix;
mod list;
mod readme;
mod rename;

#[derive(Parser)]
#[command(
    name = "skillsite",
    version,
    about = "Static site generator for agent skill collections"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// YAML site configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skills source directory (overrides config)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
#[command(next_display_order = None)]
enum Commands {
    /// Render the skills into a static site
    Build {
        /// Output directory for the generated site
        #[arg(long)]
        output: Option<PathBuf>,
        /// Absolute site URL used in the sitemap and feed
        #[arg(long)]
        base_url: Option<String>,
        /// Value of the <base href> tag
        #[arg(long, env = "BASE_HREF")]
        base_href: Option<String>,
    },
    /// Apply a text fix to every SKILL.md
    Fix {
        /// Fix to apply
        #[arg(value_enum)]
        kind: FixKind,
        /// Report and diff changes without writing files
        #[arg(long)]
        dry_run: bool,
        /// Host prepended to root-relative image paths
        #[arg(long)]
        host: Option<String>,
    },
    /// Strip an export prefix from skill folder names
    Rename {
        /// Prefix to remove (overrides config)
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Regenerate the README skill summary
    Readme {
        /// README path (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List discovered skills as JSON
    List,
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

pub fn run(cli: Cli) {
    let Some(command) = cli.command else {
        eprintln!("Usage: skillsite <command> [args]");
        eprintln!("Run `skillsite --help` for details.");
        std::process::exit(1);
    };

    let mut config = load_config(cli.config.as_deref());
    if let Some(source) = cli.source {
        config.source_dir = source;
    }

    match command {
        Commands::Build {
            output,
            base_url,
            base_href,
        } => build::run(config, output, base_url, base_href),
        Commands::Fix {
            kind,
            dry_run,
            host,
        } => fix::run(config, kind, dry_run, host),
        Commands::Rename { prefix } => rename::run(&config, prefix),
        Commands::Readme { output } => readme::run(config, output),
        Commands::List => list::run(&config),
    }
}

/// Defaults, or the given YAML file. Exits on error.
fn load_config(path: Option<&std::path::Path>) -> SiteConfig {
    let Some(path) = path else {
        return SiteConfig::default();
    };
    SiteConfig::load(path).unwrap_or_else(|e| {
        eprintln!("skillsite: {}: {e}", path.display());
        std::process::exit(1);
    })
}

/// Re-validate after command-line overrides. Exits on error.
fn check_config(config: &SiteConfig) {
    if let Err(e) = config.validate() {
        eprintln!("skillsite: {e}");
        std::process::exit(1);
    }
}
