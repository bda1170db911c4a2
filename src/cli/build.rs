use std::path::PathBuf;

use skillsite::SiteConfig;

pub(crate) fn run(
    mut config: SiteConfig,
    output: Option<PathBuf>,
    base_url: Option<String>,
    base_href: Option<String>,
) {
    if let Some(output) = output {
        config.output_dir = output;
    }
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    if let Some(base_href) = base_href {
        config.base_href = base_href;
    }
    super::check_config(&config);

    match skillsite::build_site(&config) {
        Ok(report) => {
            println!(
                "Built {} skill page(s), sitemap, and RSS feed in {}",
                report.pages,
                report.output_dir.display()
            );
        }
        Err(e) => {
            eprintln!("skillsite build: {e}");
            std::process::exit(1);
        }
    }
}
