use skillsite::SiteConfig;

pub(crate) fn run(config: &SiteConfig, prefix: Option<String>) {
    let prefix = prefix.as_deref().unwrap_or(&config.rename_prefix);
    match skillsite::strip_folder_prefix(config, prefix) {
        Ok(report) => {
            for skip in &report.skipped {
                eprintln!("warning: {}: {}", skip.from.display(), skip.reason);
            }
            println!("Renamed {} directories.", report.renamed.len());
        }
        Err(e) => {
            eprintln!("skillsite rename: {e}");
            std::process::exit(1);
        }
    }
}
