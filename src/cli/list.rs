use skillsite::SiteConfig;

pub(crate) fn run(config: &SiteConfig) {
    let documents = skillsite::discover_documents(config).unwrap_or_else(|e| {
        eprintln!("skillsite list: {e}");
        std::process::exit(1);
    });
    match serde_json::to_string_pretty(&documents) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("skillsite list: {e}");
            std::process::exit(1);
        }
    }
}
