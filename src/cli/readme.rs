use std::path::PathBuf;

use skillsite::SiteConfig;

pub(crate) fn run(mut config: SiteConfig, output: Option<PathBuf>) {
    if let Some(output) = output {
        config.readme_path = output;
    }

    match skillsite::update_readme(&config) {
        Ok(count) => {
            println!(
                "Updated {} with {count} skill(s)",
                config.readme_path.display()
            );
        }
        Err(e) => {
            eprintln!("skillsite readme: {e}");
            std::process::exit(1);
        }
    }
}
