use skillsite::{FixKind, SiteConfig};

pub(crate) fn run(mut config: SiteConfig, kind: FixKind, dry_run: bool, host: Option<String>) {
    if let Some(host) = host {
        config.image_host = host;
    }

    let report = match skillsite::fix_skills(&config, kind, dry_run) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("skillsite fix: {e}");
            std::process::exit(1);
        }
    };

    if report.dry_run {
        for change in &report.changes {
            print!("{}", change.diff());
        }
    }

    println!(
        "{} {} in {} of {} file(s).",
        if report.dry_run { "Found" } else { "Fixed" },
        kind.label(),
        report.changes.len(),
        report.scanned
    );
}
