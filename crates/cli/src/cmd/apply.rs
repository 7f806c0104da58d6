use crate::ApplyArgs;
use guidemix_core::batch::{BatchReport, BatchRunner, DocumentOutcome, DocumentReport, PageReport};
use guidemix_core::site::SiteWalker;
use std::path::Path;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Outcome")]
    outcome: &'static str,
    #[tabled(rename = "Documents")]
    count: usize,
}

#[derive(Tabled)]
struct VariantRow {
    #[tabled(rename = "Variant")]
    variant: String,
    #[tabled(rename = "Pages")]
    pages: usize,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ApplyArgs) {
    let cfg = super::load_config(config, profile);
    super::init_logging(Some(&cfg));

    let walker = match SiteWalker::from_config(&cfg) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to open site: {e}");
            std::process::exit(1);
        }
    };

    let pages = match walker.walk() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to enumerate pages: {e}");
            std::process::exit(1);
        }
    };

    let runner = match BatchRunner::from_config(&cfg) {
        Ok(r) => r.dry_run(args.dry_run),
        Err(e) => {
            eprintln!("Failed to prepare batch: {e}");
            std::process::exit(1);
        }
    };

    if !args.json {
        let bytes: u64 = pages.iter().map(|p| p.size).sum();
        println!(
            "Applying variants to {} pages ({} KiB) in {}",
            pages.len(),
            bytes.div_ceil(1024),
            walker.root().display()
        );
        if runner.is_dry_run() {
            println!("(dry-run mode)");
        }
        println!();
    }

    let json = args.json;
    let report = runner.run_with(&pages, |page| {
        if !json {
            print_page(page);
        }
    });

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print_summary(&report);
}

fn print_page(page: &PageReport) {
    println!("[{}] {} {}", page.variant, page.relative_path, describe(&page.primary));
    if let Some(companion) = &page.companion {
        println!("    {} {}", companion.path.display(), describe(companion));
    }
}

fn describe(doc: &DocumentReport) -> String {
    match &doc.outcome {
        DocumentOutcome::Transformed => "✓".to_string(),
        DocumentOutcome::Unchanged => "(no changes)".to_string(),
        DocumentOutcome::AlreadyApplied => "(already applied)".to_string(),
        DocumentOutcome::Unresolved(reason) => format!("✗ unresolved: {reason}"),
        DocumentOutcome::Failed(reason) => format!("✗ failed: {reason}"),
    }
}

fn print_summary(report: &BatchReport) {
    let stats = &report.stats;

    println!();
    println!("Processed {} pages ({} documents)", stats.pages, stats.documents);

    let counts = vec![
        CountRow { outcome: "transformed", count: stats.transformed },
        CountRow { outcome: "unchanged", count: stats.unchanged },
        CountRow { outcome: "already applied", count: stats.already_applied },
        CountRow { outcome: "unresolved", count: stats.unresolved },
        CountRow { outcome: "failed", count: stats.failed },
    ];
    println!("{}", Table::new(&counts).with(Style::rounded()));

    let variants: Vec<VariantRow> = stats
        .per_variant
        .iter()
        .map(|(key, pages)| VariantRow { variant: key.to_string(), pages: *pages })
        .collect();
    if !variants.is_empty() {
        println!("{}", Table::new(&variants).with(Style::rounded()));
    }

    if report.dry_run {
        println!("(dry-run mode - no files were modified)");
    } else {
        println!("Wrote {} files", stats.written);
    }
}
