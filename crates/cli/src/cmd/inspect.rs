use crate::InspectArgs;
use guidemix_core::variants::Locale;
use guidemix_core::{Document, locate_headings, segment};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct HeadingJson {
    label: String,
    canonical_index: usize,
    line: usize,
}

#[derive(Debug, Serialize)]
struct SectionJson {
    label: String,
    canonical_index: usize,
    /// First and last line of the section, 1-based and inclusive.
    lines: [usize; 2],
}

#[derive(Debug, Serialize)]
struct IntroJson {
    text: String,
    line: usize,
}

#[derive(Debug, Serialize)]
struct InspectJson {
    file: String,
    locale: String,
    headings: Vec<HeadingJson>,
    sections: Vec<SectionJson>,
    intro: Option<IntroJson>,
    unresolved: Option<String>,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &InspectArgs) {
    let cfg = super::load_optional_config(config, profile);
    super::init_logging(cfg.as_ref());

    let engine = super::build_engine(cfg.as_ref());
    let locale_name = super::locale_name(args.locale.as_deref(), cfg.as_ref());
    let locale = match Locale::builtin(&locale_name) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let text = match std::fs::read_to_string(&args.file) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", args.file.display());
            std::process::exit(1);
        }
    };

    let doc = Document::new(&text);
    let occurrences = locate_headings(&doc, locale.vocabulary(), engine.matcher());

    let mut out = InspectJson {
        file: args.file.display().to_string(),
        locale: locale.name().to_string(),
        headings: occurrences
            .iter()
            .map(|o| HeadingJson {
                label: o.label.clone(),
                canonical_index: o.canonical_index,
                line: o.line() + 1,
            })
            .collect(),
        sections: Vec::new(),
        intro: None,
        unresolved: None,
    };

    match segment(&doc, &occurrences, &engine) {
        Ok(seg) => {
            out.sections = seg
                .sections
                .iter()
                .map(|s| SectionJson {
                    label: s.label.clone(),
                    canonical_index: s.canonical_index,
                    lines: [s.heading_line + 1, s.body_end],
                })
                .collect();
            out.intro =
                seg.intro.map(|i| IntroJson { text: i.text, line: i.heading_line + 1 });
        }
        Err(reason) => out.unresolved = Some(reason.to_string()),
    }

    if args.json {
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize output: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print_human(&out);
}

fn print_human(out: &InspectJson) {
    println!("{} ({})", out.file, out.locale);
    println!();

    if out.headings.is_empty() {
        println!("No standard headings found.");
    } else {
        println!("Headings:");
        for h in &out.headings {
            println!("  line {:>4}  [{}] {}", h.line, h.canonical_index, h.label);
        }
    }

    if let Some(intro) = &out.intro {
        println!();
        println!("Intro: line {} \"{}\"", intro.line, intro.text);
    }

    if !out.sections.is_empty() {
        println!();
        println!("Sections:");
        for s in &out.sections {
            println!("  lines {:>4}-{:<4}  {}", s.lines[0], s.lines[1], s.label);
        }
    }

    if let Some(reason) = &out.unresolved {
        println!();
        println!("Unresolved: {reason}");
    }
}
