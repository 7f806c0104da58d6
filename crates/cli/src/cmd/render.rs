use crate::RenderArgs;
use guidemix_core::rewrite::{Outcome, rewrite};
use guidemix_core::variants::{Locale, VariantKey};
use std::io::Write;
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &RenderArgs) {
    let cfg = super::load_optional_config(config, profile);
    super::init_logging(cfg.as_ref());

    let key: VariantKey = match args.variant.parse() {
        Ok(k) => k,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

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

    let result = rewrite(&engine, &text, locale.vocabulary(), locale.variant(key));
    match &result.outcome {
        Outcome::Unresolved(reason) => {
            eprintln!("warning: {} left unchanged: {reason}", args.file.display());
        }
        Outcome::AlreadyApplied => {
            eprintln!("note: variant {key} is already applied to {}", args.file.display());
        }
        _ => {}
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(result.text.as_bytes()).and_then(|()| stdout.flush()) {
        eprintln!("Failed to write output: {e}");
        std::process::exit(1);
    }
}
