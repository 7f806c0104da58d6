pub mod apply;
pub mod doctor;
pub mod inspect;
pub mod render;

use guidemix_core::Engine;
use guidemix_core::config::{ConfigError, ConfigLoader, ResolvedConfig};
use guidemix_core::markup::Grammar;
use guidemix_core::segment::SegmentOptions;
use std::path::Path;

/// Install logging for `cfg`, or stderr-only logging without a config.
pub(crate) fn init_logging(cfg: Option<&ResolvedConfig>) {
    let result = match cfg {
        Some(rc) => crate::logging::init(&rc.logging),
        None => crate::logging::init_default(),
    };
    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }
}

/// Load the profile or exit with status 1.
pub(crate) fn load_config(config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    }
}

/// Config for single-file commands.
///
/// A missing default config is fine; an explicit `--config` that fails to
/// load, or a broken default config, is not.
pub(crate) fn load_optional_config(
    config: Option<&Path>,
    profile: Option<&str>,
) -> Option<ResolvedConfig> {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => Some(rc),
        Err(ConfigError::NotFound(_)) if config.is_none() => None,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    }
}

/// Engine for the configured markup, or the defaults without a config.
pub(crate) fn build_engine(cfg: Option<&ResolvedConfig>) -> Engine {
    let (grammar, options) = match cfg {
        Some(rc) => (rc.markup.clone(), rc.segmentation),
        None => (Grammar::default(), SegmentOptions::default()),
    };
    match Engine::new(grammar, options) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Invalid markup grammar: {e}");
            std::process::exit(1);
        }
    }
}

/// Locale name: explicit flag, then the profile's primary locale, then `ko`.
pub(crate) fn locale_name(flag: Option<&str>, cfg: Option<&ResolvedConfig>) -> String {
    flag.map(ToOwned::to_owned)
        .or_else(|| cfg.map(|rc| rc.primary_locale.clone()))
        .unwrap_or_else(|| "ko".to_string())
}
