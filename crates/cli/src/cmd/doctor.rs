use guidemix_core::config::loader::{ConfigLoader, default_config_path};
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            super::init_logging(Some(&rc));
            tracing::debug!(profile = %rc.active_profile, "doctor loaded configuration");

            println!("OK   gmx doctor");
            println!("version: {}", guidemix_core::version());
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("site_root: {}", rc.site_root.display());
            let dirs: Vec<_> = rc.tool_dirs.iter().map(|d| d.display().to_string()).collect();
            println!("tool_dirs: {}", dirs.join(", "));
            println!("primary_locale: {}", rc.primary_locale);
            match &rc.companion {
                Some(c) => println!("companion: {} ({})", c.dir.display(), c.locale),
                None => println!("companion: (none)"),
            }
            println!("page_extension: {}", rc.page_extension);
            println!("excluded_pages: {}", rc.excluded_pages.join(", "));
            println!("segmentation.tail_window: {}", rc.segmentation.tail_window);
            println!("segmentation.intro_lookback: {}", rc.segmentation.intro_lookback);
            println!("markup.heading_tag: {}", rc.markup.heading_tag);
            println!("markup.block_tag: {}", rc.markup.block_tag);
            if !rc.site_root.is_dir() {
                println!("warning: site_root does not exist yet");
            }
        }
        Err(e) => {
            println!("FAIL gmx doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
