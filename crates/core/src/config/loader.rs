use crate::config::types::{CompanionConfig, ConfigFile, LoggingConfig, Profile, ResolvedConfig};
use crate::markup::{Grammar, GrammarError};
use crate::segment::SegmentOptions;
use crate::variants::BUILTIN_LOCALES;
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,

    #[error("unknown locale '{0}' (built-in: {locales})", locales = BUILTIN_LOCALES.join(", "))]
    UnknownLocale(String),

    #[error("profile '{0}' lists no tool_dirs")]
    NoToolDirs(String),

    #[error("profile '{0}' sets companion_dir without companion_locale")]
    MissingCompanionLocale(String),

    #[error("invalid [markup] section: {0}")]
    InvalidMarkup(#[source] GrammarError),
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        if cf.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let active = profile_override
            .map(ToOwned::to_owned)
            .or(cf.profile.clone())
            .unwrap_or_else(|| "default".to_string());

        let prof = cf
            .profiles
            .get(&active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.clone()))?;

        cf.markup.validate().map_err(ConfigError::InvalidMarkup)?;

        let resolved =
            Self::resolve_profile(&active, prof, cf.segmentation, &cf.markup, &cf.logging)?;
        tracing::debug!(profile = %active, path = %path.display(), "loaded configuration");
        Ok(resolved)
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        segmentation: SegmentOptions,
        markup: &Grammar,
        log_cfg: &LoggingConfig,
    ) -> Result<ResolvedConfig, ConfigError> {
        let site_root = expand_path(&prof.site_root)?;
        let sub = |s: &str| s.replace("{{site_root}}", &site_root.to_string_lossy());

        if prof.tool_dirs.is_empty() {
            return Err(ConfigError::NoToolDirs(active.to_string()));
        }
        let tool_dirs = prof.tool_dirs.iter().map(PathBuf::from).collect();

        let primary_locale = builtin_locale(&prof.primary_locale)?;

        let companion = match &prof.companion_dir {
            Some(dir) => {
                let locale = prof
                    .companion_locale
                    .as_deref()
                    .ok_or_else(|| ConfigError::MissingCompanionLocale(active.to_string()))?;
                Some(CompanionConfig {
                    dir: expand_path(&sub(dir))?,
                    locale: builtin_locale(locale)?,
                })
            }
            None => None,
        };

        // Resolve log file path if present
        let logging = if let Some(ref file) = log_cfg.file {
            let expanded_file = expand_path(&sub(&file.to_string_lossy()))?;
            LoggingConfig {
                level: log_cfg.level.clone(),
                file_level: log_cfg.file_level.clone(),
                file: Some(expanded_file),
            }
        } else {
            log_cfg.clone()
        };

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            site_root,
            tool_dirs,
            primary_locale,
            companion,
            page_extension: prof.page_extension.trim_start_matches('.').to_string(),
            excluded_pages: prof.excluded_pages.clone(),
            segmentation,
            markup: markup.clone(),
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("guidemix").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("guidemix").join("config.toml")
}

fn builtin_locale(name: &str) -> Result<String, ConfigError> {
    if BUILTIN_LOCALES.contains(&name) {
        Ok(name.to_string())
    } else {
        Err(ConfigError::UnknownLocale(name.to_string()))
    }
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
