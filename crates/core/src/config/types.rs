use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::markup::Grammar;
use crate::segment::SegmentOptions;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub segmentation: SegmentOptions,
    #[serde(default)]
    pub markup: Grammar,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub site_root: String,
    /// Directories holding tool pages, relative to `site_root`.
    pub tool_dirs: Vec<String>,
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,
    /// Root of the translated copy of the site. Supports `{{site_root}}`.
    pub companion_dir: Option<String>,
    pub companion_locale: Option<String>,
    #[serde(default = "default_page_extension")]
    pub page_extension: String,
    /// File names skipped in every tool directory.
    #[serde(default = "default_excluded_pages")]
    pub excluded_pages: Vec<String>,
}

fn default_primary_locale() -> String {
    "ko".to_string()
}

fn default_page_extension() -> String {
    "html".to_string()
}

fn default_excluded_pages() -> Vec<String> {
    vec!["index.html".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Translated copy of the site, processed alongside the primary pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionConfig {
    pub dir: PathBuf,
    pub locale: String,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub site_root: PathBuf,
    /// Tool directories, relative to `site_root`.
    pub tool_dirs: Vec<PathBuf>,
    pub primary_locale: String,
    pub companion: Option<CompanionConfig>,
    pub page_extension: String,
    pub excluded_pages: Vec<String>,
    pub segmentation: SegmentOptions,
    pub markup: Grammar,
    pub logging: LoggingConfig,
}
