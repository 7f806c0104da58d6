//! Tool page enumeration.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::ResolvedConfig;

#[derive(Debug, Error)]
pub enum SiteWalkerError {
    #[error("site root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk tool directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),

    #[error("failed to read file metadata {0}: {1}")]
    MetadataError(String, #[source] std::io::Error),
}

/// A tool page and where its translation lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePage {
    /// `dir/file` path relative to the site root, with `/` separators.
    pub relative_path: String,
    /// Absolute path of the primary-language page.
    pub primary_path: PathBuf,
    /// Companion translation, when one exists on disk.
    pub companion_path: Option<PathBuf>,
    /// Primary page size in bytes.
    pub size: u64,
}

/// Lists tool pages directly inside each configured tool directory.
#[derive(Debug)]
pub struct SiteWalker {
    root: PathBuf,
    tool_dirs: Vec<PathBuf>,
    extension: String,
    excluded_pages: Vec<String>,
    companion_root: Option<PathBuf>,
}

impl SiteWalker {
    /// Create a walker for `tool_dirs` (relative to `root`).
    pub fn new(root: &Path, tool_dirs: Vec<PathBuf>) -> Result<Self, SiteWalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| SiteWalkerError::MissingRoot(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(SiteWalkerError::MissingRoot(root.display().to_string()));
        }

        Ok(Self {
            root,
            tool_dirs,
            extension: "html".to_string(),
            excluded_pages: vec!["index.html".to_string()],
            companion_root: None,
        })
    }

    /// Walker configured from a resolved profile.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, SiteWalkerError> {
        let walker = Self::new(&config.site_root, config.tool_dirs.clone())?
            .with_extension(&config.page_extension)
            .with_exclusions(config.excluded_pages.clone());

        Ok(match &config.companion {
            Some(companion) => walker.with_companion(&companion.dir),
            None => walker,
        })
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// File names to skip in every tool directory.
    pub fn with_exclusions(mut self, excluded_pages: Vec<String>) -> Self {
        self.excluded_pages = excluded_pages;
        self
    }

    /// Root of the translated site. Companion pages sit at the same
    /// relative path below it.
    pub fn with_companion(mut self, companion_root: &Path) -> Self {
        self.companion_root = Some(companion_root.to_path_buf());
        self
    }

    /// Enumerate pages, sorted by their `dir/file` path.
    pub fn walk(&self) -> Result<Vec<SitePage>, SiteWalkerError> {
        let mut pages = Vec::new();

        for dir in &self.tool_dirs {
            let abs_dir = self.root.join(dir);
            if !abs_dir.is_dir() {
                tracing::warn!(dir = %dir.display(), "tool directory not found, skipping");
                continue;
            }

            for entry in WalkDir::new(&abs_dir).min_depth(1).max_depth(1).follow_links(false) {
                let entry = entry
                    .map_err(|e| SiteWalkerError::WalkError(abs_dir.display().to_string(), e))?;

                let path = entry.path();
                let name = entry.file_name().to_string_lossy();
                if !path.is_file() || !self.is_page(&name) {
                    continue;
                }

                let metadata = path
                    .metadata()
                    .map_err(|e| SiteWalkerError::MetadataError(path.display().to_string(), e))?;

                let relative_path = relative_key(dir, &name);
                let companion_path = self
                    .companion_root
                    .as_ref()
                    .map(|root| root.join(dir).join(&*name))
                    .filter(|p| p.is_file());

                pages.push(SitePage {
                    relative_path,
                    primary_path: path.to_path_buf(),
                    companion_path,
                    size: metadata.len(),
                });
            }
        }

        pages.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        tracing::debug!(pages = pages.len(), "enumerated tool pages");
        Ok(pages)
    }

    fn is_page(&self, name: &str) -> bool {
        !name.starts_with('.')
            && !self.excluded_pages.iter().any(|excluded| excluded == name)
            && Path::new(name)
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension))
    }

    /// Get the site root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn relative_key(dir: &Path, name: &str) -> String {
    let dir = dir
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    if dir.is_empty() { name.to_string() } else { format!("{dir}/{name}") }
}
