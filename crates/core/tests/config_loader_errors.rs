use guidemix_core::config::loader::{ConfigError, ConfigLoader};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn load(toml: &str) -> ConfigError {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, toml);
    ConfigLoader::load(Some(&cfg_path), None).unwrap_err()
}

#[test]
fn missing_file_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("nope/config.toml");
    let err = ConfigLoader::load(Some(&cfg_path), None).unwrap_err();
    match err {
        ConfigError::NotFound(_) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn bad_version_fails() {
    match load("version = 2\nprofiles = {}\n") {
        ConfigError::BadVersion(2) => {}
        other => panic!("expected BadVersion(2), got {other:?}"),
    }
}

#[test]
fn no_profiles_fails() {
    match load("version = 1\nprofiles = {}\n") {
        ConfigError::NoProfiles => {}
        other => panic!("expected NoProfiles, got {other:?}"),
    }
}

#[test]
fn invalid_toml_fails() {
    match load("version = 1\n[profiles.default\n") {
        ConfigError::ParseError(_, _) => {}
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn profile_not_found_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"
[profiles.default]
site_root = "/tmp/site"
tool_dirs = ["tools/dev"]
"#;
    write_file(&cfg_path, toml);

    let err = ConfigLoader::load(Some(&cfg_path), Some("missing")).unwrap_err();
    match err {
        ConfigError::ProfileNotFound(p) if p == "missing" => {}
        other => panic!("expected ProfileNotFound(\"missing\"), got {other:?}"),
    }
}

#[test]
fn unknown_locale_fails() {
    let toml = r#"
version = 1
[profiles.default]
site_root = "/tmp/site"
tool_dirs = ["tools/dev"]
primary_locale = "fr"
"#;
    match load(toml) {
        ConfigError::UnknownLocale(l) if l == "fr" => {}
        other => panic!("expected UnknownLocale(\"fr\"), got {other:?}"),
    }
}

#[test]
fn empty_tool_dirs_fails() {
    let toml = r#"
version = 1
[profiles.default]
site_root = "/tmp/site"
tool_dirs = []
"#;
    match load(toml) {
        ConfigError::NoToolDirs(p) if p == "default" => {}
        other => panic!("expected NoToolDirs, got {other:?}"),
    }
}

#[test]
fn companion_without_locale_fails() {
    let toml = r#"
version = 1
[profiles.default]
site_root = "/tmp/site"
tool_dirs = ["tools/dev"]
companion_dir = "{{site_root}}/en"
"#;
    match load(toml) {
        ConfigError::MissingCompanionLocale(_) => {}
        other => panic!("expected MissingCompanionLocale, got {other:?}"),
    }
}

#[test]
fn empty_markup_signatures_fail() {
    let toml = r#"
version = 1
[profiles.default]
site_root = "/tmp/site"
tool_dirs = ["tools/dev"]

[markup]
signatures = []
"#;
    match load(toml) {
        ConfigError::InvalidMarkup(_) => {}
        other => panic!("expected InvalidMarkup, got {other:?}"),
    }
}
