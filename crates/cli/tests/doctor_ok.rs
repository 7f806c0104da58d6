use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
site_root = "/tmp/site"
tool_dirs = ["tools/dev", "tools/pdf"]
companion_dir = "{{site_root}}/en"
companion_locale = "en"
"#;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gmx"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   gmx doctor"))
        .stdout(predicate::str::contains(format!("version: {}", env!("CARGO_PKG_VERSION"))))
        .stdout(predicate::str::contains("profile: default"))
        .stdout(predicate::str::contains("site_root: /tmp/site"))
        .stdout(predicate::str::contains("tool_dirs: tools/dev, tools/pdf"))
        .stdout(predicate::str::contains("companion: /tmp/site/en (en)"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("guidemix").join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
profile = "default"
[profiles.default]
site_root = "/tmp/site"
tool_dirs = ["tools/life"]
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gmx"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   gmx doctor"))
        .stdout(predicate::str::contains("primary_locale: ko"))
        .stdout(predicate::str::contains("companion: (none)"))
        .stdout(predicate::str::contains("page_extension: html"));
}

#[test]
fn doctor_selects_profile_override() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    write_file(
        &cfg,
        r#"
version = 1
profile = "ko"

[profiles.ko]
site_root = "/tmp/ko"
tool_dirs = ["tools"]

[profiles.en]
site_root = "/tmp/en"
tool_dirs = ["tools"]
primary_locale = "en"
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gmx"));
    cmd.args(["doctor", "--profile", "en", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("profile: en"))
        .stdout(predicate::str::contains("primary_locale: en"));
}
