//! CLI end-to-end tests
//!
//! Tests for the romtag command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the romtag binary
#[allow(deprecated)]
fn romtag_cmd() -> Command {
    Command::cargo_bin("romtag").unwrap()
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = romtag_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = romtag_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("romtag"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = romtag_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("romtag "));
}

#[test]
fn test_cli_tags_text() {
    let mut cmd = romtag_cmd();
    cmd.args(["tags", "Super Mario World (USA) (En) [!].sfc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Super Mario World"))
        .stdout(predicate::str::contains("region:us"))
        .stdout(predicate::str::contains("lang:en"))
        .stdout(predicate::str::contains("dump:verified"));
}

#[test]
fn test_cli_tags_json() {
    let mut cmd = romtag_cmd();
    let output = cmd
        .args(["tags", "--json", "Tetris (Japan).gb", "Sonic (Europe).md"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0]["input"], "Tetris (Japan).gb");
    assert_eq!(value[0]["tags"][0]["type"], "region");
    assert_eq!(value[1]["tags"][0]["value"], "eu");
}

#[test]
fn test_cli_tags_titles_follow_list_numbering() {
    let mut cmd = romtag_cmd();
    cmd.args(["tags", "01 - Alpha (USA).nes", "02 - Beta.nes", "03 - Gamma.nes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Alpha\n"))
        .stdout(predicate::str::contains("title: Gamma\n"));
}

#[test]
fn test_cli_tags_requires_name() {
    let mut cmd = romtag_cmd();
    cmd.arg("tags").assert().failure();
}

#[test]
fn test_cli_title() {
    let mut cmd = romtag_cmd();
    cmd.args(["title", "The.Dark.Knight.2008.1080p.BluRay.x264-GROUP.mkv"])
        .assert()
        .success()
        .stdout("The Dark Knight 2008\n");
}

#[test]
fn test_cli_title_strip_leading_numbers() {
    let mut cmd = romtag_cmd();
    cmd.args(["title", "--strip-leading-numbers", "01 - Opening.flac"])
        .assert()
        .success()
        .stdout("Opening\n");
}

#[test]
fn test_cli_title_detects_numbered_list() {
    let mut cmd = romtag_cmd();
    cmd.args(["title", "01 - Alpha.nes", "02 - Beta.nes", "03 - Gamma.nes"])
        .assert()
        .success()
        .stdout("Alpha\nBeta\nGamma\n");
}

#[test]
fn test_cli_vocab_filtered() {
    let mut cmd = romtag_cmd();
    cmd.args(["vocab", "--type", "region"])
        .assert()
        .success()
        .stdout(predicate::str::contains("region:us"))
        .stdout(predicate::str::contains("lang:").not());
}

#[test]
fn test_cli_vocab_unknown_type() {
    let mut cmd = romtag_cmd();
    cmd.args(["vocab", "--type", "flavor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid tag type"));
}

#[test]
fn test_cli_scan_text() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("Contra (USA).nes"), b"").unwrap();
    fs::write(temp.path().join("notes.txt"), b"").unwrap();

    let mut cmd = romtag_cmd();
    cmd.arg("scan")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\tContra\tregion:us extension:nes"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn test_cli_scan_jsonl() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("A (USA).nes"), b"").unwrap();
    fs::write(temp.path().join("B (Japan).sfc"), b"").unwrap();

    let mut cmd = romtag_cmd();
    let output = cmd
        .args(["scan", "--format", "jsonl"])
        .arg(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["title"], "A");
    assert_eq!(rows[0]["kind"], "rom");
    assert_eq!(rows[1]["ext"], ".sfc");
}

#[test]
fn test_cli_scan_missing_dir() {
    let temp = tempdir().unwrap();
    let mut cmd = romtag_cmd();
    cmd.arg("scan")
        .arg(temp.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_cli_scan_uses_config_extensions() {
    let temp = tempdir().unwrap();
    let roms = temp.path().join("roms");
    fs::create_dir_all(&roms).unwrap();
    fs::write(roms.join("A.nes"), b"").unwrap();
    fs::write(roms.join("B.sfc"), b"").unwrap();

    let config_file = temp.path().join("romtag.toml");
    fs::write(
        &config_file,
        r#"
[scan]
extensions = ["sfc"]
"#,
    )
    .unwrap();

    let mut cmd = romtag_cmd();
    cmd.arg("--config")
        .arg(&config_file)
        .arg("scan")
        .arg(&roms)
        .assert()
        .success()
        .stdout(predicate::str::contains("B.sfc"))
        .stdout(predicate::str::contains("A.nes").not());
}

#[test]
fn test_cli_validate_valid_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.toml");
    fs::write(
        &config_file,
        r#"
[parser]
max_tags = 20

[output]
format = "json"
"#,
    )
    .unwrap();

    let mut cmd = romtag_cmd();
    cmd.arg("validate")
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Max tags: 20"));
}

#[test]
fn test_cli_validate_invalid_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.toml");
    fs::write(&config_file, "[parser]\nmax_tags = 0\n").unwrap();

    let mut cmd = romtag_cmd();
    cmd.arg("validate")
        .arg(&config_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_tags"));
}

#[test]
fn test_cli_validate_global_config_flag() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.toml");
    fs::write(&config_file, "[output]\npretty = true\n").unwrap();

    let mut cmd = romtag_cmd();
    cmd.arg("--config")
        .arg(&config_file)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_cli_validate_missing_file() {
    let mut cmd = romtag_cmd();
    cmd.args(["validate", "/nonexistent/romtag.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}
