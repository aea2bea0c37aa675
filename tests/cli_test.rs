//! Integration tests for the fscache binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const REFERENCE_PATH: &str =
    ".fscache/c/1/3/9/3/b/d/2/0/3/4/2/6/f/3/c/3/f/4/7/5/5/b/0/3/0/a/1/d/b/a/c/index.html";

fn fscache(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("fscache"));
    cmd.current_dir(temp.path());
    cmd.env_remove("FSCACHE_ROOT");
    cmd.env_remove("FSCACHE_FILE_NAME");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fscache(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("key/value cache"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fscache(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_set_then_get_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fscache(&temp)
        .args(["set", "http://google.com/abc", "<html>abc</html>"])
        .assert()
        .success();

    fscache(&temp)
        .args(["get", "http://google.com/abc"])
        .assert()
        .success()
        .stdout("<html>abc</html>");

    assert_eq!(
        fs::read(temp.path().join(REFERENCE_PATH))?,
        b"<html>abc</html>"
    );
    Ok(())
}

#[test]
fn cli_set_reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fscache(&temp)
        .args(["set", "piped"])
        .write_stdin("from stdin\n")
        .assert()
        .success();

    fscache(&temp)
        .args(["get", "piped"])
        .assert()
        .success()
        .stdout("from stdin\n");
    Ok(())
}

#[test]
fn cli_contains_exit_codes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fscache(&temp)
        .args(["contains", "k"])
        .assert()
        .code(1)
        .stdout("no\n");

    fscache(&temp).args(["set", "k", "v"]).assert().success();

    fscache(&temp)
        .args(["contains", "k"])
        .assert()
        .success()
        .stdout("yes\n");
    Ok(())
}

#[test]
fn cli_get_missing_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fscache(&temp)
        .args(["get", "missing"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Key not cached: missing"));
    Ok(())
}

#[test]
fn cli_get_missing_with_default() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fscache(&temp)
        .args(["get", "missing", "--default", "fallback"])
        .assert()
        .success()
        .stdout("fallback");
    Ok(())
}

#[test]
fn cli_path_prints_reference_layout() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fscache(&temp)
        .args(["path", "http://google.com/abc"])
        .assert()
        .success()
        .stdout(format!("{}\n", REFERENCE_PATH));
    Ok(())
}

#[test]
fn cli_delete_prunes_and_tolerates_missing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fscache(&temp).args(["set", "k", "v"]).assert().success();
    fscache(&temp).args(["delete", "k"]).assert().success();

    let namespace = temp.path().join(".fscache");
    assert!(namespace.is_dir());
    assert_eq!(fs::read_dir(&namespace)?.count(), 0);

    fscache(&temp)
        .args(["delete", "k"])
        .assert()
        .success()
        .stderr(predicate::str::contains("was not cached"));
    Ok(())
}

#[test]
fn cli_clear_removes_namespace() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fscache(&temp).args(["set", "a", "1"]).assert().success();
    fscache(&temp).args(["set", "b", "2"]).assert().success();

    fscache(&temp).arg("clear").assert().success();
    assert!(!temp.path().join(".fscache").exists());

    fscache(&temp)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("already empty"));
    Ok(())
}

#[test]
fn cli_root_flag_relocates_cache() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let root = temp.path().join("elsewhere");
    fscache(&temp)
        .args(["set", "k", "v", "--root"])
        .arg(&root)
        .assert()
        .success();

    assert!(root.join(".fscache").is_dir());
    assert!(!temp.path().join(".fscache").exists());
    Ok(())
}

#[test]
fn cli_root_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let root = temp.path().join("from-env");
    fscache(&temp)
        .env("FSCACHE_ROOT", &root)
        .args(["set", "k", "v"])
        .assert()
        .success();

    assert!(root.join(".fscache").is_dir());
    Ok(())
}

#[test]
fn cli_config_file_sets_file_name() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("fscache.yml"), "file_name: value.bin\n")?;

    fscache(&temp)
        .args(["path", "k"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("value.bin\n"));

    fscache(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("file_name: value.bin"));
    Ok(())
}

#[test]
fn cli_invalid_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("fscache.yml"), "file_name: a/b\n")?;

    fscache(&temp)
        .args(["contains", "k"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("path separator"));
    Ok(())
}

#[test]
fn cli_absolute_file_name_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let outside = temp.path().join("outside.txt");

    fscache(&temp)
        .args(["--root", "root", "--file-name"])
        .arg(&outside)
        .args(["set", "k", "pwned"])
        .assert()
        .code(2);

    assert!(!outside.exists());
    assert!(!temp.path().join("root").exists());
    Ok(())
}

#[test]
fn cli_quiet_suppresses_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fscache(&temp)
        .args(["-q", "set", "k", "v"])
        .assert()
        .success()
        .stdout("")
        .stderr("");
    Ok(())
}
