use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MINT: &str = "contract Foo { function mint(address to) public { } }";
const GUARDED: &str =
    "@secure contract Vault { function withdraw() public onlyOwner { require(ok); } }";

fn aurion() -> Command {
    let mut cmd = Command::cargo_bin("aurion").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_parse_valid_file() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "foo.aur", MINT);

    aurion()
        .arg("parse")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("VALID"))
        .stdout(predicate::str::contains("Contract: Foo"));
}

#[test]
fn test_parse_invalid_file_fails() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "bad.aur", "not a contract");

    aurion()
        .arg("parse")
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("No contract definition found"));
}

#[test]
fn test_scan_directory_json() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.aur", MINT);
    write(&dir, "b.aur", GUARDED);
    write(&dir, "notes.txt", "contract Ignored {}");

    let output = aurion()
        .args(["scan", "--json"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0]["file"].as_str().unwrap().ends_with("a.aur"));
    assert_eq!(entries[0]["security"]["score"], 80);
    assert_eq!(entries[0]["security"]["issues"][0]["type"], "high");
    assert_eq!(entries[1]["security"]["score"], 100);
}

#[test]
fn test_scan_skips_unreadable_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.aur", MINT);
    fs::write(dir.path().join("b.aur"), [0xff, 0xfe, 0x00]).unwrap();
    write(&dir, "c.aur", GUARDED);

    let output = aurion()
        .args(["scan", "--json"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries[1]["security"].is_null());
    assert!(entries[1]["error"].as_str().unwrap().contains("b.aur"));
    assert_eq!(entries[2]["security"]["score"], 100);

    aurion()
        .arg("scan")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("SKIPPED"))
        .stdout(predicate::str::contains("Scanned 3 file(s)"));
}

#[test]
fn test_gas_quick() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "foo.aur", MINT);

    aurion()
        .args(["gas", "--quick"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("26000-76000 gas"));
}

#[test]
fn test_analyze_markdown() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "foo.aur", MINT);

    aurion()
        .args(["analyze", "--markdown"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Aurion Contract Analysis"))
        .stdout(predicate::str::contains("Missing Access Control"));
}

#[test]
fn test_compile_to_file() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "foo.aur", MINT);
    let out = dir.path().join("Foo.sol");

    aurion()
        .args(["compile", "--target", "evm", "--level", "high", "-o"])
        .arg(&out)
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("[high] Missing Access Control"));

    let solidity = fs::read_to_string(&out).unwrap();
    assert!(solidity.contains("pragma solidity ^0.8.19;"));
    assert!(solidity.contains("contract Foo {"));
}

#[test]
fn test_compile_avm_stdout() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "foo.aur", MINT);

    aurion()
        .args(["compile", "--target", "avm"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(".contract Foo"));
}

#[test]
fn test_compile_failure_exit_code() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "bad.aur", "not a contract");

    aurion()
        .arg("compile")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No contract definition found"));
}

#[test]
fn test_config_overrides_pragma() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "foo.aur", MINT);
    let config = write(&dir, "aurion.json", r#"{"emitter": {"solidity_pragma": "0.8.24"}}"#);

    aurion()
        .arg("--config")
        .arg(&config)
        .arg("compile")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("pragma solidity 0.8.24;"));
}

#[test]
fn test_template_kinds() {
    aurion()
        .args(["template", "governance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("contract GovernanceDAO"));

    aurion().args(["template", "lottery"]).assert().failure();
}

#[test]
fn test_optimize_suggest() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "foo.aur", MINT);

    aurion()
        .args(["optimize", "--suggest"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("@gas-optimized"));
}
