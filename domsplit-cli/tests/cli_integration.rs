//! Integration tests for the domsplit CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn test_process_text_file() {
    let mut cmd = Command::cargo_bin("domsplit").unwrap();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("domains.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bestpizza.com\tbestPizza.com\tbest pizza\t100"))
        .stdout(predicate::str::contains("myGPTApp.io"))
        .stdout(predicate::str::contains("AIApp.com"))
        .stdout(predicate::str::contains("hour-Fitness247.co.uk"))
        .stdout(predicate::str::contains("xq7z9.net\txq7z9.net"))
        .stdout(predicate::str::contains("5 domains"));
}

#[test]
fn test_process_csv_first_column() {
    let mut cmd = Command::cargo_bin("domsplit").unwrap();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("domains.csv"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("cloudShop.io"))
        .stdout(predicate::str::contains("SEOTools.net"))
        .stdout(predicate::str::contains("namecheap").not())
        .stdout(predicate::str::contains("3 domains"));
}

#[test]
fn test_json_output() {
    let mut cmd = Command::cargo_bin("domsplit").unwrap();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("domains.txt"))
        .arg("-f")
        .arg("json");

    let assert = cmd.assert().success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(json["results"].as_array().unwrap().len(), 5);
    assert_eq!(json["results"][1]["converted"], "myGPTApp.io");
    assert_eq!(json["results"][4]["confidence"], 0);
    assert_eq!(json["summary"]["total_domains"], 5);
    assert!(json["word_cloud"].as_array().is_some());
}

#[test]
fn test_markdown_output() {
    let mut cmd = Command::cargo_bin("domsplit").unwrap();
    cmd.arg("process")
        .arg("-q")
        .arg("-d")
        .arg("bestpizza.com")
        .arg("-f")
        .arg("markdown");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("# Domain Segmentation Results"))
        .stdout(predicate::str::contains("| bestpizza.com | `bestPizza.com` | best pizza | 100 |"));
}

#[test]
fn test_glob_and_domains_combined() {
    let mut cmd = Command::cargo_bin("domsplit").unwrap();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("*.csv"))
        .arg("-d")
        .arg("bestpizza.com");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("4 domains"));
}

#[test]
fn test_min_confidence_filter() {
    let mut cmd = Command::cargo_bin("domsplit").unwrap();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("domains.txt"))
        .arg("--min-confidence")
        .arg("90");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bestPizza.com"))
        .stdout(predicate::str::contains("xq7z9").not())
        .stdout(predicate::str::contains("5 domains"));
}

#[test]
fn test_output_file_and_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("domsplit.toml");
    let output = temp_dir.path().join("out.json");
    fs::write(
        &config,
        "[output]\ndefault_format = \"json\"\npretty_json = false\ninclude_stats = false\n\n[processing]\nexecution = \"sequential\"\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("domsplit").unwrap();
    cmd.arg("process")
        .arg("-q")
        .arg("-d")
        .arg("aiapp.com")
        .arg("-c")
        .arg(&config)
        .arg("-o")
        .arg(&output);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 1);
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["results"][0]["converted"], "AIApp.com");
    assert_eq!(json["summary"]["total_domains"], 0);
}

#[test]
fn test_external_lexicon() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon = temp_dir.path().join("coffee.toml");
    fs::write(
        &lexicon,
        "[metadata]\ncode = \"coffee\"\nname = \"Coffee\"\n\n[acronyms]\nentries = [\"nyc\"]\n\n[[tiers]]\nname = \"core\"\nwords = [\"coffee\", \"roast\"]\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("domsplit").unwrap();
    cmd.arg("process")
        .arg("-q")
        .arg("-d")
        .arg("nyccoffeeroast.com")
        .arg("--lexicon-config")
        .arg(&lexicon);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("NYCCoffeeRoast.com"));
}

#[test]
fn test_no_input_fails() {
    let mut cmd = Command::cargo_bin("domsplit").unwrap();
    cmd.arg("process").arg("-q");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No input"));
}

#[test]
fn test_missing_file_fails() {
    let mut cmd = Command::cargo_bin("domsplit").unwrap();
    cmd.arg("process").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_unknown_lexicon_fails() {
    let mut cmd = Command::cargo_bin("domsplit").unwrap();
    cmd.arg("process")
        .arg("-d")
        .arg("a.com")
        .arg("--lexicon")
        .arg("klingon");

    cmd.assert().failure();
}

#[test]
fn test_segment_command() {
    let mut cmd = Command::cargo_bin("domsplit").unwrap();
    cmd.arg("segment").arg("bestzzpizza");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("zz"))
        .stdout(predicate::str::contains("unmatched"))
        .stdout(predicate::str::contains("confidence: 81"));
}

#[test]
fn test_generate_then_validate() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon = temp_dir.path().join("custom.toml");

    Command::cargo_bin("domsplit")
        .unwrap()
        .arg("generate-config")
        .arg("-c")
        .arg("custom")
        .arg("-o")
        .arg(&lexicon)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    Command::cargo_bin("domsplit")
        .unwrap()
        .arg("validate")
        .arg("-c")
        .arg(&lexicon)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Configuration is valid!"))
        .stdout(predicate::str::contains("Lexicon code: custom"));
}

#[test]
fn test_validate_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon = temp_dir.path().join("broken.toml");
    fs::write(&lexicon, "[metadata]\ncode = \"\"\nname = \"x\"\n").unwrap();

    Command::cargo_bin("domsplit")
        .unwrap()
        .arg("validate")
        .arg("-c")
        .arg(&lexicon)
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Configuration is invalid!"));
}

#[test]
fn test_list_lexicons() {
    let mut cmd = Command::cargo_bin("domsplit").unwrap();
    cmd.arg("list").arg("lexicons");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("en (english)"));
}

#[test]
fn test_list_formats() {
    let mut cmd = Command::cargo_bin("domsplit").unwrap();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("domsplit").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("segment"));
}
