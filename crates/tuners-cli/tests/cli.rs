use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Command isolated from the user's config and Azure environment
fn cmd(config_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tuners-cost").unwrap();
    cmd.env("TUNERS_CONFIG", config_path)
        .env_remove("AZURE_PREDICTION_KEY")
        .env_remove("AZURE_ENDPOINT_URL")
        .env_remove("AZURE_ENDPOINT_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn temp_config() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().expect("create temp dir");
    let path = tmp.path().join("config.json");
    (tmp, path)
}

#[test]
fn costs_table() {
    let (_tmp, config) = temp_config();
    cmd(&config)
        .arg("costs")
        .assert()
        .success()
        .stdout(contains("SUV"))
        .stdout(contains("$1100/year"))
        .stdout(contains("52-month installment at $100/month"));
}

#[test]
fn costs_json() {
    let (_tmp, config) = temp_config();
    let out = cmd(&config)
        .args(["--format", "json", "costs"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: Value = serde_json::from_slice(&out).expect("valid json output");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["category"], "Truck");
    assert_eq!(rows[4]["finance_option"], "28-month installment at $85/month");
}

#[test]
fn predict_without_input() {
    let (_tmp, config) = temp_config();
    cmd(&config)
        .arg("predict")
        .assert()
        .failure()
        .stderr(contains("Please provide an image URL or upload a file."));
}

#[test]
fn predict_blank_url_counts_as_no_input() {
    let (_tmp, config) = temp_config();
    cmd(&config)
        .args(["predict", "--url", "   "])
        .assert()
        .failure()
        .stderr(contains("Please provide an image URL or upload a file."));
}

#[test]
fn predict_missing_file() {
    let (tmp, config) = temp_config();
    let missing = tmp.path().join("nope.jpg");
    cmd(&config)
        .args(["predict", "--url", "https://images.example.com/car.jpg", "--file"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(contains("File not found"));
}

#[test]
fn predict_invalid_url() {
    let (_tmp, config) = temp_config();
    cmd(&config)
        .args(["predict", "--url", "ftp://images.example.com/car.jpg"])
        .assert()
        .failure()
        .stderr(contains("Invalid image URL"));
}

#[test]
fn predict_requires_prediction_key() {
    let (_tmp, config) = temp_config();
    cmd(&config)
        .args(["predict", "--url", "https://images.example.com/car.jpg"])
        .assert()
        .failure()
        .stderr(contains("prediction_key"));
}

#[test]
fn predict_url_requires_url_endpoint() {
    let (_tmp, config) = temp_config();
    cmd(&config)
        .env("AZURE_PREDICTION_KEY", "k")
        .env("AZURE_ENDPOINT_FILE", "http://127.0.0.1:9/image")
        .args(["predict", "--url", "https://images.example.com/car.jpg"])
        .assert()
        .failure()
        .stderr(contains("endpoint_url"));
}

#[test]
fn config_set_and_show() {
    let (_tmp, config) = temp_config();
    cmd(&config)
        .args([
            "config",
            "--set-endpoint-url",
            "https://cv.example.com/url",
            "--set-prediction-key",
            "hunter2",
            "--set-output",
            "json",
        ])
        .assert()
        .success()
        .stdout(contains("Configuration updated"));

    let saved: Value =
        serde_json::from_str(&std::fs::read_to_string(&config).unwrap()).expect("saved json");
    assert_eq!(saved["endpoint_url"], "https://cv.example.com/url");
    assert_eq!(saved["output_format"], "json");

    cmd(&config)
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(contains("https://cv.example.com/url"))
        .stdout(contains("(set)"))
        .stdout(contains("hunter2").not());
}

#[test]
fn config_reset() {
    let (_tmp, config) = temp_config();
    cmd(&config)
        .args(["config", "--set-timeout", "15"])
        .assert()
        .success();

    cmd(&config)
        .args(["config", "--reset"])
        .assert()
        .success()
        .stdout(contains("Configuration reset to defaults"));

    let saved: Value =
        serde_json::from_str(&std::fs::read_to_string(&config).unwrap()).expect("saved json");
    assert!(saved["request_timeout_secs"].is_null());
    assert!(saved["endpoint_url"].is_null());
}
