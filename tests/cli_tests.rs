//! CLI interface tests
//!
//! Runs the `velura` binary in temp site directories and checks output and
//! exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use velura::config::CONFIG_FILE_NAME;

mod common;
use common::fixtures;

/// Helper to get the velura binary command, run from an empty site
fn get_bin(site: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_velura"));
    cmd.current_dir(site.path()).arg("--no-emoji");
    cmd
}

fn empty_site() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("Command execution failed");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

#[test]
fn test_cli_help_flag_displays_usage_information() {
    get_bin(&empty_site())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Velura Botanical Skincare"));
}

#[test]
fn test_cli_version_flag_displays_version_number() {
    get_bin(&empty_site())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("velura"));
}

#[test]
fn test_catalog_products_filtered_by_category() {
    get_bin(&empty_site())
        .args(["catalog", "products", "--category", "Toner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pore Refining Toner"))
        .stdout(predicate::str::contains("Botanical Glow Serum").not());
}

#[test]
fn test_catalog_steps_json_lists_all_steps() {
    let json = json_stdout(get_bin(&empty_site()).args(["catalog", "steps", "--json"]));
    let steps = json.as_array().unwrap();
    assert_eq!(steps.len(), 10);
    assert_eq!(steps[8]["name"], "SPF");
    assert_eq!(steps[8]["time"], "morning");
}

#[test]
fn test_catalog_unknown_listing_is_usage_error() {
    get_bin(&empty_site())
        .args(["catalog", "prices"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Unknown listing"))
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn test_routine_default_morning() {
    get_bin(&empty_site())
        .arg("routine")
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning routine"))
        .stdout(predicate::str::contains("5 steps"))
        .stdout(predicate::str::contains("~10 min"));
}

#[test]
fn test_routine_toggles_apply_in_order() {
    let json = json_stdout(get_bin(&empty_site()).args([
        "routine", "--time", "evening", "--toggle", "1", "--toggle", "2", "--toggle", "2",
        "--json",
    ]));
    assert_eq!(json["time"], "evening");
    assert_eq!(json["step_count"], 5);
    assert_eq!(json["estimated_minutes"], 10);
    assert_eq!(json["steps"][0]["name"], "Oil Cleanser");
    assert_eq!(json["selected"], serde_json::json!(["1", "2", "3", "5", "7", "9"]));
}

#[test]
fn test_routine_unknown_step_fails_with_hint() {
    get_bin(&empty_site())
        .args(["routine", "--toggle", "42"])
        .assert()
        .code(65)
        .stderr(predicate::str::contains("Unknown care step: '42'"))
        .stderr(predicate::str::contains("velura catalog steps"));
}

#[test]
fn test_routine_rejects_both_as_time() {
    get_bin(&empty_site())
        .args(["routine", "--time", "both"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Unknown time of day"));
}

#[test]
fn test_quiz_without_answers_asks_first_question() {
    get_bin(&empty_site())
        .arg("quiz")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1 of 4"))
        .stdout(predicate::str::contains("--answer skinType=<VALUE>"));
}

#[test]
fn test_quiz_complete_prints_recommendations() {
    get_bin(&empty_site())
        .args([
            "quiz",
            "-a",
            "skinType=oily",
            "-a",
            "concerns=acne",
            "-a",
            "routine=minimal",
            "-a",
            "texture=light",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pore Refining Toner").count(1))
        .stdout(predicate::str::contains("Salicylic Acid"));
}

#[test]
fn test_quiz_json_reports_state() {
    let json = json_stdout(get_bin(&empty_site()).args([
        "quiz",
        "--answer",
        "skinType=dry",
        "--json",
    ]));
    assert_eq!(json["state"], "asking");
    assert_eq!(json["step"], 1);
    assert_eq!(json["next_question"]["id"], "concerns");
    assert!(json["recommendations"]["products"].as_array().unwrap().is_empty());
}

#[test]
fn test_quiz_out_of_order_answer_fails() {
    get_bin(&empty_site())
        .args(["quiz", "--answer", "concerns=acne"])
        .assert()
        .code(65)
        .stderr(predicate::str::contains("Expected an answer to 'skinType'"));
}

#[test]
fn test_quiz_malformed_answer_is_usage_error() {
    get_bin(&empty_site())
        .args(["quiz", "--answer", "oily"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("QUESTION=VALUE"));
}

#[test]
fn test_init_creates_config_file() {
    let site = empty_site();
    get_bin(&site)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let contents = std::fs::read_to_string(site.path().join(CONFIG_FILE_NAME)).unwrap();
    assert!(contents.contains("default-time = \"morning\""));

    get_bin(&site)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_configured_defaults_drive_routine() {
    let site = fixtures::site_with_config(
        "[routine]\ndefault-time = \"evening\"\ndefault-steps = [\"10\"]\n",
    )
    .unwrap();
    let json = json_stdout(get_bin(&site).args(["routine", "--json"]));
    assert_eq!(json["time"], "evening");
    assert_eq!(json["steps"][0]["name"], "Retinol");
}

#[test]
fn test_explicit_config_with_alternative_catalog() {
    let (_site, config_path) = fixtures::site_with_catalog(&fixtures::builtin_copy("2025.2")).unwrap();
    get_bin(&empty_site())
        .arg("--config")
        .arg(&config_path)
        .args(["catalog", "steps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025.2"));
}

#[test]
fn test_missing_explicit_config_exits_no_input() {
    let site = empty_site();
    get_bin(&site)
        .args(["--config", "absent.toml", "routine"])
        .assert()
        .code(66)
        .stderr(predicate::str::contains("velura init"));
}

#[test]
fn test_invalid_config_is_data_error() {
    let site = fixtures::site_with_config("[routine]\ndefault-time = \"noon\"\n").unwrap();
    get_bin(&site)
        .arg("routine")
        .assert()
        .code(65)
        .stderr(predicate::str::contains(CONFIG_FILE_NAME));
}

#[test]
fn test_completions_bash() {
    get_bin(&empty_site())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("velura"))
        .stdout(predicate::str::contains("routine"));
}
