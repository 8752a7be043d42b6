use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with an isolated config root.
fn planwise(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("planwise").unwrap();
    cmd.env("PLANWISE_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("PLANWISE_OUTPUT");
    cmd
}

// ===== parse =====

#[test]
fn test_parse_json_output() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .args(["--output", "json", "parse", "daily standup at 9am", "--reference", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"standup\""))
        .stdout(predicate::str::contains("\"time\": \"09:00\""))
        .stdout(predicate::str::contains("2024-01-04"));
}

#[test]
fn test_parse_joins_words() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .args(["parse", "every", "first", "friday", "review", "-r", "2024-01-01", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"startDate\": \"2024-01-05\""));
}

#[test]
fn test_parse_pretty_output() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .args(["parse", "every monday and wednesday gym", "--reference", "2024-01-01", "--templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gym"))
        .stdout(predicate::str::contains("Weekly · Mon · Wed"))
        .stdout(predicate::str::contains("Templates (3)"));
}

#[test]
fn test_parse_empty_phrase_fails() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .args(["parse", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("Phrase is empty"));
}

#[test]
fn test_parse_bad_reference_fails() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .args(["parse", "tomorrow", "--reference", "2024-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid reference date"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .args(["-v", "-o", "json", "parse", "tomorrow", "-r", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stderr(predicate::str::contains("phrase segment matched"));
}

// ===== templates / occurrences =====

#[test]
fn test_templates_for_non_recurring_phrase() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .args(["-o", "json", "templates", "dentist tomorrow", "-r", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 0"));
}

#[test]
fn test_occurrences_from_start() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .args(["-o", "json", "occurrences", "--start", "2024-01-01", "every first friday", "--count", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-01"))
        .stdout(predicate::str::contains("1st Friday each month"));
}

#[test]
fn test_occurrences_invalid_start_fails() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .args(["occurrences", "--start", "01/02/2024", "daily"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid start date"));
}

// ===== config =====

#[test]
fn test_config_default_output_is_used() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "general:\n  default_output: json\nparser:\n  max_occurrences: 2\n",
    )
    .unwrap();
    planwise(&home)
        .args(["parse", "daily standup", "-r", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"occurrences\""))
        .stdout(predicate::str::contains("2024-01-02"))
        .stdout(predicate::str::contains("2024-01-03").not());
}

#[test]
fn test_config_init_and_path() {
    let home = TempDir::new().unwrap();
    planwise(&home).args(["config", "init"]).assert().success();
    assert!(home.path().join("config.yaml").exists());

    planwise(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    planwise(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yaml"));
}

#[test]
fn test_malformed_config_fails() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.yaml"), "parser: [oops").unwrap();
    planwise(&home)
        .args(["parse", "daily"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

// ===== completions =====

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    planwise(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("planwise"));
}
