//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("mensura").unwrap()
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn fixture_cmd() -> assert_cmd::Command {
    let mut cmd = cmd();
    cmd.args([
        "--data-dir",
        &get_fixture_path("data"),
        "--texts-dir",
        &get_fixture_path("texts"),
    ]);
    cmd
}

#[test]
fn test_cli_analyze_csv() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("output.csv");

    fixture_cmd()
        .args(["analyze", &get_fixture_path("input.csv"), "-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("2 row(s) written"));

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("URL_ID,URL,POSITIVE SCORE,NEGATIVE SCORE,POLARITY SCORE"));
    assert!(lines[0].ends_with("PERSONAL PRONOUNS,AVG WORD LENGTH"));
    assert!(lines[1].starts_with("101,"));
    assert!(lines[2].starts_with("102,"));
}

#[test]
fn test_cli_analyze_warns_about_missing_text() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("output.csv");

    fixture_cmd()
        .args(["analyze", &get_fixture_path("input.csv"), "-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("1 article(s) had no scraped text"));
}

#[test]
fn test_cli_analyze_json() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("nested").join("output.json");

    fixture_cmd()
        .args([
            "analyze",
            &get_fixture_path("input.csv"),
            "-f",
            "json",
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["URL_ID"], "101");
    assert_eq!(rows[1]["NEGATIVE SCORE"], 3);
}

#[test]
fn test_cli_missing_dictionaries() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("output.csv");

    cmd()
        .args(["--data-dir", "/nonexistent/data"])
        .args(["analyze", &get_fixture_path("input.csv"), "-o", output.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load dictionaries"));

    assert!(!output.exists());
}

#[test]
fn test_cli_missing_input() {
    fixture_cmd().args(["analyze", "nonexistent.csv"]).assert().failure();
}

#[test]
fn test_cli_score_text_file() {
    let output = fixture_cmd()
        .args(["score", &get_fixture_path("texts/101.txt")])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let metrics: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(metrics["word_count"], 17);
    assert_eq!(metrics["positive_score"], 4);
}

#[test]
fn test_cli_score_html_file() {
    fixture_cmd()
        .args(["score", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"word_count\": 12"));
}

#[test]
fn test_cli_score_stdin() {
    fixture_cmd()
        .args(["score", "-"])
        .write_stdin("I love this. We are happy and positive.")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"personal_pronouns\": 2"));
}

#[test]
fn test_cli_score_stdin_html_flag() {
    fixture_cmd()
        .args(["score", "--html", "-"])
        .write_stdin("<html><body><h1>Good</h1><p>Great growth.</p></body></html>")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"positive_score\": 3"));
}

#[test]
fn test_cli_score_empty_stdin() {
    fixture_cmd()
        .args(["score", "-"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"word_count\": 0"));
}

#[test]
fn test_cli_scrape_invalid_urls_do_not_abort() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("input.csv");
    std::fs::write(&input, "URL_ID,URL\n1,not a url\n2,\n").unwrap();

    cmd()
        .args(["--data-dir", &get_fixture_path("data")])
        .args(["--texts-dir", tmp.path().join("texts").to_str().unwrap()])
        .args(["scrape", input.to_str().unwrap(), "--delay-ms", "0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("could not be fetched"))
        .stderr(predicate::str::contains("without an id or URL"));
}

#[test]
fn test_cli_verbose() {
    fixture_cmd()
        .args(["-v", "score", &get_fixture_path("texts/102.txt")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Mensura"));
}

#[test]
fn test_cli_verbose_analyze_steps() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("output.csv");

    let assert = fixture_cmd()
        .env_remove("RUST_LOG")
        .args(["-v", "analyze", &get_fixture_path("input.csv"), "-o", output.to_str().unwrap()])
        .assert()
        .success();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();

    let scoring = stderr.find("Scoring articles").unwrap();
    let missing = stderr.find("had no scraped text").unwrap();
    let writing = stderr.find("Writing report").unwrap();
    assert!(stderr.contains("[3/4]"));
    assert!(stderr.contains("[4/4]"));
    assert!(scoring < missing && missing < writing);
    assert!(stderr.contains("resolved pipeline configuration"));
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mensura"));
}

#[test]
fn test_cli_invalid_format() {
    fixture_cmd()
        .args(["analyze", &get_fixture_path("input.csv"), "-f", "xlsx"])
        .assert()
        .failure();
}
