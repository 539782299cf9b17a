/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{SearchDirBuilder, index_path, sales_dir};
use predicates::prelude::*;

fn cmd(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_trudy-search"));
    cmd.env("TRUDY_SEARCH_DATA_DIR", data_dir).env_remove("TRUDY_SEARCH_DEBOUNCE_MS");
    cmd
}

#[test]
fn test_cli_no_command_shows_help_message() {
    let dir = SearchDirBuilder::new().build();
    cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    let dir = SearchDirBuilder::new().build();
    cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Global search palette"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("recent"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_cli_version_flag() {
    let dir = SearchDirBuilder::new().build();
    cmd(dir.path()).arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    let dir = SearchDirBuilder::new().build();
    cmd(dir.path()).arg("invalid-command").assert().failure();
}

#[test]
fn test_cli_search_builtin_grouped() {
    let dir = SearchDirBuilder::new().build();
    cmd(dir.path())
        .args(["search", "voice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results for \"voice\" (3)"))
        .stdout(predicate::str::contains("Voice Clones (3)"))
        .stdout(predicate::str::contains("Professional Male Voice"))
        .stdout(predicate::str::contains("[/voice-cloning]"));
}

#[test]
fn test_cli_search_no_results() {
    let dir = SearchDirBuilder::new().build();
    cmd(dir.path())
        .args(["search", "zzz_no_match"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found for \"zzz_no_match\""));
}

#[test]
fn test_cli_search_blank_shows_popular_items() {
    let dir = SearchDirBuilder::new().build();
    cmd(dir.path())
        .args(["search", "  ", "--default-items", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Popular Items"))
        .stdout(predicate::str::contains("Customer Support Bot"))
        .stdout(predicate::str::contains("Lead Qualifier").not());
}

#[test]
fn test_cli_search_json_with_index_file() {
    let dir = sales_dir();
    let output = cmd(dir.path())
        .args(["search", "sa", "--json", "--index"])
        .arg(index_path(dir.path()))
        .output()
        .unwrap();

    assert!(output.status.success());
    let items: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = items.iter().filter_map(|i| i["id"].as_str()).collect();
    assert_eq!(ids, ["agent-1", "campaign-1"]);
}

#[test]
fn test_cli_search_respects_max_results() {
    let dir = SearchDirBuilder::new().build();
    cmd(dir.path())
        .args(["search", "a", "--max-results", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(3)"));
}

#[test]
fn test_cli_search_writes_analytics_log() {
    let dir = SearchDirBuilder::new().build();
    let log = dir.path().join("analytics.jsonl");

    cmd(dir.path()).args(["search", "john", "--analytics-log"]).arg(&log).assert().success();

    let content = std::fs::read_to_string(&log).unwrap();
    let event: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(event["event"], "search");
    assert_eq!(event["term"], "john");
    assert_eq!(event["result_count"], 2);
}

#[test]
fn test_cli_invalid_index_file() {
    let dir = SearchDirBuilder::new().build();
    let index = index_path(dir.path());
    std::fs::write(&index, "[{\"id\": \"broken\"}]").unwrap();

    cmd(dir.path()).args(["search", "x", "--index"]).arg(&index).assert().failure();
}

#[test]
fn test_cli_recent_list_and_remove() {
    let dir = SearchDirBuilder::new().with_recent(&["agents", "calls"]).build();

    cmd(dir.path())
        .arg("recent")
        .assert()
        .success()
        .stdout(predicate::str::contains(" 1. agents"))
        .stdout(predicate::str::contains(" 2. calls"));

    cmd(dir.path())
        .args(["recent", "remove", "agents"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed \"agents\""));

    cmd(dir.path())
        .args(["recent", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("agents").not())
        .stdout(predicate::str::contains(" 1. calls"));
}

#[test]
fn test_cli_recent_remove_missing_fails() {
    let dir = SearchDirBuilder::new().build();
    cmd(dir.path())
        .args(["recent", "remove", "nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No recent search matching"));
}

#[test]
fn test_cli_recent_clear() {
    let dir = SearchDirBuilder::new().with_recent(&["agents", "calls"]).build();

    cmd(dir.path())
        .args(["recent", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2 recent searches"));

    cmd(dir.path())
        .arg("recent")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recent searches"));
}

#[test]
fn test_cli_recent_clear_removes_corrupt_store() {
    let dir = SearchDirBuilder::new().with_raw_recent("{not json").build();

    cmd(dir.path()).args(["recent", "clear"]).assert().success();

    assert!(!dir.path().join("recent-searches.json").exists());
}

#[test]
fn test_cli_no_persist_ignores_store() {
    let dir = SearchDirBuilder::new().with_recent(&["agents"]).build();
    cmd(dir.path())
        .args(["recent", "--no-persist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recent searches"));
}

#[test]
fn test_cli_stats_builtin() {
    let dir = SearchDirBuilder::new().with_recent(&["agents"]).build();
    cmd(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search Index Statistics"))
        .stdout(predicate::str::contains("Total items: 20"))
        .stdout(predicate::str::contains("Agents: 4"))
        .stdout(predicate::str::contains("Index file: built-in catalogue"))
        .stdout(predicate::str::contains("Recent searches: 1"));
}

#[test]
fn test_cli_stats_with_index_file() {
    let dir = sales_dir();
    cmd(dir.path())
        .arg("stats")
        .arg("--index")
        .arg(index_path(dir.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Total items: 3"))
        .stdout(predicate::str::contains("Contacts: 1"));
}
