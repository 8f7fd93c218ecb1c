use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn run(store: &Path, args: &[&str]) -> std::process::Output {
    cargo_bin_cmd!("doc-cookies")
        .env("DOC_COOKIES_STORE", store)
        .env_remove("DOC_COOKIES_USER_AGENT")
        .args(args)
        .output()
        .expect("run doc-cookies")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_cli_help_succeeds() {
    let output = cargo_bin_cmd!("doc-cookies")
        .arg("--help")
        .output()
        .expect("run doc-cookies");
    assert!(output.status.success(), "help should exit 0");
    assert!(stdout(&output).contains("Usage"), "help should include usage text");
}

#[test]
fn test_cli_set_get_keys() {
    let temp = tempdir().expect("tempdir");
    let store = temp.path().join("cookies.json");

    let output = run(&store, &["set", "theme", "dark; mode=1", "--max-age", "3600"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "true\n");

    let output = run(&store, &["get", "theme"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "dark; mode=1\n");

    let output = run(&store, &["keys"]);
    assert_eq!(stdout(&output), "theme\n");
}

#[test]
fn test_cli_has_and_remove() {
    let temp = tempdir().expect("tempdir");
    let store = temp.path().join("cookies.json");

    let output = run(&store, &["has", "token"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "false\n");

    run(&store, &["set", "token", "abc", "--path", "/"]);
    let output = run(&store, &["has", "token"]);
    assert!(output.status.success());

    let output = run(&store, &["remove", "token", "--path", "/"]);
    assert!(output.status.success());
    let output = run(&store, &["get", "token"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_cli_refuses_reserved_name() {
    let temp = tempdir().expect("tempdir");
    let store = temp.path().join("cookies.json");

    let output = run(&store, &["set", "Path", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!store.exists());
}

#[test]
fn test_cli_clear_and_json_keys() {
    let temp = tempdir().expect("tempdir");
    let store = temp.path().join("cookies.json");

    run(&store, &["set", "a", "1"]);
    run(&store, &["set", "b", "2"]);
    let output = run(&store, &["keys", "--json"]);
    assert_eq!(stdout(&output), "[\"a\",\"b\"]\n");

    let output = run(&store, &["clear"]);
    assert!(output.status.success());
    let output = run(&store, &["keys", "--json"]);
    assert_eq!(stdout(&output), "[]\n");
}

#[test]
fn test_cli_same_site_follows_user_agent() {
    let temp = tempdir().expect("tempdir");
    let store = temp.path().join("cookies.json");

    run(&store, &["set", "old", "1", "--same-site", "-1", "-A", "Chrome/60.0"]);
    run(&store, &["set", "new", "1", "--same-site", "-1", "-A", "Chrome/70.0"]);

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&store).expect("store")).expect("json");
    let cookies = saved["cookies"].as_array().expect("cookies");
    assert!(cookies[0].get("same_site").is_none());
    assert_eq!(cookies[1]["same_site"], "none");
}

#[test]
fn test_cli_check_ua() {
    let temp = tempdir().expect("tempdir");
    let store = temp.path().join("cookies.json");

    let output = run(&store, &["check-ua", "UCBrowser/12.10.0"]);
    assert_eq!(stdout(&output), "incompatible\n");
    let output = run(&store, &["check-ua", "UCBrowser/12.14.0"]);
    assert_eq!(stdout(&output), "compatible\n");
}

#[test]
fn test_cli_reports_corrupt_store() {
    let temp = tempdir().expect("tempdir");
    let store = temp.path().join("cookies.json");
    fs::write(&store, "{broken").expect("write");

    let output = run(&store, &["keys"]);
    assert_eq!(output.status.code(), Some(26));
    assert!(String::from_utf8_lossy(&output.stderr).contains("doc-cookies: error"));
}
