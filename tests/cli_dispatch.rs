use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use uuid::Uuid;

fn unique_workspace(prefix: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{prefix}-{}", Uuid::now_v7()));
    std::fs::create_dir_all(&path).expect("workspace should be creatable");
    path
}

fn run_showcase(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_showcase"))
        .arg("--db")
        .arg(root.join("storage.sqlite"))
        .arg("--config")
        .arg(root.join("config.toml"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("SHOWCASE_LOG")
        .output()
        .expect("showcase command should run")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success but failed.\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "expected failure but command succeeded.\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn ls_json(root: &Path, args: &[&str]) -> Vec<Value> {
    let mut full = vec!["ls", "--json"];
    full.extend_from_slice(args);
    let output = run_showcase(root, &full);
    assert_success(&output);
    let value: Value = serde_json::from_slice(&output.stdout).expect("ls output should be json");
    value.as_array().expect("ls output should be an array").clone()
}

fn titles(projects: &[Value]) -> Vec<String> {
    projects
        .iter()
        .map(|p| p["title"].as_str().expect("title should be a string").to_string())
        .collect()
}

#[test]
fn fresh_storage_lists_default_projects_newest_first() {
    let root = unique_workspace("showcase-cli-defaults");
    let listed = ls_json(&root, &[]);
    assert_eq!(
        titles(&listed),
        vec!["Portfolio Website", "Task Manager App", "Blog Template"]
    );

    let text = run_showcase(&root, &["ls"]);
    assert_success(&text);
    let out = stdout(&text);
    assert!(out.contains("[all] blog css html"));
    assert!(out.contains("Tue Jul 01 2025 • web, ui, html, css"));
    assert!(out.contains("3 project(s)"));

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn add_edit_rm_round_trip() {
    let root = unique_workspace("showcase-cli-crud");

    let added = run_showcase(
        &root,
        &[
            "add",
            "Rust CLI",
            "--desc",
            "Terminal catalog",
            "--date",
            "2030-01-01",
            "--tags",
            "Rust, cli",
        ],
    );
    assert_success(&added);
    let line = stdout(&added);
    assert!(line.starts_with("created p_"));
    let id = line
        .split_whitespace()
        .nth(1)
        .expect("created line should carry the id")
        .to_string();

    let listed = ls_json(&root, &[]);
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[0]["id"], Value::String(id.clone()));

    let edited = run_showcase(&root, &["edit", &id, "--title", "Rust Tool"]);
    assert_success(&edited);
    assert!(stdout(&edited).contains("updated"));

    let shown = run_showcase(&root, &["show", &id, "--json"]);
    assert_success(&shown);
    let project: Value = serde_json::from_slice(&shown.stdout).expect("show should be json");
    assert_eq!(project["title"], "Rust Tool");
    assert_eq!(project["description"], "Terminal catalog");
    assert_eq!(project["tags"], serde_json::json!(["Rust", "cli"]));

    let removed = run_showcase(&root, &["rm", &id]);
    assert_success(&removed);
    assert_eq!(stdout(&removed).trim(), format!("deleted {id}"));
    assert_eq!(ls_json(&root, &[]).len(), 3);

    let again = run_showcase(&root, &["rm", &id]);
    assert_success(&again);
    assert_eq!(stdout(&again).trim(), format!("no project {id}"));

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn add_with_blank_title_fails_and_writes_nothing() {
    let root = unique_workspace("showcase-cli-invalid");
    let output = run_showcase(&root, &["add", "  ", "--desc", "something"]);
    assert_failure(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("title and description are required"));
    assert_eq!(ls_json(&root, &[]).len(), 3);

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn ls_filters_and_sorts() {
    let root = unique_workspace("showcase-cli-query");
    assert_eq!(titles(&ls_json(&root, &["-q", "java"])), vec!["Task Manager App"]);
    assert_eq!(
        titles(&ls_json(&root, &["--tag", "TEMPLATE", "--sort", "az"])),
        vec!["Blog Template"]
    );
    assert_eq!(
        titles(&ls_json(&root, &["--sort", "az"])),
        vec!["Blog Template", "Portfolio Website", "Task Manager App"]
    );
    assert_eq!(
        titles(&ls_json(&root, &["--sort", "old"])),
        vec!["Blog Template", "Task Manager App", "Portfolio Website"]
    );
    assert_eq!(ls_json(&root, &["--tag", "all"]).len(), 3);

    let empty = run_showcase(&root, &["ls", "-q", "nothing-matches-this"]);
    assert_success(&empty);
    assert!(stdout(&empty).contains("no projects matched"));

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn corrupt_storage_falls_back_to_defaults() {
    let root = unique_workspace("showcase-cli-corrupt");
    assert_success(&run_showcase(&root, &["rm", "p_default_blog"]));
    assert_eq!(ls_json(&root, &[]).len(), 2);

    for raw in ["{not json", "{\"id\":\"p_1\"}"] {
        overwrite_slot(&root, "projects.v1", raw);
        let listed = ls_json(&root, &[]);
        assert_eq!(
            titles(&listed),
            vec!["Portfolio Website", "Task Manager App", "Blog Template"]
        );
    }

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn storage_key_from_config_selects_the_slot() {
    let root = unique_workspace("showcase-cli-key");
    assert_success(&run_showcase(&root, &["rm", "p_default_blog"]));
    std::fs::write(root.join("config.toml"), "storage_key = \"other.v1\"\n")
        .expect("config should be writable");
    assert_eq!(ls_json(&root, &[]).len(), 3);

    let _ = std::fs::remove_dir_all(root);
}

fn overwrite_slot(root: &Path, key: &str, raw: &str) {
    let conn = rusqlite::Connection::open(root.join("storage.sqlite"))
        .expect("storage database should open");
    conn.execute(
        "UPDATE kv_slot SET value = ?1 WHERE key = ?2",
        rusqlite::params![raw, key],
    )
    .expect("slot should be writable");
}

#[test]
fn config_sets_default_sort() {
    let root = unique_workspace("showcase-cli-config");
    std::fs::write(root.join("config.toml"), "default_sort = \"za\"\n")
        .expect("config should be writable");
    assert_eq!(
        titles(&ls_json(&root, &[])),
        vec!["Task Manager App", "Portfolio Website", "Blog Template"]
    );

    std::fs::write(root.join("config.toml"), "default_sort = [").expect("config should be writable");
    let output = run_showcase(&root, &["ls"]);
    assert_failure(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid config file"));

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn show_unknown_id_fails_and_tags_lists_all() {
    let root = unique_workspace("showcase-cli-show");
    let missing = run_showcase(&root, &["show", "p_missing"]);
    assert_failure(&missing);
    assert!(String::from_utf8_lossy(&missing.stderr).contains("project 'p_missing' not found"));

    let tags = run_showcase(&root, &["tags", "--json"]);
    assert_success(&tags);
    let value: Value = serde_json::from_slice(&tags.stdout).expect("tags should be json");
    assert_eq!(
        value,
        serde_json::json!([
            "blog",
            "css",
            "html",
            "javascript",
            "productivity",
            "responsive",
            "template",
            "ui",
            "web"
        ])
    );

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn reset_restores_default_catalog() {
    let root = unique_workspace("showcase-cli-reset");
    assert_success(&run_showcase(&root, &["rm", "p_default_portfolio"]));
    assert_eq!(ls_json(&root, &[]).len(), 2);
    let reset = run_showcase(&root, &["reset"]);
    assert_success(&reset);
    assert!(stdout(&reset).contains("3 default project(s)"));
    assert_eq!(ls_json(&root, &[]).len(), 3);

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn id_printed_by_ls_is_accepted_by_show_and_rm() {
    let root = unique_workspace("showcase-cli-printed-id");
    let listed = run_showcase(&root, &["ls"]);
    assert_success(&listed);
    let out = stdout(&listed);
    let card = out
        .lines()
        .find(|line| line.starts_with("Blog Template ("))
        .expect("blog card should be listed");
    let id = card
        .trim_start_matches("Blog Template (")
        .trim_end_matches(')')
        .to_string();
    assert_eq!(id, "p_default_blog");

    let shown = run_showcase(&root, &["show", &id]);
    assert_success(&shown);
    assert!(stdout(&shown).contains(&format!("Blog Template ({id})")));

    let removed = run_showcase(&root, &["rm", &id]);
    assert_success(&removed);
    assert_eq!(stdout(&removed).trim(), format!("deleted {id}"));
    assert_eq!(ls_json(&root, &[]).len(), 2);

    let _ = std::fs::remove_dir_all(root);
}
