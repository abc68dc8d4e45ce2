#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use tempfile::TempDir;

const SAMPLE_EDGES: [&str; 6] = ["2:6", "2:4", "6:4", "6:7", "4:7", "6:5"];

fn config_dir() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("cli.toml");
    (dir, path)
}

fn hopgraph(config: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("hopgraph");
    cmd.env("HOPGRAPH_CONFIG", config).env_remove("RUST_LOG");
    cmd
}

fn sample_args(cmd: &mut assert_cmd::Command) {
    cmd.args(["--vertices", "2,6,4,7,5"]);
    for edge in SAMPLE_EDGES {
        cmd.args(["--edge", edge]);
    }
}

#[test]
fn bfs_prints_hop_per_vertex() {
    let (_dir, config) = config_dir();
    let mut cmd = hopgraph(&config);
    cmd.arg("bfs");
    sample_args(&mut cmd);
    let output = cmd.args(["--start", "2"]).output().expect("run bfs");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["bfs from 2", "2 0", "6 1", "4 1", "7 2", "5 2"]);
}

#[test]
fn bfs_json_report() {
    let (_dir, config) = config_dir();
    let mut cmd = hopgraph(&config);
    cmd.args(["--format", "json", "bfs"]);
    sample_args(&mut cmd);
    let output = cmd
        .args(["--start", "6", "--max-depth", "1"])
        .output()
        .expect("run bfs");

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(report["start"], "6");
    assert_eq!(report["directed"], true);
    assert_eq!(report["vertices"], 5);
    assert_eq!(report["edges"], 6);
    let visits: Vec<(String, u64)> = report["visits"]
        .as_array()
        .expect("visits")
        .iter()
        .map(|v| {
            (
                v["vertex"].as_str().expect("vertex").to_string(),
                v["hops"].as_u64().expect("hops"),
            )
        })
        .collect();
    assert_eq!(
        visits,
        vec![
            ("6".to_string(), 0),
            ("4".to_string(), 1),
            ("7".to_string(), 1),
            ("5".to_string(), 1),
        ]
    );
}

#[test]
fn missing_start_exits_with_error() {
    let (_dir, config) = config_dir();
    let mut cmd = hopgraph(&config);
    cmd.arg("bfs");
    sample_args(&mut cmd);
    let output = cmd.args(["--start", "9"]).output().expect("run bfs");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(
        stderr.contains("error: start vertex 9: traversal start vertex not found"),
        "stderr: {stderr}"
    );
}

#[test]
fn unknown_edge_endpoint_is_reported() {
    let (_dir, config) = config_dir();
    let output = hopgraph(&config)
        .args(["bfs", "--vertices", "a,b", "--edge", "a:z", "--start", "a"])
        .output()
        .expect("run bfs");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(
        stderr.contains("error: edge a:z: edge target vertex not found"),
        "stderr: {stderr}"
    );
}

#[test]
fn duplicate_vertex_label_is_reported() {
    let (_dir, config) = config_dir();
    let output = hopgraph(&config)
        .args(["bfs", "--vertices", "a,b,a", "--start", "a"])
        .output()
        .expect("run bfs");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("error: vertex a: vertex already present in graph"));
}

#[test]
fn malformed_edge_is_a_usage_error() {
    let (_dir, config) = config_dir();
    hopgraph(&config)
        .args(["bfs", "--vertices", "a,b", "--edge", "ab", "--start", "a"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn show_prints_adjacency_lists() {
    let (_dir, config) = config_dir();
    let output = hopgraph(&config)
        .args([
            "show",
            "--vertices",
            "a,b,c",
            "--edge",
            "a:b",
            "--edge",
            "a:c",
            "--edge",
            "b:c",
        ])
        .output()
        .expect("run show");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            " - graph: (#vertices:   3, #edges:   3) ",
            "  vertex:   a\tadjacency lst: [   b    c ]",
            "  vertex:   b\tadjacency lst: [   c ]",
            "  vertex:   c\tadjacency lst: []",
        ]
    );
}

#[test]
fn show_warns_on_failed_removal_and_continues() {
    let (_dir, config) = config_dir();
    let output = hopgraph(&config)
        .args([
            "show",
            "--vertices",
            "a,b",
            "--edge",
            "a:b",
            "--remove-edge",
            "a:b",
            "--remove-edge",
            "a:b",
            "--remove-vertex",
            "b",
        ])
        .output()
        .expect("run show");

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(
        stderr.contains("warning: could not remove edge a:b: edge not found"),
        "stderr: {stderr}"
    );
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.starts_with(" - graph: (#vertices:   1, #edges:   0) "));
}

#[test]
fn config_file_supplies_defaults() {
    let (_dir, config) = config_dir();
    fs::write(
        &config,
        "[defaults]\nformat = \"json\"\ndirected = false\nin_edge_policy = \"detach\"\n",
    )
    .expect("write config");

    let output = hopgraph(&config)
        .args([
            "show",
            "--vertices",
            "a,b",
            "--edge",
            "a:b",
            "--remove-edge",
            "b:a",
        ])
        .output()
        .expect("run show");

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(report["directed"], false);
    assert_eq!(report["edges"], 0);
    assert_eq!(report["adjacency"][0]["vertex"], "a");
    assert_eq!(report["adjacency"][0]["neighbors"], Value::Array(Vec::new()));
}

#[test]
fn flags_override_config_file() {
    let (_dir, config) = config_dir();
    fs::write(&config, "[defaults]\nformat = \"json\"\n").expect("write config");

    let output = hopgraph(&config)
        .args([
            "--format",
            "text",
            "bfs",
            "--vertices",
            "x,y",
            "--edge",
            "x:y",
            "--start",
            "x",
        ])
        .output()
        .expect("run bfs");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout, "bfs from x\nx 0\ny 1\n");
}

#[test]
fn directed_flag_overrides_undirected_config() {
    let (_dir, config) = config_dir();
    fs::write(&config, "[defaults]\nformat = \"json\"\ndirected = false\n").expect("write config");

    let run = |extra: &[&str]| -> Value {
        let output = hopgraph(&config)
            .args(["bfs", "--vertices", "a,b", "--edge", "a:b", "--start", "b"])
            .args(extra)
            .output()
            .expect("run bfs");
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).expect("json")
    };

    let from_config = run(&[]);
    assert_eq!(from_config["directed"], false);
    assert_eq!(from_config["visits"].as_array().expect("visits").len(), 2);

    let forced = run(&["--directed"]);
    assert_eq!(forced["directed"], true);
    assert_eq!(forced["edges"], 1);
    assert_eq!(forced["visits"].as_array().expect("visits").len(), 1);
}

#[test]
fn directed_and_undirected_flags_conflict() {
    let (_dir, config) = config_dir();
    hopgraph(&config)
        .args([
            "bfs",
            "--vertices",
            "a",
            "--start",
            "a",
            "--directed",
            "--undirected",
        ])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn invalid_config_is_rejected() {
    let (_dir, config) = config_dir();
    fs::write(&config, "[defaults]\nformat = \"yaml\"\n").expect("write config");

    let output = hopgraph(&config)
        .args(["bfs", "--vertices", "a", "--start", "a"])
        .output()
        .expect("run bfs");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("output format 'yaml' is invalid"));
}
