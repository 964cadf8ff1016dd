//! Config and data loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use vizmap_pipeline::{PipelineError, load_config, load_data, resolve_data_source};

fn temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("vizmap_pipeline_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_json(dir: &Path, name: &str, value: serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string(&value).expect("serialize")).expect("write file");
    path
}

#[test]
fn load_config_reads_and_normalizes() {
    let dir = temp_dir();
    let path = write_json(
        &dir,
        "config.json",
        json!({
            "dataSource": { "apiResponse": "feed.json" },
            "visualization": {
                "graphType": "bar-chart",
                "mappings": { "x": "date", "y": "value", "rowPath": "1" }
            }
        }),
    );

    let config = load_config(&path).expect("load config");
    let graph = config
        .visualization
        .graphs
        .get("bar-chart")
        .expect("legacy graph folded into graphs");
    assert_eq!(graph.row_path.as_deref(), Some("1"));
    assert_eq!(graph.mappings.path("x"), Some("date"));

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn load_config_surfaces_parse_errors_with_the_path() {
    let dir = temp_dir();
    let path = dir.join("broken.json");
    fs::write(&path, "{ not json").expect("write file");

    let err = load_config(&path).expect_err("parse must fail");
    assert!(matches!(err, PipelineError::Json { .. }));
    assert!(err.to_string().contains("broken.json"), "{err}");

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn missing_data_file_is_an_io_error() {
    let dir = temp_dir();

    let err = load_data(&dir.join("absent.json")).expect_err("read must fail");
    assert!(matches!(err, PipelineError::Io { .. }));
    assert!(err.to_string().contains("failed to read"), "{err}");

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn resolve_data_source_prefers_the_explicit_file() {
    let dir = temp_dir();
    let config_path = write_json(
        &dir,
        "config.json",
        json!({
            "dataSource": { "apiResponse": [ { "x": "configured" } ] }
        }),
    );
    let data_path = write_json(&dir, "override.json", json!([ { "x": "explicit" } ]));

    let config = load_config(&config_path).expect("load config");
    let value = resolve_data_source(&config, Some(data_path.as_path()), &dir).expect("resolve");
    assert_eq!(value[0]["x"], "explicit");

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn resolve_data_source_reads_the_configured_file_from_base_dir() {
    let dir = temp_dir();
    let config_path = write_json(
        &dir,
        "config.json",
        json!({
            "dataSource": { "apiResponse": "feed.json" }
        }),
    );
    write_json(&dir, "feed.json", json!([ { "x": 1 }, { "x": 2 } ]));

    let config = load_config(&config_path).expect("load config");
    let value = resolve_data_source(&config, None, &dir).expect("resolve");
    assert_eq!(value.as_array().map(Vec::len), Some(2));

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn resolve_data_source_inline_value_needs_no_file() {
    let dir = temp_dir();
    let config_path = write_json(
        &dir,
        "config.json",
        json!({
            "dataSource": { "apiResponse": [ { "x": 9 } ] }
        }),
    );

    let config = load_config(&config_path).expect("load config");
    let value = resolve_data_source(&config, None, &dir).expect("resolve");
    assert_eq!(value[0]["x"], 9);

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn resolve_data_source_without_any_source_is_an_error() {
    let config = vizmap_pipeline::WorkspaceConfig::default();

    let err = resolve_data_source(&config, None, Path::new("."))
        .expect_err("no source configured");
    assert!(matches!(err, PipelineError::MissingDataSource));
}
