//! Tests for loading plugin options from files and values.

use fob_plugin_entries::{
    ConfigHook, CssMinify, EntriesError, EntriesOptions, EntriesPlugin, OutputFormat,
};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn load_reads_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.toml");
    fs::write(
        &path,
        r#"
entryDir = "entries"
cssMinify = false

[assetFiles]
app = "src/app.tsx"
admin = "src/admin.tsx"

[rollupOptions]
external = ["react"]

[rollupOptions.output]
format = "esm"
"#,
    )
    .unwrap();

    let options = EntriesOptions::load(&path).unwrap();

    assert_eq!(options.entry_dir, PathBuf::from("entries"));
    assert_eq!(options.css_minify, CssMinify::Enabled(false));
    let names: Vec<_> = options.asset_files.keys().map(String::as_str).collect();
    assert_eq!(names, ["app", "admin"]);
    assert_eq!(options.rollup_options.extra["external"], json!(["react"]));
    assert_eq!(
        options.rollup_options.output.as_ref().and_then(|o| o.format),
        Some(OutputFormat::Es)
    );
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = EntriesOptions::load(dir.path().join("missing.toml"));
    assert!(matches!(result.unwrap_err(), EntriesError::Io(_)));
}

#[test]
fn value_round_trip_keeps_options() {
    let options = EntriesOptions::new("entries")
        .with_asset("app", "src/app.tsx")
        .with_empty_out_dir(true);

    let value = options.to_value().unwrap();
    assert_eq!(value["entryDir"], json!("entries"));
    assert_eq!(value["emptyOutDir"], json!(true));

    assert_eq!(EntriesOptions::from_value(value).unwrap(), options);
}

#[test]
fn loaded_options_drive_the_hook() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("entries")).unwrap();
    fs::write(dir.path().join("entries/cart.tsx"), "").unwrap();

    let root = dir.path().to_str().unwrap().replace('\\', "/");
    let path = dir.path().join("entries.toml");
    fs::write(
        &path,
        format!(
            r#"
entryDir = "entries"
rootDir = "{root}"
emptyOutDir = true

[assetFiles]
styles = "src/styles/theme.css"
"#
        ),
    )
    .unwrap();

    let config = EntriesPlugin::new(EntriesOptions::load(&path).unwrap())
        .config()
        .unwrap();
    let value = config.to_value().unwrap();

    assert_eq!(value["build"]["emptyOutDir"], json!(true));
    let input = &value["build"]["rollupOptions"]["input"];
    assert_eq!(input["styles"], json!("src/styles/theme.css"));
    assert!(input["cart"].as_str().unwrap().ends_with("cart.tsx"));
}
