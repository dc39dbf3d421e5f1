//! Tests for default values.

use fob_plugin_entries::{
    build_config, AssetMap, ConfigHook, CssMinifier, CssMinify, EntriesOptions, EntriesPlugin,
    OutputFormat, OutputOptions, RollupOptions, DEFAULT_OUTPUT_DIR, DEFAULT_ROOT_DIR,
};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn entries_options_defaults() {
    let options = EntriesOptions::new("entries");
    assert!(options.asset_files.is_empty());
    assert_eq!(options.entry_dir, PathBuf::from("entries"));
    assert_eq!(options.root_dir, PathBuf::from(DEFAULT_ROOT_DIR));
    assert!(!options.empty_out_dir);
    assert_eq!(options.css_minify, CssMinify::Engine(CssMinifier::Esbuild));
    assert_eq!(options.rollup_options, RollupOptions::default());
}

#[test]
fn from_value_applies_defaults() {
    let options = EntriesOptions::from_value(json!({
        "assetFiles": {},
        "entryDir": "entries"
    }))
    .expect("options");

    assert_eq!(options, EntriesOptions::new("entries"));
}

#[test]
fn theme_output_defaults() {
    let output = OutputOptions::theme_defaults();
    assert_eq!(output.dir, Some(PathBuf::from(DEFAULT_OUTPUT_DIR)));
    assert_eq!(output.format, Some(OutputFormat::Es));

    for pattern in [
        &output.entry_file_names,
        &output.asset_file_names,
        &output.chunk_file_names,
    ] {
        let pattern = pattern.as_deref().expect("pattern set");
        assert!(pattern.starts_with("[name]."), "pattern {pattern}");
        assert!(!pattern.contains("[hash]"), "pattern {pattern}");
        assert!(!pattern.contains('/'), "pattern {pattern}");
    }
}

#[test]
fn css_minify_defaults_to_esbuild_in_output() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir(dir.path().join("entries")).expect("create entries dir");

    let config = EntriesPlugin::new(EntriesOptions::new("entries").with_root_dir(dir.path()))
        .config()
        .expect("config");

    assert!(!config.public_dir);
    assert!(!config.build.empty_out_dir);
    assert_eq!(config.to_value().expect("to_value")["build"]["cssMinify"], json!("esbuild"));
}

#[test]
fn css_minify_is_passed_through_unchanged() {
    for mode in [
        CssMinify::Enabled(false),
        CssMinify::Enabled(true),
        CssMinify::Engine(CssMinifier::Esbuild),
        CssMinify::Engine(CssMinifier::Lightningcss),
    ] {
        let config = build_config(AssetMap::new(), mode, false, &RollupOptions::default());
        assert_eq!(config.build.css_minify, mode);
    }
}
