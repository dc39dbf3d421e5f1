//! Rollup-style bundler options
//!
//! Only the fields this plugin sets are typed. Everything else a caller passes
//! is kept in the flattened `extra` maps and forwarded to the host untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::resolver::AssetMap;

/// Default output directory for built theme assets.
pub const DEFAULT_OUTPUT_DIR: &str = "theme/assets";

/// Output module format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ES module output (default)
    #[default]
    #[serde(alias = "esm", alias = "module")]
    Es,
    /// CommonJS
    #[serde(alias = "commonjs")]
    Cjs,
    Amd,
    Iife,
    Umd,
    #[serde(alias = "systemjs")]
    System,
}

/// Bundler input, in any of the shapes Rollup accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputOption {
    /// Single entry point.
    Single(String),

    /// Multiple entry points with automatic naming.
    Multiple(Vec<String>),

    /// Named entry points. Keys become the `[name]` of each output chunk.
    Named(AssetMap),
}

/// Output section of the bundler options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Pattern for entry chunks, e.g. `[name].js`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_file_names: Option<String>,

    /// Pattern for emitted assets, e.g. `[name].[ext]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_file_names: Option<String>,

    /// Pattern for shared chunks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_file_names: Option<String>,

    /// Any other output option, forwarded as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OutputOptions {
    /// Output settings for theme builds.
    ///
    /// Files land flat in `theme/assets` as ES modules named after their entry,
    /// with no hash segment and no subdirectories.
    pub fn theme_defaults() -> Self {
        Self {
            dir: Some(PathBuf::from(DEFAULT_OUTPUT_DIR)),
            format: Some(OutputFormat::Es),
            entry_file_names: Some("[name].js".to_string()),
            asset_file_names: Some("[name].[ext]".to_string()),
            chunk_file_names: Some("[name].js".to_string()),
            extra: Map::new(),
        }
    }

    /// Shallow merge: every field set on `self` wins over the same field in `defaults`.
    ///
    /// A typed field given as JSON `null` deserializes to `None` and keeps the default.
    ///
    /// ```
    /// use fob_plugin_entries::{OutputFormat, OutputOptions};
    /// use std::path::PathBuf;
    ///
    /// let overrides = OutputOptions {
    ///     dir: Some(PathBuf::from("custom/out")),
    ///     ..Default::default()
    /// };
    /// let merged = overrides.merged_over(&OutputOptions::theme_defaults());
    /// assert_eq!(merged.dir, Some(PathBuf::from("custom/out")));
    /// assert_eq!(merged.format, Some(OutputFormat::Es));
    /// ```
    pub fn merged_over(&self, defaults: &OutputOptions) -> OutputOptions {
        let mut extra = defaults.extra.clone();
        extra.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));

        OutputOptions {
            dir: self.dir.clone().or_else(|| defaults.dir.clone()),
            format: self.format.or(defaults.format),
            entry_file_names: pick(&self.entry_file_names, &defaults.entry_file_names),
            asset_file_names: pick(&self.asset_file_names, &defaults.asset_file_names),
            chunk_file_names: pick(&self.chunk_file_names, &defaults.chunk_file_names),
            extra,
        }
    }
}

fn pick(over: &Option<String>, default: &Option<String>) -> Option<String> {
    over.as_ref().or(default.as_ref()).cloned()
}

/// Rollup-style options passed to the bundling stage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollupOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<InputOption>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputOptions>,

    /// Other option categories (`external`, `plugins`, `treeshake`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RollupOptions {
    /// Build the final bundler options from caller overrides.
    ///
    /// `input` always comes from the resolved entries and replaces any caller
    /// input. The output section is [`OutputOptions::theme_defaults`] with the
    /// caller's output fields laid over it. Other categories pass through.
    pub fn merged_over_defaults(&self, input: AssetMap) -> RollupOptions {
        let defaults = OutputOptions::theme_defaults();
        let output = match &self.output {
            Some(output) => output.merged_over(&defaults),
            None => defaults,
        };

        RollupOptions {
            input: Some(InputOption::Named(input)),
            output: Some(output),
            extra: self.extra.clone(),
        }
    }
}
