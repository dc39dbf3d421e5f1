//! Plugin options
//!
//! Options can be built in code, deserialized from a `serde_json::Value`, or
//! read from a TOML file. Keys use the camelCase names the host build tool
//! expects (`assetFiles`, `entryDir`, ...); snake_case spellings are accepted
//! as aliases so TOML files can use either.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EntriesError, Result};
use crate::resolver::AssetMap;
use crate::rollup::RollupOptions;

/// Default project root, relative to the current directory.
pub const DEFAULT_ROOT_DIR: &str = "src";

/// CSS minification engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssMinifier {
    /// esbuild (default)
    #[default]
    Esbuild,
    /// Lightning CSS
    Lightningcss,
}

/// CSS minification mode
///
/// - `true` → host default minifier
/// - `false` → no CSS minification
/// - `"esbuild"` / `"lightningcss"` → that engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssMinify {
    Enabled(bool),
    Engine(CssMinifier),
}

impl Default for CssMinify {
    fn default() -> Self {
        Self::Engine(CssMinifier::default())
    }
}

impl From<bool> for CssMinify {
    fn from(enabled: bool) -> Self {
        Self::Enabled(enabled)
    }
}

impl From<CssMinifier> for CssMinify {
    fn from(engine: CssMinifier) -> Self {
        Self::Engine(engine)
    }
}

/// Options for [`EntriesPlugin`](crate::EntriesPlugin)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntriesOptions {
    /// Explicit entries, e.g. `{ "app": "src/app.tsx" }`.
    ///
    /// Scanned entries with the same name replace these.
    #[serde(alias = "asset_files")]
    pub asset_files: AssetMap,

    /// Directory containing entry files, relative to `root_dir`
    #[serde(alias = "entry_dir")]
    pub entry_dir: PathBuf,

    /// Project root (default: `src`)
    #[serde(default = "default_root_dir", alias = "root_dir")]
    pub root_dir: PathBuf,

    /// Empty the output directory before building (default: false)
    #[serde(default, alias = "empty_out_dir")]
    pub empty_out_dir: bool,

    /// CSS minification (default: esbuild)
    #[serde(default, alias = "css_minify")]
    pub css_minify: CssMinify,

    /// Bundler options laid over the defaults
    #[serde(default, alias = "rollup_options")]
    pub rollup_options: RollupOptions,
}

fn default_root_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT_DIR)
}

impl EntriesOptions {
    /// Create options scanning `entry_dir` with every other setting at its default
    ///
    /// # Example
    ///
    /// ```
    /// use fob_plugin_entries::{CssMinifier, EntriesOptions};
    ///
    /// let options = EntriesOptions::new("entries")
    ///     .with_asset("app", "src/app.tsx")
    ///     .with_css_minify(CssMinifier::Lightningcss)
    ///     .with_empty_out_dir(true);
    ///
    /// assert_eq!(options.asset_files.len(), 1);
    /// ```
    pub fn new(entry_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_files: AssetMap::new(),
            entry_dir: entry_dir.into(),
            root_dir: default_root_dir(),
            empty_out_dir: false,
            css_minify: CssMinify::default(),
            rollup_options: RollupOptions::default(),
        }
    }

    /// Add an explicit entry
    pub fn with_asset(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.asset_files.insert(name.into(), path.into());
        self
    }

    /// Set the project root
    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = root_dir.into();
        self
    }

    /// Set whether the output directory is emptied before building
    pub fn with_empty_out_dir(mut self, empty_out_dir: bool) -> Self {
        self.empty_out_dir = empty_out_dir;
        self
    }

    /// Set the CSS minification mode (`bool` or [`CssMinifier`])
    pub fn with_css_minify(mut self, css_minify: impl Into<CssMinify>) -> Self {
        self.css_minify = css_minify.into();
        self
    }

    /// Set the bundler option overrides
    pub fn with_rollup_options(mut self, rollup_options: RollupOptions) -> Self {
        self.rollup_options = rollup_options;
        self
    }

    /// Create from serde_json::Value (for programmatic options from a host)
    ///
    /// # Example
    ///
    /// ```
    /// use fob_plugin_entries::{CssMinify, EntriesOptions};
    /// use serde_json::json;
    ///
    /// let options = EntriesOptions::from_value(json!({
    ///     "assetFiles": { "app": "src/app.tsx" },
    ///     "entryDir": "entries",
    ///     "cssMinify": false
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(options.css_minify, CssMinify::Enabled(false));
    /// assert_eq!(options.root_dir.to_str(), Some("src"));
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| EntriesError::invalid_options(e.to_string()))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| EntriesError::invalid_options(e.to_string()))
    }

    /// Parse options from TOML source
    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse_toml(content, "inline options")
    }

    /// Read options from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        tracing::debug!("Loading entries options from {}", path.display());
        parse_toml(&content, &path.display().to_string())
    }
}

fn parse_toml(content: &str, origin: &str) -> Result<EntriesOptions> {
    let toml_val: toml::Value = toml::from_str(content).map_err(|e| EntriesError::Toml {
        origin: origin.to_string(),
        message: e.to_string(),
    })?;

    let value = serde_json::to_value(toml_val).map_err(|e| EntriesError::Toml {
        origin: origin.to_string(),
        message: format!("TOML to JSON conversion failed: {}", e),
    })?;

    EntriesOptions::from_value(value)
}
