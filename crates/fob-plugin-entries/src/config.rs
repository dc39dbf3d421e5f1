//! Partial build configuration returned to the host.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EntriesError, Result};
use crate::options::CssMinify;
use crate::resolver::AssetMap;
use crate::rollup::RollupOptions;

/// Partial user configuration produced by the config hook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    /// Static public-assets directory. Always disabled.
    pub public_dir: bool,

    pub build: BuildConfig,
}

/// `build` section of [`UserConfig`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub css_minify: CssMinify,

    pub empty_out_dir: bool,

    pub rollup_options: RollupOptions,
}

impl UserConfig {
    /// Convert to serde_json::Value for handing to the host
    ///
    /// # Example
    ///
    /// ```
    /// use fob_plugin_entries::{build_config, AssetMap, CssMinify, RollupOptions};
    /// use serde_json::json;
    ///
    /// let config = build_config(AssetMap::new(), CssMinify::default(), false, &RollupOptions::default());
    /// let value = config.to_value().unwrap();
    ///
    /// assert_eq!(value["publicDir"], json!(false));
    /// assert_eq!(value["build"]["rollupOptions"]["output"]["dir"], json!("theme/assets"));
    /// ```
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| EntriesError::invalid_options(e.to_string()))
    }
}

/// Assemble the partial configuration from resolved entries and caller settings.
///
/// Pure value construction: the public directory is disabled, `css_minify` and
/// `empty_out_dir` are copied through, and the bundler options are
/// `rollup_options` merged over the theme defaults with `input` set to `entries`.
pub fn build_config(
    entries: AssetMap,
    css_minify: CssMinify,
    empty_out_dir: bool,
    rollup_options: &RollupOptions,
) -> UserConfig {
    UserConfig {
        public_dir: false,
        build: BuildConfig {
            css_minify,
            empty_out_dir,
            rollup_options: rollup_options.merged_over_defaults(entries),
        },
    }
}
