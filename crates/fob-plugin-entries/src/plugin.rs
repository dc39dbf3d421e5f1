//! Config hook integration
//!
//! The host build tool calls [`ConfigHook::config`] once at startup, before it
//! resolves its own configuration, and merges the returned partial config into
//! its user config.

use crate::config::{build_config, UserConfig};
use crate::error::Result;
use crate::options::EntriesOptions;
use crate::resolver::resolve_entries;

/// A plugin that contributes to the host's build configuration
pub trait ConfigHook {
    /// Plugin name for debugging and logging
    fn name(&self) -> &str;

    /// Produce a partial configuration.
    ///
    /// Called synchronously with no arguments. Errors abort host startup.
    fn config(&self) -> Result<UserConfig>;
}

/// Plugin that turns an entry directory into bundler input/output settings
///
/// # Architecture
///
/// ```text
/// config() → scan root_dir/entry_dir for *.tsx → merge over asset_files
///          → build_config (theme output defaults + rollup_options) → UserConfig
/// ```
///
/// # Example
///
/// ```rust,no_run
/// use fob_plugin_entries::{ConfigHook, EntriesOptions, EntriesPlugin};
///
/// let plugin = EntriesPlugin::new(
///     EntriesOptions::new("entries").with_asset("app", "src/app.tsx"),
/// );
/// let config = plugin.config().unwrap();
/// println!("{}", config.to_value().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct EntriesPlugin {
    options: EntriesOptions,
}

impl EntriesPlugin {
    pub fn new(options: EntriesOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EntriesOptions {
        &self.options
    }
}

impl ConfigHook for EntriesPlugin {
    fn name(&self) -> &str {
        "fob-entries"
    }

    fn config(&self) -> Result<UserConfig> {
        let options = &self.options;
        let entries = resolve_entries(&options.root_dir, &options.entry_dir, &options.asset_files)?;

        Ok(build_config(
            entries,
            options.css_minify,
            options.empty_out_dir,
            &options.rollup_options,
        ))
    }
}
