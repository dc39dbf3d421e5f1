//! Entry discovery plugin for Rollup-style builds
//!
//! Scans an entry directory for `.tsx` files, names each entry after its file,
//! and returns a partial build configuration with those entries as bundler
//! input and flat, hash-free output naming for theme assets.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fob_plugin_entries::{ConfigHook, CssMinifier, EntriesOptions, EntriesPlugin};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = EntriesOptions::new("entries")
//!     .with_root_dir("src")
//!     .with_asset("styles", "src/styles/theme.css")
//!     .with_css_minify(CssMinifier::Lightningcss);
//!
//! let config = EntriesPlugin::new(options).config()?;
//! // `config.build.rollup_options.input` now maps e.g. "product" → "/abs/src/entries/product.tsx"
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod options;
mod plugin;
mod resolver;
mod rollup;

pub use config::{build_config, BuildConfig, UserConfig};
pub use error::{EntriesError, Result};
pub use options::{CssMinifier, CssMinify, EntriesOptions, DEFAULT_ROOT_DIR};
pub use plugin::{ConfigHook, EntriesPlugin};
pub use resolver::{entry_name, resolve_entries, resolve_root, AssetMap, ENTRY_EXTENSION};
pub use rollup::{InputOption, OutputFormat, OutputOptions, RollupOptions, DEFAULT_OUTPUT_DIR};
