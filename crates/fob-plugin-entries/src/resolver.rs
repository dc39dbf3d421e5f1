//! Entry discovery
//!
//! Lists the files directly inside an entry directory and maps each `.tsx`
//! file to a logical entry name (the file name without its extension).
//! Subdirectories are not descended into and file contents are never read.

use indexmap::IndexMap;
use path_clean::PathClean;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{EntriesError, Result};

/// Logical entry name to source path, in insertion order.
pub type AssetMap = IndexMap<String, PathBuf>;

/// File extension recognized as an entry module.
pub const ENTRY_EXTENSION: &str = ".tsx";

/// Resolve `root_dir` to an absolute, lexically normalized path.
///
/// Relative paths are resolved against the current working directory.
/// Symlinks are not followed.
pub fn resolve_root(root_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let root_dir = root_dir.as_ref();
    if root_dir.is_absolute() {
        return Ok(root_dir.clean());
    }

    let cwd = std::env::current_dir().map_err(EntriesError::CurrentDir)?;
    Ok(cwd.join(root_dir).clean())
}

/// Join `path` under `base`, dropping any root or prefix of `path`.
///
/// An absolute `path` is treated as relative to `base`, so `/r` joined with
/// `/x` is `/r/x`.
fn join_under(base: &Path, path: &Path) -> PathBuf {
    let mut joined = base.to_path_buf();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            Component::CurDir | Component::ParentDir | Component::Normal(_) => {
                joined.push(component)
            }
        }
    }
    joined.clean()
}

/// Derive the logical entry name for a file name, or `None` if it is not an entry.
///
/// ```
/// use fob_plugin_entries::entry_name;
///
/// assert_eq!(entry_name("product.tsx"), Some("product"));
/// assert_eq!(entry_name("theme.min.tsx"), Some("theme.min"));
/// assert_eq!(entry_name("styles.css"), None);
/// ```
pub fn entry_name(file_name: &str) -> Option<&str> {
    // A bare ".tsx" is a dotfile with no extension, so it keeps its full name.
    match file_name.strip_suffix(ENTRY_EXTENSION)? {
        "" => Some(file_name),
        stem => Some(stem),
    }
}

/// Scan `root_dir/entry_dir` and merge the discovered entries over `seed`.
///
/// Scanned entries replace seed entries with the same name. The directory is
/// read once; a missing or unreadable directory is returned as
/// [`EntriesError::ReadEntryDir`] before anything is produced.
pub fn resolve_entries(
    root_dir: impl AsRef<Path>,
    entry_dir: impl AsRef<Path>,
    seed: &AssetMap,
) -> Result<AssetMap> {
    let root = resolve_root(root_dir)?;
    let dir = join_under(&root, entry_dir.as_ref());

    tracing::debug!("Scanning entry directory: {}", dir.display());

    let mut file_names = Vec::new();
    let read_dir = fs::read_dir(&dir).map_err(|e| EntriesError::read_entry_dir(&dir, e))?;
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| EntriesError::read_entry_dir(&dir, e))?;
        match dir_entry.file_name().into_string() {
            Ok(name) => file_names.push(name),
            Err(name) => tracing::trace!("Skipping non UTF-8 file name: {:?}", name),
        }
    }
    file_names.sort_unstable();

    let mut entries = seed.clone();
    let mut discovered = 0usize;

    for file_name in &file_names {
        let Some(name) = entry_name(file_name) else {
            continue;
        };

        let path = dir.join(file_name);
        tracing::trace!("Found entry '{}' at {}", name, path.display());

        if let Some(previous) = entries.insert(name.to_string(), path) {
            tracing::debug!(
                "Scanned entry '{}' replaces explicit asset {}",
                name,
                previous.display()
            );
        }
        discovered += 1;
    }

    tracing::debug!(
        "Discovered {} entries in {} ({} total with assets)",
        discovered,
        dir.display(),
        entries.len()
    );

    Ok(entries)
}
