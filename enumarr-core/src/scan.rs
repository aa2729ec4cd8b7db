//! Default input discovery.
//!
//! When no files are given, the original tool processed every `.go` file
//! sitting directly in the working directory, so discovery is deliberately
//! non-recursive. Results are sorted by name to keep the extraction order,
//! and with it the generated file, deterministic across platforms.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Gather all `.go` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not entered; in Go they are separate packages.
pub fn gather_go_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => {
                let path = e.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == "go") {
                    Some(Ok(path.to_path_buf()))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(e.into())),
        })
        .collect::<Result<Vec<_>>>()
        .context(format!("Failed to gather .go files from {}", dir.display()))?;

    files.sort();
    Ok(files)
}
