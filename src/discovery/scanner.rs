//! Directory scanning functionality
//!
//! This module contains functions for scanning directories and finding files.

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::{Result, file_operation_error};
use crate::utils::is_hidden_file;

/// Scans a directory for files
///
/// Hidden files and subdirectories are skipped. The files are sorted by path
/// so that runs are reproducible.
///
/// # Errors
/// Returns an error if the directory cannot be read
pub fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>> {
    debug!("Scanning directory: {}", directory.display());

    let mut files: Vec<PathBuf> = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "list"))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| !is_hidden_file(path))
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    debug!("Found {} files in directory", files.len());

    Ok(files)
}
