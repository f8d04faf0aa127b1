//! File operation functionality
//!
//! This module contains the functions reading, writing and moving files and
//! creating directories.

use std::fs::{self, create_dir_all};
use std::path::{Path, PathBuf};

use encoding_rs::UTF_8;
use fs_extra::file::{CopyOptions, move_file as fs_move_file};
use log::{debug, warn};

use crate::errors::{Error, Result, already_exists_error, file_operation_error};

/// Creates every directory in the list, including missing parents
///
/// Directories that cannot be created are returned with their error so that
/// the caller can report them. Creation continues with the remaining ones.
pub fn create_directories(directories: &[&Path]) -> Vec<Error> {
    directories
        .iter()
        .filter(|directory| !directory.as_os_str().is_empty() && !directory.exists())
        .filter_map(|directory| {
            debug!("Creating directory: {}", directory.display());
            create_dir_all(directory)
                .map_err(|e| file_operation_error(e, directory.to_path_buf(), "create directory"))
                .err()
        })
        .collect()
}

/// Reads a file as UTF-8 text
///
/// A byte order mark is stripped and malformed sequences are replaced with
/// U+FFFD.
///
/// # Errors
/// Returns an error if the file cannot be read
pub fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;

    let (content, had_errors) = UTF_8.decode_with_bom_removal(&bytes);
    if had_errors {
        warn!(
            "File {} contains invalid UTF-8 sequences, they were replaced",
            path.display()
        );
    }

    Ok(content.into_owned())
}

/// Writes `content` to `path` unless the file exists and `overwrite` is not set
///
/// # Errors
/// Returns an `AlreadyExists` error if the file exists and may not be
/// replaced, or a file operation error if writing fails
pub fn write_file(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if !overwrite && path.exists() {
        return Err(already_exists_error(path.to_path_buf(), "write"));
    }

    fs::write(path, content).map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))
}

/// Moves `source` to `destination` unless the destination exists and `overwrite` is not set
///
/// Falls back to copying and removing the source when a rename is not
/// possible, e.g. across file systems.
///
/// # Errors
/// Returns an `AlreadyExists` error if the destination exists and may not be
/// replaced, or a file operation error if moving fails
pub fn move_file(source: &Path, destination: &Path, overwrite: bool) -> Result<PathBuf> {
    if !overwrite && destination.exists() {
        return Err(already_exists_error(destination.to_path_buf(), "move"));
    }

    debug!(
        "Moving file: {} -> {}",
        source.display(),
        destination.display()
    );
    let options = CopyOptions::new().overwrite(overwrite);
    fs_move_file(source, destination, &options).map_err(|e| {
        file_operation_error(std::io::Error::other(e), source.to_path_buf(), "move")
    })?;

    Ok(destination.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use tempfile::tempdir;

    #[test]
    fn test_create_directories() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let nested = temp_dir.path().join("a").join("b");
        let existing = temp_dir.path().to_path_buf();

        let errors = create_directories(&[nested.as_path(), existing.as_path(), Path::new("")]);

        assert!(errors.is_empty());
        assert!(nested.is_dir());
    }

    #[test]
    fn test_create_directories_reports_failures() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let file = temp_dir.path().join("file");
        fs::write(&file, "x").expect("Failed to write file");
        let below_file = file.join("dir");

        let errors = create_directories(&[below_file.as_path()]);

        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], Error::FileOperation { .. }));
    }

    #[test]
    fn test_read_file_strips_bom() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let path = temp_dir.path().join("icon.svg");
        fs::write(&path, b"\xEF\xBB\xBF<svg></svg>").expect("Failed to write file");

        assert_eq!(read_file(&path).unwrap(), "<svg></svg>");
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_file(Path::new("/nonexistent/icon.svg"));
        assert!(matches!(result, Err(Error::FileOperation { .. })));
    }

    #[test]
    fn test_write_file() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let path = temp_dir.path().join("Icon.tsx");

        write_file(&path, "first", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");

        // Existing files are kept without overwrite
        let result = write_file(&path, "second", false);
        assert!(matches!(result, Err(Error::AlreadyExists { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");

        write_file(&path, "third", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "third");
    }

    #[test]
    fn test_move_file() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let source = temp_dir.path().join("icon.svg");
        let destination = temp_dir.path().join("icon-moved.svg");
        fs::write(&source, "<svg></svg>").expect("Failed to write file");

        let moved = move_file(&source, &destination, false).unwrap();

        assert_eq!(moved, destination);
        assert!(!source.exists());
        assert_eq!(fs::read_to_string(&destination).unwrap(), "<svg></svg>");
    }

    #[test]
    fn test_move_file_refuses_existing_destination() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let source = temp_dir.path().join("icon.svg");
        let destination = temp_dir.path().join("done.svg");
        fs::write(&source, "new").expect("Failed to write file");
        fs::write(&destination, "old").expect("Failed to write file");

        let result = move_file(&source, &destination, false);
        assert!(matches!(result, Err(Error::AlreadyExists { .. })));
        assert!(source.exists());

        move_file(&source, &destination, true).unwrap();
        assert!(!source.exists());
        assert_eq!(fs::read_to_string(&destination).unwrap(), "new");
    }
}
