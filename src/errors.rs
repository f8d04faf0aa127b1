use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the SVG component converter
#[derive(Debug)]
pub enum Error {
    /// A required setting was not provided
    ConfigMissing { option: String },
    /// The input folder contains no files to convert
    EmptyInput { path: PathBuf },
    /// The expected tag could not be found in the markup
    TagNotFound { tag: String },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// The destination exists and overwriting was not allowed
    AlreadyExists { path: PathBuf, operation: String },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigMissing { option } => write!(f, "{option} not specified."),
            Error::EmptyInput { path } => {
                write!(
                    f,
                    "Input folder does not contain any SVG files: {}",
                    path.display()
                )
            }
            Error::TagNotFound { tag } => write!(f, "{} tag not found.", tag.to_uppercase()),
            Error::FileOperation {
                source,
                path,
                operation,
            } => {
                write!(
                    f,
                    "Failed to {} file {}: {}",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::AlreadyExists { path, operation } => {
                write!(f, "Can't {} file, '{}' already exist.", operation, path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "access".to_string(),
        }
    }
}

/// Custom Result type for the SVG component converter
///
/// # Examples
/// ```
/// use svg_component::prelude::{Result, tag_not_found_error};
///
/// fn root_tag(markup: &str) -> Result<&str> {
///     if markup.contains("<svg") {
///         Ok("svg")
///     } else {
///         Err(tag_not_found_error("svg"))
///     }
/// }
///
/// assert!(root_tag("<svg></svg>").is_ok());
/// assert!(root_tag("<p></p>").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a missing setting error
pub fn config_missing_error(option: &str) -> Error {
    Error::ConfigMissing {
        option: option.to_string(),
    }
}

/// Helper function to create an empty input folder error
pub fn empty_input_error(path: PathBuf) -> Error {
    Error::EmptyInput { path }
}

/// Helper function to create a tag not found error
pub fn tag_not_found_error(tag: &str) -> Error {
    Error::TagNotFound {
        tag: tag.to_string(),
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an already exists error
pub fn already_exists_error(path: PathBuf, operation: &str) -> Error {
    Error::AlreadyExists {
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_missing_error() {
        let error = config_missing_error("Template");
        assert_eq!(format!("{error}"), "Template not specified.");
    }

    #[test]
    fn test_empty_input_error() {
        let error = empty_input_error(PathBuf::from("/icons"));

        let error_string = format!("{error}");
        assert!(
            error_string.contains("does not contain any SVG files"),
            "Error message should describe the empty folder"
        );
        assert!(
            error_string.contains("/icons"),
            "Error message should contain the path"
        );
    }

    #[test]
    fn test_tag_not_found_error() {
        let error = tag_not_found_error("svg");
        assert_eq!(format!("{error}"), "SVG tag not found.");
    }

    #[test]
    fn test_file_operation_error() {
        let path = PathBuf::from("/test/path");
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = file_operation_error(io_error, path.clone(), "read");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("read"),
            "Error message should contain the operation"
        );
        assert!(
            error_string.contains("/test/path"),
            "Error message should contain the path"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_already_exists_error() {
        let error = already_exists_error(PathBuf::from("out/Icon.tsx"), "write");
        assert_eq!(
            format!("{error}"),
            "Can't write file, 'out/Icon.tsx' already exist."
        );
    }

    #[test]
    fn test_config_parsing_error() {
        let io_error = io::Error::new(io::ErrorKind::InvalidData, "Invalid YAML");
        let error = config_parsing_error(io_error, "Unknown key");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Unknown key"),
            "Error message should contain the detail"
        );
    }

    #[test]
    fn test_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error: Error = io_error.into();

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Failed to access file"),
            "Error message should describe the file operation"
        );
    }
}
