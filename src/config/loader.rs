//! Configuration loading functionality

use std::fs;
use std::path::Path;

use log::debug;
use shellexpand::tilde;

use crate::errors::{Result, config_parsing_error, file_operation_error};

use super::model::SettingsFile;

/// Expands a leading `~` to the home directory
pub fn expand_path(path: &str) -> String {
    tilde(path).to_string()
}

/// Loads a YAML settings file
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid YAML
pub fn load_settings_file(file: &Path) -> Result<SettingsFile> {
    debug!("Loading settings from {}", file.display());

    let content = fs::read_to_string(file)
        .map_err(|e| file_operation_error(e, file.to_path_buf(), "read"))?;

    // An empty document deserialises to YAML null
    if content.trim().is_empty() {
        return Ok(SettingsFile::default());
    }

    serde_yaml::from_str(&content).map_err(|e| {
        config_parsing_error(
            e,
            &format!("Failed to parse settings file {}", file.display()),
        )
    })
}
