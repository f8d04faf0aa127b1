//! Configuration data structures

use std::path::PathBuf;

use serde::Deserialize;

use crate::config::loader::expand_path;
use crate::errors::{Result, config_missing_error};

/// Settings read from an optional YAML file
///
/// Every key is optional, values given on the command line take precedence.
///
/// ```yaml
/// in: ~/icons/svg
/// out: ./src/icons
/// move: ~/icons/done
/// suffix: Icon
/// tabSize: 2
/// template: ./icon.template
/// overwrite: false
/// ```
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(rename = "in")]
    pub input_folder: Option<String>,
    #[serde(rename = "out")]
    pub output_folder: Option<String>,
    #[serde(rename = "move")]
    pub move_folder: Option<String>,
    pub suffix: Option<String>,
    #[serde(rename = "tabSize")]
    pub tab_size: Option<u16>,
    pub template: Option<String>,
    pub overwrite: Option<bool>,
}

impl SettingsFile {
    /// Overlays `other` on top of `self`, keeping values of `self` that `other` leaves unset
    pub fn merge(self, other: SettingsFile) -> SettingsFile {
        SettingsFile {
            input_folder: other.input_folder.or(self.input_folder),
            output_folder: other.output_folder.or(self.output_folder),
            move_folder: other.move_folder.or(self.move_folder),
            suffix: other.suffix.or(self.suffix),
            tab_size: other.tab_size.or(self.tab_size),
            template: other.template.or(self.template),
            overwrite: other.overwrite.or(self.overwrite),
        }
    }
}

/// Immutable settings of a single run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Folder scanned for SVG files
    pub input_folder: PathBuf,
    /// Folder receiving the generated components
    pub output_folder: PathBuf,
    /// Folder receiving the original files after conversion
    pub move_folder: Option<PathBuf>,
    /// Suffix appended to every component name
    pub suffix: String,
    /// Number of spaces per indentation level
    pub tab_size: usize,
    /// Template file with the `%svg%`, `%name%` and `%tags%` placeholders
    pub template: PathBuf,
    /// Whether existing components and moved files may be replaced
    pub overwrite: bool,
    /// Whether to skip writing and moving files
    pub dry_run: bool,
}

impl Settings {
    /// Builds the run settings, checking that the required values are present
    ///
    /// # Errors
    /// Returns a `ConfigMissing` error naming the first missing value, checked
    /// in the order template, input folder, output folder
    pub fn from_file(file: SettingsFile, dry_run: bool) -> Result<Settings> {
        let template = required(file.template, "Template")?;
        let input_folder = required(file.input_folder, "Input folder")?;
        let output_folder = required(file.output_folder, "Output folder")?;

        Ok(Settings {
            input_folder,
            output_folder,
            move_folder: file
                .move_folder
                .filter(|folder| !folder.is_empty())
                .map(|folder| PathBuf::from(expand_path(&folder))),
            suffix: file.suffix.unwrap_or_default(),
            tab_size: file.tab_size.map(usize::from).unwrap_or_default(),
            template,
            overwrite: file.overwrite.unwrap_or_default(),
            dry_run,
        })
    }
}

fn required(value: Option<String>, option: &str) -> Result<PathBuf> {
    value
        .filter(|value| !value.is_empty())
        .map(|value| PathBuf::from(expand_path(&value)))
        .ok_or_else(|| config_missing_error(option))
}
