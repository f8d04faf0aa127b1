//! Configuration module
//!
//! This module contains the run settings and the optional YAML settings file.

mod loader;
mod model;

pub use loader::{expand_path, load_settings_file};
pub use model::{Settings, SettingsFile};
