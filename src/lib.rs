//! Converts a folder of SVG files into react-native-svg TSX components.
//!
//! Each file goes through a fixed sequence of textual rewrites (tag
//! extraction, attribute stripping, tag capitalisation, props injection and
//! indentation) before being wrapped in a user supplied template.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod transform;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{get_log_file, get_matches, get_settings, get_verbosity};
    pub use crate::config::Settings;
    pub use crate::errors::{
        already_exists_error, config_missing_error, config_parsing_error, empty_input_error,
        file_operation_error, tag_not_found_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::transform::transform_svg;
    pub use crate::workflow::{LogReporter, Reporter, WorkflowStats, convert_files};
}
