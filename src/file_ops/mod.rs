//! File operations module
//!
//! This module contains the file system glue around the conversion pipeline.

mod actions;

pub use actions::{create_directories, move_file, read_file, write_file};
