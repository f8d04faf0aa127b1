//! File discovery module
//!
//! This module contains components for scanning directories and finding files.

mod scanner;

pub use scanner::scan_directory;
