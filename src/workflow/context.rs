//! Workflow context
//!
//! This module defines the statistics collected while converting files.

use std::path::PathBuf;

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of input files processed
    pub files_processed: usize,
    /// Number of components written (or that would be written in a dry run)
    pub files_converted: usize,
    /// Number of original files moved after conversion
    pub files_moved: usize,
    /// Number of failures reported, including failed moves and directory creation
    pub errors: usize,
}

/// Result of converting a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    /// The generated component file
    pub output_path: PathBuf,
    /// Where the original file was moved to, if it was moved
    pub moved_to: Option<PathBuf>,
    /// Whether moving the original file was attempted and failed
    pub move_failed: bool,
}

impl WorkflowStats {
    /// Records a successful conversion
    pub fn record_conversion(&mut self, outcome: &ConversionOutcome) {
        self.files_converted += 1;
        if outcome.moved_to.is_some() {
            self.files_moved += 1;
        }
    }

    /// Increments the number of files processed
    pub fn increment_files_processed(&mut self) {
        self.files_processed += 1;
    }

    /// Increments the number of errors
    pub fn increment_errors(&mut self) {
        self.errors += 1;
    }
}
