//! Workflow module
//!
//! This module contains components for orchestrating the conversion.

mod context;
mod engine;
mod reporter;

pub use context::{ConversionOutcome, WorkflowStats};
pub use engine::{convert_file, convert_files};
pub use reporter::{LogReporter, Reporter};
