//! Failure reporting
//!
//! The workflow never logs failures directly. It hands them to a `Reporter`
//! so that callers decide where they go.

use log::error;

use crate::errors::Error;

/// Receives the non-fatal failures of a run
pub trait Reporter {
    /// Reports a failure that prevented one step of the conversion
    fn report_failure(&self, error: &Error);
}

/// Reporter writing failures to the error log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report_failure(&self, error: &Error) {
        error!("{error}");
    }
}
