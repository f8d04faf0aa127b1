//! Workflow engine
//!
//! This module contains the engine that drives the conversion of every file
//! in the input folder.

use std::path::Path;

use colored::Colorize;
use log::{debug, info};

use crate::config::Settings;
use crate::constants::START_BANNER;
use crate::discovery::scan_directory;
use crate::errors::{Result, empty_input_error};
use crate::file_ops::{create_directories, move_file, read_file, write_file};
use crate::logging::format_message;
use crate::transform::{component_name, filename_without_extension, transform_svg};
use crate::utils::component_path;

use super::context::{ConversionOutcome, WorkflowStats};
use super::reporter::Reporter;

/// Converts every file of the input folder into a component
///
/// This function orchestrates the workflow steps:
/// 1. Create the input, move and output folders
/// 2. List the files of the input folder
/// 3. Convert each file, reporting failures and carrying on with the next one
///
/// # Arguments
/// * `settings` - Settings of the run
/// * `reporter` - Receives every non-fatal failure
///
/// # Returns
/// * `Result<WorkflowStats>` - Statistics of the run
///
/// # Errors
/// Returns an error if the input folder cannot be listed or contains no files
pub fn convert_files(settings: &Settings, reporter: &dyn Reporter) -> Result<WorkflowStats> {
    let mut stats = WorkflowStats::default();

    if !settings.dry_run {
        let mut directories = vec![settings.input_folder.as_path()];
        if let Some(move_folder) = &settings.move_folder {
            directories.push(move_folder.as_path());
        }
        directories.push(settings.output_folder.as_path());

        for error in create_directories(&directories) {
            reporter.report_failure(&error);
            stats.increment_errors();
        }
    }

    let files = scan_directory(&settings.input_folder)?;
    if files.is_empty() {
        return Err(empty_input_error(settings.input_folder.clone()));
    }

    info!("{START_BANNER}");

    for file in files {
        stats.increment_files_processed();

        match convert_file(settings, &file, reporter) {
            Ok(outcome) => {
                debug!(
                    "Converted {} -> {}",
                    file.display(),
                    outcome.output_path.display()
                );
                if outcome.move_failed {
                    stats.increment_errors();
                }
                stats.record_conversion(&outcome);
            }
            Err(e) => {
                reporter.report_failure(&e);
                stats.increment_errors();
            }
        }
    }

    let summary = format!("{} files converted.", stats.files_converted);
    info!(
        "{}",
        format_message(&summary, &summary.green().bold().to_string())
    );
    debug!("Workflow statistics: {stats:?}");

    Ok(stats)
}

/// Converts a single SVG file into a component
///
/// The template is read again for every file. The original file is only
/// moved once the component was written; a failed move is reported but the
/// conversion still counts as successful.
///
/// # Errors
/// Returns an error if a file cannot be read, the markup has no `<svg>`
/// element or the component cannot be written
pub fn convert_file(
    settings: &Settings,
    input_file: &Path,
    reporter: &dyn Reporter,
) -> Result<ConversionOutcome> {
    debug!("Processing file: {}", input_file.display());

    let name = format!(
        "{}{}",
        component_name(&filename_without_extension(input_file)),
        settings.suffix
    );
    let output_path = component_path(&settings.output_folder, &name);

    let content = read_file(input_file)?;
    let template = read_file(&settings.template)?;
    let component = transform_svg(&content, &name, &template, settings.tab_size)?;

    if settings.dry_run {
        info!("Would create: {}", output_path.display());
        return Ok(ConversionOutcome {
            output_path,
            moved_to: None,
            move_failed: false,
        });
    }

    write_file(&output_path, &component, settings.overwrite)?;
    info!("Created: {}", output_path.display());

    let mut move_failed = false;
    let moved_to = match (&settings.move_folder, input_file.file_name()) {
        (Some(move_folder), Some(filename)) => {
            match move_file(input_file, &move_folder.join(filename), settings.overwrite) {
                Ok(destination) => Some(destination),
                Err(e) => {
                    reporter.report_failure(&e);
                    move_failed = true;
                    None
                }
            }
        }
        _ => None,
    };

    Ok(ConversionOutcome {
        output_path,
        moved_to,
        move_failed,
    })
}
