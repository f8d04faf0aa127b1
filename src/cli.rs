use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name, crate_version};

use crate::config::{Settings, SettingsFile, load_settings_file};
use crate::constants::{
    CONFIG_HELP, DRY_RUN_HELP, INPUT_HELP, LOG_FILE_HELP, MOVE_HELP, OUTPUT_HELP, OVERWRITE_HELP,
    SUFFIX_HELP, TAB_SIZE_HELP, TEMPLATE_HELP, VERBOSE_HELP,
};
use crate::errors::Result;
use crate::logging::LogLevel;

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `in`, `out`, `move`: input, output and move folders
/// - `suffix`, `tabSize`, `template`, `overwrite`: conversion settings
/// - `config`: optional YAML settings file
/// - `dry`: run without writing any files
/// - `verbose`, `log_file`: logging
pub fn build_command() -> Command {
    let arg_input = Arg::new("in").long("in").value_name("DIR").help(INPUT_HELP);

    let arg_output = Arg::new("out").long("out").value_name("DIR").help(OUTPUT_HELP);

    let arg_move = Arg::new("move").long("move").value_name("DIR").help(MOVE_HELP);

    let arg_suffix = Arg::new("suffix")
        .long("suffix")
        .value_name("SUFFIX")
        .help(SUFFIX_HELP);

    let arg_tab_size = Arg::new("tabSize")
        .long("tabSize")
        .value_name("SPACES")
        .value_parser(clap::value_parser!(u16))
        .help(TAB_SIZE_HELP);

    let arg_template = Arg::new("template")
        .long("template")
        .value_name("FILE")
        .help(TEMPLATE_HELP);

    let arg_overwrite = Arg::new("overwrite")
        .long("overwrite")
        .help(OVERWRITE_HELP)
        .action(ArgAction::SetTrue);

    // define arg for reading settings from a file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .help(CONFIG_HELP);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    // define arg for log file
    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_input)
        .arg(arg_output)
        .arg(arg_move)
        .arg(arg_suffix)
        .arg(arg_tab_size)
        .arg(arg_template)
        .arg(arg_overwrite)
        .arg(arg_config)
        .arg(arg_dry)
        .arg(arg_verbose)
        .arg(arg_log_file)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    LogLevel::from_occurrences(matches.get_count("verbose"))
}

/// Gets the log file path, or an empty string when logging to a file is disabled
pub fn get_log_file(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_default()
}

/// Collects the settings given on the command line
pub fn get_cli_settings(matches: &ArgMatches) -> SettingsFile {
    let string = |id: &str| matches.get_one::<String>(id).cloned();

    SettingsFile {
        input_folder: string("in"),
        output_folder: string("out"),
        move_folder: string("move"),
        suffix: string("suffix"),
        tab_size: matches.get_one::<u16>("tabSize").copied(),
        template: string("template"),
        // An absent flag must not override `overwrite: true` from a settings file
        overwrite: matches.get_flag("overwrite").then_some(true),
    }
}

/// Resolves the run settings from the settings file and the command line
///
/// # Errors
/// Returns an error if the settings file cannot be loaded or a required
/// setting is missing
pub fn get_settings(matches: &ArgMatches) -> Result<Settings> {
    let file_settings = match matches.get_one::<String>("config") {
        Some(path) => load_settings_file(Path::new(path))?,
        None => SettingsFile::default(),
    };

    let settings = file_settings.merge(get_cli_settings(matches));
    Settings::from_file(settings, matches.get_flag("dry"))
}
