use std::process::exit;

use human_panic::setup_panic;
use log::error;

use svg_component::prelude::*;

fn main() {
    setup_panic!();

    let matches = get_matches();

    if let Err(e) = init_logger(get_verbosity(&matches), &get_log_file(&matches)) {
        eprintln!("Failed to initialise logging: {e}");
        exit(1);
    }

    if let Err(e) = run(&matches) {
        error!("{e}");
        exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> Result<WorkflowStats> {
    let settings = get_settings(matches)?;
    convert_files(&settings, &LogReporter)
}
