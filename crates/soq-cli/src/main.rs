use soq_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    logging::init();

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("soq error: {:#}", err);
        std::process::exit(1);
    }
}
