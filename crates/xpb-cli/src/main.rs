use xpb_core::fetch::FetchError;
use xpb_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; stdout stays reserved for the PKGBUILD.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args() {
        match err.downcast_ref::<FetchError>() {
            Some(FetchError::Status { code, reason }) => {
                println!("Failed to get addon data, reason: {} - {}", code, reason);
            }
            _ => eprintln!("xpi2pkgbuild error: {:#}", err),
        }
        std::process::exit(1);
    }
}
