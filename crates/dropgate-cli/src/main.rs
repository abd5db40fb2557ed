use dropgate_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; init falls back to stderr on
    // its own when the XDG state dir is unwritable.
    logging::init();

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("dropgate error: {:#}", err);
        std::process::exit(1);
    }
}
