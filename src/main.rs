use clap::Parser;
use std::process::ExitCode;

use noteboard::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    noteboard::logging::init();

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.is_reported() {
                eprintln!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}
