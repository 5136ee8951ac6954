mod bootstrap_helpers;
mod cli_args;
mod labeler_run;

use std::process::ExitCode;

use clap::Parser;

use crate::bootstrap_helpers::init_tracing;
use crate::cli_args::Cli;
use crate::labeler_run::run_labeler;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!("Started");
    match run_labeler(&cli).await {
        Ok(outcome) => {
            tracing::debug!(?outcome, "Finished");
            ExitCode::SUCCESS
        }
        Err(error) => {
            // GitHub Actions turns this line into a failed-run annotation.
            eprintln!("::error::{error:#}");
            ExitCode::FAILURE
        }
    }
}
