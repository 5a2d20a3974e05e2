use std::process::ExitCode;

use clap::Parser;
use lunchbox::cli::{Cli, run};
use lunchbox::setup_environment;
use lunchbox_client::{Api, NetworkHttpClient};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = setup_environment();
    tracing::debug!(environment = %config.environment, base_url = %config.api_base_url, "starting");

    let result = match NetworkHttpClient::new(&config.client_config()) {
        Ok(http) => run(cli.command, &config, &Api::new(http)).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
