use std::process::ExitCode;

use clap::Parser;
use lib::birthday::{
    config::read_config, models::Args, remote_api::BitrixClient, run_tool::run,
};
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let Some(config) = read_config(&args) else {
        error!("Error reading config, exiting.");
        return ExitCode::FAILURE;
    };
    info!("Posting to {} from user {}", config.domain, config.bot_id);

    let http_client = reqwest::Client::new();
    let bitrix_api = BitrixClient::new(http_client, config.webhook_url());

    /* Congratulate */
    match run(&bitrix_api, &config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Run failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
