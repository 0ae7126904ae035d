mod app;
mod cli;
mod config;
mod errors;
mod evaluation_client;
mod input;
mod models;
mod render;
mod submission;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::evaluation_client::HttpEvaluationClient;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?.with_api_url(cli.api_url.clone());

    // Logs go to stderr; stdout carries the rendered view only
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Screener v{} using {}", env!("CARGO_PKG_VERSION"), config.api_url);

    let client = HttpEvaluationClient::new(&config.api_url, config.timeout)?;

    match cli.command {
        Command::Evaluate(args) => {
            let inputs = app::load_inputs(&args).await?;
            let succeeded =
                app::run_evaluation(client, &inputs, args.json, &mut std::io::stdout()).await?;
            Ok(if succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Health => {
            app::run_health(&client, &config.api_url).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
