//! utilkit - command-line front end for the utility functions.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    config::load_dotenv(&cwd);

    let config = CliConfig::from_env();

    // Logs go to stderr; stdout carries command output only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(command) = args.next() else {
        anyhow::bail!(commands::USAGE);
    };
    let rest: Vec<String> = args.collect();

    tracing::debug!(command = %command, args = rest.len(), "Running command");

    let output = commands::run(&command, &rest, &config).await?;
    println!("{output}");
    Ok(())
}
