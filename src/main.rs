mod cli;

use anyhow::Result;
use clap::Parser;
use keg::config::Config;
use tracing_subscriber::EnvFilter;

use cli::dispatch::dispatch;
use cli::types::Cli;

fn main() -> Result<()> {
    // stdout carries index data; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("keg=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    dispatch(cli.command, &config)
}
