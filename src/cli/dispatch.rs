use anyhow::Result;
use clap::CommandFactory;
use keg::commands::{fetch, includers, index, node, scan, validate};
use keg::completions::{generate_completions, Shell};
use keg::config::Config;
use std::str::FromStr;

use super::types::{Cli, Commands};

pub fn dispatch(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Index { path, sort, json } => {
            index::execute(&config.resolve_kegpath(path), sort, json)
        }
        Commands::Fetch { url, sort, json } => fetch::execute(&config.http, &url, sort, json),
        Commands::Scan { path, write } => scan::execute(&config.resolve_kegpath(path), write),
        Commands::Validate { path } => validate::execute(&config.resolve_kegpath(path)),
        Commands::Node { dir } => node::execute(&dir),
        Commands::Includers { id, path } => {
            includers::execute(&config.resolve_kegpath(path), &id)
        }
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            generate_completions(&mut Cli::command(), shell);
            Ok(())
        }
    }
}
