//! Fetch command - print the index of a remote keg

use anyhow::{Context, Result};

use super::common::{render_index, SortOrder};
use crate::config::HttpConfig;
use crate::index::fetch_index_with;
use crate::net::HttpClient;

pub fn execute(http: &HttpConfig, url: &str, sort: Option<SortOrder>, json: bool) -> Result<()> {
    let client = HttpClient::from_config(http).context("Failed to create HTTP client")?;
    let mut index =
        fetch_index_with(&client, url).with_context(|| format!("Failed to fetch index from {url}"))?;
    if let Some(sort) = sort {
        sort.apply(&mut index);
    }
    print!("{}", render_index(&index, json)?);
    Ok(())
}
