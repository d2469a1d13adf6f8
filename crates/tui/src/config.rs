pub use taskdeck_core::config::*;

use crate::cli::Cli;

pub fn from_cli(cli: &Cli) -> anyhow::Result<ApiConfig> {
    Ok(ApiConfig::discover(cli.api_url.clone(), cli.token.clone())?
        .with_page_size(cli.page_size))
}
