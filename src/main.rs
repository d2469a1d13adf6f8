use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = taskdeck::cli::Cli::parse();
    let config = taskdeck::config::from_cli(&cli)?;
    taskdeck::tui::run(config, cli.log_filter.clone())?;
    Ok(())
}
