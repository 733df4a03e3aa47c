// src/bin/cli.rs
use clap::Parser;
use roster_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run(cli::Cli::parse())?;
    Ok(())
}
