use anyhow::Result;
use clap::Parser;
use gdi_validator::config::ValidatorConfig;
use gdi_validator::logging;

mod cli;

use cli::dispatch::dispatch;
use cli::types::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let config = ValidatorConfig::default();
    dispatch(cli.mode(), &config)
}
