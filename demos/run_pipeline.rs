use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::prelude::*;

use wallet_balance_pipeline::config::PipelineConfig;
use wallet_balance_pipeline::pipeline::run_pipeline_from_config;

#[derive(Parser, Debug)]
#[clap(version)]
pub struct Cli {
    /// path to config file
    #[clap(long, value_parser)]
    config_path: PathBuf,
}

fn main() {
    let result = _main();
    result.unwrap();
}

fn _main() -> anyhow::Result<()> {
    // Start logging setup block
    let fmt_layer = tracing_subscriber::fmt::layer().with_test_writer();

    tracing_subscriber::registry().with(fmt_layer).init();

    let Cli { config_path } = Cli::parse();

    tracing::info!("Config file {:?}", config_path);
    let file = File::open(&config_path).with_context(|| {
        format!(
            "Cannot read config file {path}",
            path = config_path.display()
        )
    })?;
    let config: PipelineConfig = serde_yaml::from_reader(file).with_context(|| {
        format!(
            "Cannot read config file {path}",
            path = config_path.display()
        )
    })?;

    let rows = run_pipeline_from_config(&config)?;
    let unpriced = rows.iter().filter(|row| !row.usd_value.is_priced()).count();
    tracing::info!("Total rows: {:?}, without price: {:?}", rows.len(), unpriced);
    Ok(())
}
