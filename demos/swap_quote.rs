use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use tracing_subscriber::prelude::*;

use wallet_balance_pipeline::sources::{FilePriceSource, PriceSource};
use wallet_balance_pipeline::swap::{exchange_rate_label, format_quote, token_amount, Token};

#[derive(Parser, Debug)]
#[clap(version)]
pub struct Cli {
    /// path to the price feed (json array of records)
    #[clap(long, value_parser)]
    prices_path: PathBuf,

    #[clap(long, value_parser)]
    sell: String,

    #[clap(long, value_parser)]
    buy: String,

    /// amount of the sell token
    #[clap(long, value_parser)]
    amount: String,
}

fn main() {
    let result = _main();
    result.unwrap();
}

fn _main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_test_writer();

    tracing_subscriber::registry().with(fmt_layer).init();

    let Cli {
        prices_path,
        sell,
        buy,
        amount,
    } = Cli::parse();

    let prices = FilePriceSource::new(prices_path).prices()?;
    let sell = Token::from_table(&sell, &prices);
    let buy = Token::from_table(&buy, &prices);

    let bought = token_amount(&amount, &sell, &buy)
        .ok_or_else(|| anyhow!("can't quote {:?} {} for {}", amount, sell.symbol, buy.symbol))?;

    if let Some(rate) = exchange_rate_label(&sell, &buy) {
        tracing::info!("{}", rate);
    }
    tracing::info!(
        "{} {} -> {} {}",
        amount.trim(),
        sell.symbol,
        format_quote(bought, 6),
        buy.symbol
    );
    Ok(())
}
