use crate::balance::{render_row, FormattedBalance, RawBalance, ValuedRow, WalletRow};
use crate::config::PipelineConfig;
use crate::pipeline_utils::formatter::format_all;
use crate::pipeline_utils::prices::PriceTable;
use crate::pipeline_utils::selection::select_and_order;
use crate::pipeline_utils::valuator::valuate_all;
use crate::sources::{BalanceSource, FileBalanceSource, FilePriceSource, PriceSource};

use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn run_pipeline(balances: &[RawBalance], prices: &PriceTable) -> Vec<ValuedRow> {
    valuate_all(format_all(select_and_order(balances)), prices)
}

pub fn to_wallet_rows(rows: &[ValuedRow]) -> Vec<WalletRow> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| WalletRow::from_valued(row, index))
        .collect()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineRuns {
    pub selections: usize,
    pub valuations: usize,
}

#[derive(Debug, Default)]
pub struct WalletPipeline {
    formatted: Option<(Vec<RawBalance>, Vec<FormattedBalance>)>,
    valued: Option<(PriceTable, Vec<ValuedRow>)>,
    runs: PipelineRuns,
}

impl WalletPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&mut self, balances: &[RawBalance], prices: &PriceTable) -> &[ValuedRow] {
        let balances_changed = match &self.formatted {
            Some((cached, _)) => cached.as_slice() != balances,
            None => true,
        };
        if balances_changed {
            let formatted = format_all(select_and_order(balances));
            self.formatted = Some((balances.to_vec(), formatted));
            self.valued = None;
            self.runs.selections += 1;
        }

        let prices_changed = match &self.valued {
            Some((cached, _)) => cached != prices,
            None => true,
        };
        if prices_changed {
            let formatted = self
                .formatted
                .as_ref()
                .map(|(_, formatted)| formatted.clone())
                .unwrap_or_default();
            self.valued = Some((prices.clone(), valuate_all(formatted, prices)));
            self.runs.valuations += 1;
        }

        match &self.valued {
            Some((_, rows)) => rows.as_slice(),
            None => &[],
        }
    }

    pub fn runs(&self) -> PipelineRuns {
        self.runs
    }
}

pub fn run_pipeline_from_sources<Balances: BalanceSource, Prices: PriceSource>(
    balances: &Balances,
    prices: &Prices,
) -> anyhow::Result<Vec<WalletRow>> {
    let balances = balances.balances()?;
    let prices = prices.prices()?;
    tracing::info!(
        "Loaded {:?} balances and {:?} prices",
        balances.len(),
        prices.len()
    );

    let rows = run_pipeline(&balances, &prices);
    Ok(to_wallet_rows(&rows))
}

pub fn run_pipeline_from_config(config: &PipelineConfig) -> anyhow::Result<Vec<WalletRow>> {
    let balances = FileBalanceSource::new(config.balances_path.clone());
    let prices = FilePriceSource::new(config.prices_path.clone());
    let rows = run_pipeline_from_sources(&balances, &prices)?;

    match &config.output_path {
        Some(path) => {
            write_rows(&rows, path)?;
            tracing::info!("Written {:?} rows to {:?}", rows.len(), path);
        }
        None => {
            for row in rows.iter() {
                tracing::info!("{}", render_row(row));
            }
        }
    }

    Ok(rows)
}

fn write_rows(rows: &[WalletRow], path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create output file {path}", path = path.display()))?;
    let mut file = BufWriter::new(file);
    for row in rows.iter() {
        serde_json::to_writer(&mut file, row)?;
        file.write_all(b"\n")?;
    }
    file.flush()?;
    Ok(())
}
