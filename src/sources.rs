use crate::balance::RawBalance;
use crate::pipeline_utils::prices::{PriceRecord, PriceTable};

use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;

pub trait BalanceSource {
    fn balances(&self) -> anyhow::Result<Vec<RawBalance>>;
}

pub trait PriceSource {
    fn prices(&self) -> anyhow::Result<PriceTable>;
}

impl BalanceSource for Vec<RawBalance> {
    fn balances(&self) -> anyhow::Result<Vec<RawBalance>> {
        Ok(self.clone())
    }
}

impl PriceSource for PriceTable {
    fn prices(&self) -> anyhow::Result<PriceTable> {
        Ok(self.clone())
    }
}

pub fn read_balances<R: BufRead>(reader: R) -> anyhow::Result<Vec<RawBalance>> {
    let mut balances = vec![];
    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let balance: RawBalance = serde_json::from_str(&line)
            .with_context(|| format!("Cannot parse balance at line {}", line_number + 1))?;
        balances.push(balance);
    }
    Ok(balances)
}

pub fn read_price_records<R: Read>(reader: R) -> anyhow::Result<Vec<PriceRecord>> {
    let records: Vec<PriceRecord> = serde_json::from_reader(reader)?;
    Ok(records)
}

pub struct FileBalanceSource {
    path: PathBuf,
}

impl FileBalanceSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl BalanceSource for FileBalanceSource {
    fn balances(&self) -> anyhow::Result<Vec<RawBalance>> {
        let file = File::open(&self.path).with_context(|| {
            format!(
                "Cannot read balances file {path}",
                path = self.path.display()
            )
        })?;
        read_balances(BufReader::new(file)).with_context(|| {
            format!(
                "Cannot read balances file {path}",
                path = self.path.display()
            )
        })
    }
}

pub struct FilePriceSource {
    path: PathBuf,
}

impl FilePriceSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PriceSource for FilePriceSource {
    fn prices(&self) -> anyhow::Result<PriceTable> {
        let file = File::open(&self.path).with_context(|| {
            format!("Cannot read prices file {path}", path = self.path.display())
        })?;
        let records = read_price_records(BufReader::new(file)).with_context(|| {
            format!("Cannot read prices file {path}", path = self.path.display())
        })?;
        tracing::debug!("{:?} price records in {:?}", records.len(), self.path);
        Ok(PriceTable::from_records(records))
    }
}

#[cfg(test)]
mod tests {
    use crate::balance::RawBalance;
    use crate::sources::{read_balances, read_price_records, BalanceSource, FileBalanceSource};
    use std::path::PathBuf;

    #[test]
    fn reads_json_lines() {
        let input = r#"{"currency": "ATOM", "amount": -5, "blockchain": "Osmosis"}

{"currency": "ETH", "amount": 3.5, "blockchain": "Ethereum"}
"#;
        let balances = read_balances(input.as_bytes()).unwrap();
        assert_eq!(
            balances,
            vec![
                RawBalance::new("ATOM", -5.0, "Osmosis"),
                RawBalance::new("ETH", 3.5, "Ethereum"),
            ]
        );
    }

    #[test]
    fn reports_bad_line() {
        let input = "{\"currency\": \"ATOM\", \"amount\": -5, \"blockchain\": \"Osmosis\"}\n{\"currency\": \"ETH\"}\n";
        let err = read_balances(input.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
    }

    #[test]
    fn reads_price_records() {
        let input = r#"[{"currency": "ATOM", "date": "2023-08-29T07:10:50.000Z", "price": 7.18}]"#;
        let records = read_price_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].currency, "ATOM");
        assert_eq!(records[0].price, 7.18);
    }

    #[test]
    fn missing_file_is_an_error() {
        let source = FileBalanceSource::new(PathBuf::from("/nonexistent/balances.jsonl"));
        let err = source.balances().unwrap_err();
        assert!(err.to_string().contains("Cannot read balances file"), "{}", err);
    }
}
