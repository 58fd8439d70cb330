use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawBalance {
    pub currency: String,
    pub amount: f64,
    pub blockchain: String,
}

impl RawBalance {
    pub fn new(currency: impl Into<String>, amount: f64, blockchain: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount,
            blockchain: blockchain.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormattedBalance {
    #[serde(flatten)]
    pub balance: RawBalance,
    pub formatted: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValuedRow {
    #[serde(flatten)]
    pub balance: FormattedBalance,
    pub usd_value: f64,
}

impl ValuedRow {
    pub fn currency(&self) -> &str {
        &self.balance.balance.currency
    }

    pub fn amount(&self) -> f64 {
        self.balance.balance.amount
    }

    pub fn formatted(&self) -> &str {
        &self.balance.formatted
    }

    // currency alone is not unique across chains
    pub fn row_key(&self, index: usize) -> String {
        format!("{}-{}", self.currency(), index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anomaly {
    #[serde(rename = "unavailable")]
    Unavailable,
    #[serde(rename = "Infinity")]
    Infinity,
    #[serde(rename = "-Infinity")]
    NegativeInfinity,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UsdValue {
    Priced(f64),
    Anomaly(Anomaly),
}

impl UsdValue {
    pub fn from_valuation(value: f64) -> Self {
        if value.is_nan() {
            UsdValue::Anomaly(Anomaly::Unavailable)
        } else if value == f64::INFINITY {
            UsdValue::Anomaly(Anomaly::Infinity)
        } else if value == f64::NEG_INFINITY {
            UsdValue::Anomaly(Anomaly::NegativeInfinity)
        } else {
            UsdValue::Priced(value)
        }
    }

    pub fn is_priced(&self) -> bool {
        matches!(self, UsdValue::Priced(_))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRow {
    pub key: String,
    pub amount: f64,
    pub usd_value: UsdValue,
    pub formatted_amount: String,
}

impl WalletRow {
    pub fn from_valued(row: &ValuedRow, index: usize) -> Self {
        Self {
            key: row.row_key(index),
            amount: row.amount(),
            usd_value: UsdValue::from_valuation(row.usd_value),
            formatted_amount: row.formatted().to_string(),
        }
    }
}

pub fn render_row(row: &WalletRow) -> String {
    let usd = match row.usd_value {
        UsdValue::Priced(value) => format!("${value:.2}"),
        UsdValue::Anomaly(Anomaly::Unavailable) => String::from("—"),
        UsdValue::Anomaly(Anomaly::Infinity) => String::from("$Infinity"),
        UsdValue::Anomaly(Anomaly::NegativeInfinity) => String::from("$-Infinity"),
    };
    format!("{}: {} ({})", row.key, row.formatted_amount, usd)
}
