use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub currency: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub price: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, currency: &str) -> Option<f64> {
        self.prices.get(currency).cloned()
    }

    pub fn insert(&mut self, currency: impl Into<String>, price: f64) {
        self.prices.insert(currency.into(), price);
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // a feed may quote a currency several times; the first quote in feed order is used
    pub fn from_records(records: impl IntoIterator<Item = PriceRecord>) -> Self {
        let mut prices = HashMap::<String, f64>::new();
        for record in records.into_iter() {
            if let Entry::Vacant(entry) = prices.entry(record.currency) {
                entry.insert(record.price);
            }
        }

        Self { prices }
    }
}

impl FromIterator<(String, f64)> for PriceTable {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}
