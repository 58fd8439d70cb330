use crate::balance::{FormattedBalance, ValuedRow};
use crate::pipeline_utils::prices::PriceTable;

pub fn usd_value(amount: f64, price: Option<f64>) -> f64 {
    amount * price.unwrap_or(f64::NAN)
}

pub fn valuate_all(balances: Vec<FormattedBalance>, prices: &PriceTable) -> Vec<ValuedRow> {
    balances
        .into_iter()
        .map(|balance| {
            let price = prices.get(&balance.balance.currency);
            if price.is_none() {
                tracing::debug!("no price for currency {:?}", balance.balance.currency);
            }
            ValuedRow {
                usd_value: usd_value(balance.balance.amount, price),
                balance,
            }
        })
        .collect()
}
