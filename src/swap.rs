use crate::pipeline_utils::prices::PriceTable;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub symbol: String,
    pub price: Option<f64>,
}

impl Token {
    pub fn new(symbol: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            price,
        }
    }

    pub fn from_table(symbol: &str, prices: &PriceTable) -> Self {
        Self::new(symbol, prices.get(symbol))
    }
}

fn parse_amount(amount: &str) -> Option<f64> {
    let amount = amount.trim();
    if amount.is_empty() {
        return None;
    }
    amount.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

fn usable_price(price: Option<f64>) -> Option<f64> {
    price.filter(|price| *price != 0.0 && price.is_finite())
}

pub fn quote(input_amount: &str, input_price: Option<f64>, output_price: Option<f64>) -> Option<f64> {
    let input_price = usable_price(input_price)?;
    let output_price = usable_price(output_price)?;
    let amount = parse_amount(input_amount)?;
    Some(amount * input_price / output_price)
}

pub fn token_amount(input_amount: &str, input: &Token, output: &Token) -> Option<f64> {
    quote(input_amount, input.price, output.price)
}

pub fn format_quote(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

pub fn exchange_rate_label(sell: &Token, buy: &Token) -> Option<String> {
    let sell_price = usable_price(sell.price)?;
    let buy_price = usable_price(buy.price)?;
    Some(format!(
        "1 {} = {} {}",
        sell.symbol,
        format_quote(sell_price / buy_price, 6),
        buy.symbol
    ))
}

pub fn can_swap(sell_amount: &str, buy_amount: &str) -> bool {
    matches!(
        (parse_amount(sell_amount), parse_amount(buy_amount)),
        (Some(sell), Some(buy)) if sell > 0.0 && buy > 0.0
    )
}
