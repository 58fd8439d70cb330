use crate::balance::{FormattedBalance, RawBalance};

// halves round away from zero; anything that rounds to zero prints as "0", never "-0"
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return String::from("NaN");
    }
    if amount.is_infinite() {
        return if amount.is_sign_positive() {
            String::from("Infinity")
        } else {
            String::from("-Infinity")
        };
    }

    let rounded = amount.round();
    if rounded == 0.0 {
        return String::from("0");
    }
    format!("{rounded:.0}")
}

pub fn format_all(balances: Vec<RawBalance>) -> Vec<FormattedBalance> {
    balances
        .into_iter()
        .map(|balance| FormattedBalance {
            formatted: format_amount(balance.amount),
            balance,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::balance::RawBalance;
    use crate::pipeline_utils::formatter::{format_all, format_amount};

    #[test]
    fn integers() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(-5.0), "-5");
        assert_eq!(format_amount(42.0), "42");
        assert_eq!(format_amount(1234567.0), "1234567");
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(format_amount(0.5), "1");
        assert_eq!(format_amount(1.5), "2");
        assert_eq!(format_amount(2.5), "3");
        assert_eq!(format_amount(-2.5), "-3");
        assert_eq!(format_amount(2.49), "2");
        assert_eq!(format_amount(-7.51), "-8");
    }

    #[test]
    fn no_negative_zero() {
        assert_eq!(format_amount(-0.0), "0");
        assert_eq!(format_amount(-0.4), "0");
        assert_eq!(format_amount(0.4), "0");
    }

    #[test]
    fn large_values_have_no_separators_or_exponent() {
        assert_eq!(format_amount(1e21), "1000000000000000000000");
        assert_eq!(format_amount(-12345678901.2), "-12345678901");
    }

    #[test]
    fn non_finite() {
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(f64::INFINITY), "Infinity");
        assert_eq!(format_amount(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn format_all_preserves_order_and_length() {
        let balances = vec![
            RawBalance::new("A", -1.2, "Osmosis"),
            RawBalance::new("B", -3.7, "Neo"),
            RawBalance::new("C", 0.0, "Neo"),
        ];
        let formatted = format_all(balances.clone());
        assert_eq!(formatted.len(), balances.len());
        for (output, input) in formatted.iter().zip(balances.iter()) {
            assert_eq!(&output.balance, input);
        }
        let strings = formatted
            .iter()
            .map(|balance| balance.formatted.as_str())
            .collect::<Vec<_>>();
        assert_eq!(strings, vec!["-1", "-4", "0"]);
    }
}
