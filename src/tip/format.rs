//! Text shown next to the stepper.
//!
//! Both strings use two decimals, trailing zeros included. Each one is
//! rounded from the full-precision value, never from the other string.

pub fn format_amount(tip_amount: f64) -> String {
    format!("Tip Amount: ${:.2}", tip_amount)
}

/// `tip_amount` as a percentage of `price_before_tip`.
///
/// A zero price is not guarded here and yields `inf`, `-inf` or `NaN`.
pub fn format_percentage(tip_amount: f64, price_before_tip: f64) -> String {
    let percent = tip_amount / price_before_tip * 100.0;
    format!("{:.2} %", percent)
}

/// Both derived strings for one `(tip_amount, price_before_tip)` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedDisplay {
    pub amount_text: String,
    pub percentage_text: String,
}

impl DerivedDisplay {
    pub fn compute(tip_amount: f64, price_before_tip: f64) -> Self {
        DerivedDisplay {
            amount_text: format_amount(tip_amount),
            percentage_text: format_percentage(tip_amount, price_before_tip),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_always_has_two_decimals() {
        assert_eq!(format_amount(0.0), "Tip Amount: $0.00");
        assert_eq!(format_amount(4.0), "Tip Amount: $4.00");
        assert_eq!(format_amount(3.333), "Tip Amount: $3.33");
        assert_eq!(format_amount(12.5), "Tip Amount: $12.50");
    }

    #[test]
    fn percentage_of_twenty() {
        assert_eq!(format_percentage(0.0, 20.0), "0.00 %");
        assert_eq!(format_percentage(4.0, 20.0), "20.00 %");
        assert_eq!(format_percentage(5.0, 20.0), "25.00 %");
        assert_eq!(format_percentage(20.0, 20.0), "100.00 %");
    }

    #[test]
    fn rounding_is_independent() {
        let display = DerivedDisplay::compute(3.333, 20.0);
        assert_eq!(display.amount_text, "Tip Amount: $3.33");
        // 3.33 / 20 would give 16.65
        assert_eq!(display.percentage_text, "16.67 %");
    }

    #[test]
    fn percentage_matches_direct_formula() {
        for (tip, price) in [(1.0, 3.0), (2.5, 7.25), (0.01, 20.0), (99.0, 0.5)] {
            let expected = format!("{:.2} %", tip / price * 100.0);
            assert_eq!(format_percentage(tip, price), expected);
        }
    }

    #[test]
    fn zero_price_is_not_finite() {
        assert_eq!(format_percentage(5.0, 0.0), "inf %");
        assert_eq!(format_percentage(-5.0, 0.0), "-inf %");
        assert_eq!(format_percentage(0.0, 0.0), "NaN %");
    }

    #[test]
    fn negative_tip_flows_through() {
        assert_eq!(format_amount(-2.0), "Tip Amount: $-2.00");
        assert_eq!(format_percentage(-2.0, 20.0), "-10.00 %");
    }
}
