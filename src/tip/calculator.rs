use {
    crate::{
        buffer::singleton::SingletonBuffer,
        config::TipConfig,
        error::{Result, TipError},
        tip::format::{format_amount, format_percentage, DerivedDisplay},
        view::{singleton::SingletonView, OuterViewPort},
    },
};

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
              Tip Calculator
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/
/// Holds a fixed price and a tip amount, and publishes the two display
/// strings derived from them.
///
/// Every call to [`set_tip_amount`](Self::set_tip_amount) republishes both
/// strings synchronously, amount first, then percentage, even when the value
/// did not change. Subscribers of either port get the current text as soon
/// as they subscribe.
pub struct TipCalculator {
    price_before_tip: f64,
    tip_amount: SingletonBuffer<f64>,
    amount_text: OuterViewPort<dyn SingletonView<Item = String>>,
    percentage_text: OuterViewPort<dyn SingletonView<Item = String>>,
}

impl TipCalculator {
    /// Fails with [`TipError::InvalidPrice`] unless the price is positive and finite.
    pub fn new(price_before_tip: f64) -> Result<Self> {
        if !price_before_tip.is_finite() || price_before_tip <= 0.0 {
            return Err(TipError::InvalidPrice(price_before_tip));
        }
        Ok(TipCalculator::build(price_before_tip))
    }

    /// Accepts any price. A zero price makes the percentage text
    /// `inf %`, `-inf %` or `NaN %` instead of failing.
    pub fn new_unchecked(price_before_tip: f64) -> Self {
        if !price_before_tip.is_finite() || price_before_tip <= 0.0 {
            warn!(
                "tip calculator built with price {}, percentages will not be meaningful",
                price_before_tip
            );
        }
        TipCalculator::build(price_before_tip)
    }

    pub fn from_config(config: &TipConfig) -> Result<Self> {
        TipCalculator::new(config.price_before_tip)
    }

    fn build(price_before_tip: f64) -> Self {
        let tip_amount = SingletonBuffer::new(0.0);
        let tip_port = tip_amount.get_port();

        // map order is publication order
        let amount_text = tip_port.map(format_amount);
        let percentage_text = tip_port.map(move |tip| format_percentage(tip, price_before_tip));

        debug!("tip calculator ready, price before tip {}", price_before_tip);
        TipCalculator {
            price_before_tip,
            tip_amount,
            amount_text,
            percentage_text,
        }
    }

    pub fn price_before_tip(&self) -> f64 {
        self.price_before_tip
    }

    pub fn tip_amount(&self) -> f64 {
        self.tip_amount.get()
    }

    /// No validation: negative and non-finite amounts are published as they are.
    pub fn set_tip_amount(&mut self, new_value: f64) {
        debug!("tip amount -> {}", new_value);
        self.tip_amount.set(new_value);
    }

    /// Adds `delta` to the current amount, as one stepper press would.
    pub fn step_by(&mut self, delta: f64) {
        let next = self.tip_amount() + delta;
        self.set_tip_amount(next);
    }

    pub fn amount_text(&self) -> String {
        format_amount(self.tip_amount())
    }

    pub fn percentage_text(&self) -> String {
        format_percentage(self.tip_amount(), self.price_before_tip)
    }

    pub fn display(&self) -> DerivedDisplay {
        DerivedDisplay::compute(self.tip_amount(), self.price_before_tip)
    }

    pub fn tip_amount_port(&self) -> OuterViewPort<dyn SingletonView<Item = f64>> {
        self.tip_amount.get_port()
    }

    pub fn observe_amount_text(&self) -> OuterViewPort<dyn SingletonView<Item = String>> {
        self.amount_text.clone()
    }

    pub fn observe_percentage_text(&self) -> OuterViewPort<dyn SingletonView<Item = String>> {
        self.percentage_text.clone()
    }
}

impl Default for TipCalculator {
    fn default() -> Self {
        TipCalculator::build(TipConfig::default().price_before_tip)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
