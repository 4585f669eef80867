pub mod calculator;
pub mod delegate;
pub mod format;

pub use {
    calculator::TipCalculator,
    delegate::TipDisplayDelegate,
    format::{format_amount, format_percentage, DerivedDisplay},
};
