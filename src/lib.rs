//! Reactive tip calculator built on view-ports
//!
//! A [`TipCalculator`](tip::TipCalculator) keeps a fixed price and a tip amount
//! and publishes two strings derived from them: the formatted amount and the
//! tip as a percentage of the price.
//!
//! The plumbing underneath is small and general:
//! *Views* are accessor-interfaces that define their update message.
//! *Observers* register on a *Port* to be reset with the view and notified
//! whenever it changes.
//! *Buffers* own a value and publish it; *Projections* derive new views
//! from existing ones and keep them up to date.
//!
//!# Examples
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use tipview::tip::TipCalculator;
//!
//! let mut calc = TipCalculator::new(20.0).unwrap();
//!
//! let label = Arc::new(Mutex::new(String::new()));
//! let l = label.clone();
//! let _sub = calc
//!     .observe_percentage_text()
//!     .subscribe(move |text| *l.lock().unwrap() = text);
//!
//! assert_eq!(*label.lock().unwrap(), "0.00 %");
//!
//! calc.set_tip_amount(4.0);
//! assert_eq!(*label.lock().unwrap(), "20.00 %");
//! assert_eq!(calc.amount_text(), "Tip Amount: $4.00");
//! ```

#[macro_use]
extern crate log;

pub mod buffer;
pub mod config;
pub mod error;
pub mod projection;
pub mod tip;
pub mod view;

pub use {
    config::TipConfig,
    error::{Result, TipError},
    tip::{DerivedDisplay, TipCalculator, TipDisplayDelegate},
};
