//! Settings for a tip screen.
//!
//! Values are layered, later sources winning:
//! - built-in defaults (a 20.00 price, a stepper step of 1, a replay depth of 3)
//! - a TOML file
//! - environment variables prefixed with `TIPVIEW_`, e.g.
//!   `TIPVIEW_PRICE_BEFORE_TIP=35.5`

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TipError};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TipConfig {
    /// Fixed price the tip is a percentage of
    #[serde(default = "default_price_before_tip")]
    pub price_before_tip: f64,

    /// Increment applied per stepper press
    #[serde(default = "default_stepper_step")]
    pub stepper_step: f64,

    /// How many past values a replay buffer hands to late subscribers
    #[serde(default = "default_replay_capacity")]
    pub replay_capacity: usize,
}

fn default_price_before_tip() -> f64 {
    20.0
}

fn default_stepper_step() -> f64 {
    1.0
}

fn default_replay_capacity() -> usize {
    3
}

impl Default for TipConfig {
    fn default() -> Self {
        TipConfig {
            price_before_tip: default_price_before_tip(),
            stepper_step: default_stepper_step(),
            replay_capacity: default_replay_capacity(),
        }
    }
}

impl TipConfig {
    const ENV_PREFIX: &'static str = "TIPVIEW_";

    /// Defaults, then the TOML file at `path` (if it exists), then the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: TipConfig = Figment::new()
            .merge(Serialized::defaults(TipConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(Self::ENV_PREFIX))
            .extract()
            .map_err(Box::new)?;

        debug!("loaded tip config from {}: {:?}", path.as_ref().display(), config);
        Ok(config)
    }

    /// Defaults overlaid with an in-memory TOML document. The environment is ignored.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Figment::new()
            .merge(Serialized::defaults(TipConfig::default()))
            .merge(Toml::string(toml))
            .extract()
            .map_err(|e| TipError::Config(Box::new(e)))
    }
}
