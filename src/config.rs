//! Runtime configuration
//!
//! Everything about the board and window is fixed in `core::constants`.
//! The few knobs that are useful while playing or debugging are read from
//! the environment: a shuffle seed and an alternate font path.

use std::env;

use anyhow::Context;

use crate::core::FONT_PATH;

pub const SEED_VAR: &str = "SLIDING_TILES_SEED";
pub const FONT_VAR: &str = "SLIDING_TILES_FONT";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Fixed shuffle seed, entropy when `None`
    pub seed: Option<u64>,
    pub font_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            font_path: FONT_PATH.to_string(),
        }
    }
}

impl Config {
    /// Read overrides from the process environment, logging and skipping bad values
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(raw) = lookup(SEED_VAR) {
            match parse_seed(&raw) {
                Ok(seed) => config.seed = Some(seed),
                Err(e) => log::warn!("ignoring {}: {:#}", SEED_VAR, e),
            }
        }

        if let Some(path) = lookup(FONT_VAR).filter(|p| !p.trim().is_empty()) {
            config.font_path = path;
        }

        config
    }
}

fn parse_seed(raw: &str) -> anyhow::Result<u64> {
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("invalid seed {:?}", raw))
}
