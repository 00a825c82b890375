use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rng_source::RngSource;

/// Prefix for environment overrides, e.g. `ROTATION__VERIFY__ROUNDS=10`.
pub const ENV_PREFIX: &str = "ROTATION";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub verify: VerifyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Number of random inputs to rotate with every strategy.
    #[serde(default = "default::rounds")]
    pub rounds: usize,

    /// Upper bound on element sequence lengths.
    #[serde(default = "default::max_len")]
    pub max_len: usize,

    /// Upper bound on packed bit sequence lengths.
    #[serde(default = "default::max_bits")]
    pub max_bits: usize,

    #[serde(default)]
    pub rng: RngSource,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            rounds: default::rounds(),
            max_len: default::max_len(),
            max_bits: default::max_bits(),
            rng: RngSource::default(),
        }
    }
}

mod default {
    pub fn rounds() -> usize {
        1000
    }

    pub fn max_len() -> usize {
        512
    }

    pub fn max_bits() -> usize {
        4096
    }
}

impl Config {
    /// Layers `ROTATION__*` environment variables over an optional file.
    pub fn load(path: Option<&Path>) -> eyre::Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings =
                settings.add_source(config::File::from(path).required(true));
        }

        let settings = settings
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize::<Config>()?)
    }
}
