use std::fmt;
use std::str::FromStr;

use rand::rngs::{SmallRng, StdRng};
use rand::{thread_rng, Rng, SeedableRng};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};

/// Where random test inputs come from. Written as `thread`, `small:<seed>` or
/// `std:<seed>` both on the command line and in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RngSource {
    #[default]
    Thread,
    Small(u64),
    Std(u64),
}

impl RngSource {
    /// Draws one seed per verification round. Seeded sources always yield the
    /// same seeds, so a failing round can be replayed from its seed.
    pub fn round_seeds(self, rounds: usize) -> Vec<u64> {
        match self {
            Self::Thread => draw_seeds(&mut thread_rng(), rounds),
            Self::Small(seed) => {
                draw_seeds(&mut SmallRng::seed_from_u64(seed), rounds)
            }
            Self::Std(seed) => {
                draw_seeds(&mut StdRng::seed_from_u64(seed), rounds)
            }
        }
    }
}

fn draw_seeds<R: Rng>(rng: &mut R, rounds: usize) -> Vec<u64> {
    (0..rounds).map(|_| rng.gen()).collect()
}

impl fmt::Display for RngSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Thread => f.write_str("thread"),
            Self::Small(seed) => write!(f, "small:{seed}"),
            Self::Std(seed) => write!(f, "std:{seed}"),
        }
    }
}

impl FromStr for RngSource {
    type Err = eyre::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "thread" {
            Ok(RngSource::Thread)
        } else if let Some(seed) = s.strip_prefix("small:") {
            Ok(RngSource::Small(seed.parse()?))
        } else if let Some(seed) = s.strip_prefix("std:") {
            Ok(RngSource::Std(seed.parse()?))
        } else {
            Err(eyre::eyre!("Invalid RngSource: {}", s))
        }
    }
}

impl Serialize for RngSource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RngSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
