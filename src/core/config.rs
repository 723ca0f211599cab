// ============================================================================
// spark-toolkit - Configuration
// Random-source options for shuffle() and sample()
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, ToolkitError};

/// Environment variable read by [`RandomConfig::from_env`].
pub const SEED_ENV_VAR: &str = "SPARK_TOOLKIT_SEED";

/// Options for building a [`Randomizer`](crate::Randomizer).
///
/// With `seed: None` the generator is seeded from OS entropy. With a seed,
/// every shuffle and sample drawn from the same sequence of calls is
/// reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomConfig {
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RandomConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn unseeded() -> Self {
        Self { seed: None }
    }

    /// Reads the seed from `SPARK_TOOLKIT_SEED`.
    ///
    /// A missing variable means unseeded. An unparsable value is logged and
    /// also treated as unseeded.
    pub fn from_env() -> Self {
        let raw = std::env::var(SEED_ENV_VAR).ok();
        match Self::from_env_value(raw.as_deref()) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, var = SEED_ENV_VAR, "ignoring random seed");
                Self::unseeded()
            }
        }
    }

    /// Parses the raw value of the seed variable. Surrounding whitespace is
    /// ignored and an empty value means unseeded.
    pub fn from_env_value(raw: Option<&str>) -> Result<Self> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::unseeded()),
            Some(text) => text
                .parse::<u64>()
                .map(Self::seeded)
                .map_err(|_| ToolkitError::invalid_seed(text)),
        }
    }
}
