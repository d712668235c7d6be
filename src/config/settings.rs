//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use super::constants::{DEFAULT_ANALYSIS_STEP_DELAY_MS, DEFAULT_DATA_DIR};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory backing the JSON key-value store
    pub data_dir: PathBuf,
    /// Delay between scripted analysis progress checkpoints
    pub analysis_step_delay: Duration,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_dir = env::var("CONSTRUCTPRO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        let step_delay_ms = env::var("CONSTRUCTPRO_ANALYSIS_STEP_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ANALYSIS_STEP_DELAY_MS);

        Self {
            data_dir,
            analysis_step_delay: Duration::from_millis(step_delay_ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            analysis_step_delay: Duration::from_millis(DEFAULT_ANALYSIS_STEP_DELAY_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_constants() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(
            config.analysis_step_delay,
            Duration::from_millis(DEFAULT_ANALYSIS_STEP_DELAY_MS)
        );
    }
}
