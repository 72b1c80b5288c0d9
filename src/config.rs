use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::matcher::DEFAULT_THRESHOLD;

/// Runtime settings for the finder
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Minimum ingredient count to search, and minimum overlap to match
    #[serde(default = "default_threshold")]
    pub threshold: usize,
    /// Simulated search latency in milliseconds
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,
    /// Delay between slides of the default view in milliseconds
    #[serde(default = "default_slideshow_interval_ms")]
    pub slideshow_interval_ms: u64,
    /// JSON catalog to use instead of the embedded one
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Where the command line tool keeps its session
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            search_delay_ms: default_search_delay_ms(),
            slideshow_interval_ms: default_slideshow_interval_ms(),
            catalog_path: None,
            session_file: default_session_file(),
        }
    }
}

// Default value functions
fn default_threshold() -> usize {
    DEFAULT_THRESHOLD
}

fn default_search_delay_ms() -> u64 {
    1500
}

fn default_slideshow_interval_ms() -> u64 {
    3000
}

fn default_session_file() -> PathBuf {
    PathBuf::from(".recipe-finder-session.json")
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. recipe-finder.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__SEARCH_DELAY_MS
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("recipe-finder").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_FINDER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn slideshow_interval(&self) -> Duration {
        Duration::from_millis(self.slideshow_interval_ms)
    }
}
