//! Runtime settings loaded from a TOML file and `QUEUE_SEARCH__*` environment variables.

use crate::duration::{LONG_TRACK_MS, SEEK_POINTS};
use crate::types::DurationLabels;
use crate::{QueueSearchError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `QUEUE_SEARCH__MAX_RESULTS=10`.
pub const ENV_PREFIX: &str = "QUEUE_SEARCH";

/// Limits and wording used by the autocomplete layer and the CLI.
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `QUEUE_SEARCH__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
///
/// # Examples
///
/// ```toml
/// max_results = 10
/// label_limit = 80
///
/// [labels]
/// day = "day"
/// hour = "hour"
/// minute = "minute"
/// second = "second"
/// conjunction = "and"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum number of choices surfaced per autocomplete request
    pub max_results: usize,
    /// Maximum characters of a title shown as a choice
    pub label_limit: usize,
    /// Tracks at least this long (ms) get finer seek steps
    pub long_track_ms: u64,
    /// Number of seek points offered
    pub seek_points: u64,
    /// Unit words for duration rendering
    pub labels: DurationLabels,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_results: 20,
            label_limit: 100,
            long_track_ms: LONG_TRACK_MS,
            seek_points: SEEK_POINTS,
            labels: DurationLabels::default(),
        }
    }
}

impl Settings {
    /// Load settings from an optional TOML file and the environment.
    ///
    /// With `path == None` the file at [`Settings::default_path`] is tried.
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).or_else(Self::default_path);

        let mut builder = ::config::Config::builder();
        if let Some(path) = &path {
            log::debug!("Reading settings from {}", path.display());
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// `$XDG_CONFIG_HOME/queue-search/config.toml` (or the platform equivalent).
    ///
    /// `QUEUE_SEARCH_CONFIG_PATH` overrides the location.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(p) = env::var_os("QUEUE_SEARCH_CONFIG_PATH") {
            return Some(PathBuf::from(p));
        }
        dirs::config_dir().map(|d| d.join("queue-search").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(QueueSearchError::Config(::config::ConfigError::Message(
                "max_results must be >= 1".to_string(),
            )));
        }
        if self.label_limit == 0 {
            return Err(QueueSearchError::Config(::config::ConfigError::Message(
                "label_limit must be >= 1".to_string(),
            )));
        }
        if self.seek_points == 0 {
            return Err(QueueSearchError::Config(::config::ConfigError::Message(
                "seek_points must be >= 1".to_string(),
            )));
        }
        Ok(())
    }
}
