//! Link Layer Configuration
//!
//! Request-level policy lives here, never in the period engine: the engine
//! accepts any duration of at least one unit, and each deployment decides how
//! much work a single report request may ask for.
//!
//! ## Example
//!
//! ```json
//! {
//!   "default_granularity": "day",
//!   "base_path": "/api/period",
//!   "max_durations": { "minute": 120, "day": 31 }
//! }
//! ```
//!
//! Every field is optional. Granularities missing from `max_durations` keep
//! the caps in [`DEFAULT_MAX_DURATIONS`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use voltwatch_core::Granularity;

use crate::errors::LinkResult;

/// URL prefix for generated hrefs
pub const DEFAULT_BASE_PATH: &str = "/period";

lazy_static::lazy_static! {
    /// Largest duration a single request may ask for, per granularity
    ///
    /// Sized so that the finest useful report (one day of minutes, one hour
    /// of seconds, one second of instants) fits in one request.
    pub static ref DEFAULT_MAX_DURATIONS: BTreeMap<Granularity, u32> = [
        (Granularity::Instant, 1000),
        (Granularity::Second, 3600),
        (Granularity::Minute, 1440),
        (Granularity::Hour, 744),
        (Granularity::TimeOfDay, 124),
        (Granularity::Day, 366),
        (Granularity::Week, 260),
        (Granularity::Month, 120),
        (Granularity::Quarter, 40),
        (Granularity::Year, 50),
        (Granularity::FiveYear, 10),
    ]
    .into_iter()
    .collect();
}

/// Request and link settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Used when the request's granularity token is missing or unknown
    pub default_granularity: Granularity,

    /// Per-granularity overrides of [`DEFAULT_MAX_DURATIONS`]
    pub max_durations: BTreeMap<Granularity, u32>,

    /// Prefix for every generated href, without trailing slash
    pub base_path: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            default_granularity: Granularity::Day,
            max_durations: DEFAULT_MAX_DURATIONS.clone(),
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

impl LinkConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> LinkResult<Self> {
        let mut config: LinkConfig = serde_json::from_str(json)?;
        config.base_path = config.base_path.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Read and parse a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> LinkResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Request cap for `granularity`
    pub fn max_duration(&self, granularity: Granularity) -> u32 {
        self.max_durations
            .get(&granularity)
            .or_else(|| DEFAULT_MAX_DURATIONS.get(&granularity))
            .copied()
            .unwrap_or(u32::MAX)
    }
}
