use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::builder::TimerBuilder;
use crate::errors::{Error, Result};

/// Timer settings as they appear in a host's config file:
///
/// ```json
/// { "ticks_per_second": 20.0, "timescale": 1.0, "max_tick_count": 100 }
/// ```
///
/// Only `ticks_per_second` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimerConfig {
    pub ticks_per_second: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timescale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tick_count: Option<u32>,
}

impl TimerConfig {
    pub fn new(ticks_per_second: f64) -> Self {
        TimerConfig {
            ticks_per_second,
            timescale: None,
            max_tick_count: None,
        }
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let input = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&input)
    }

    pub fn to_builder(&self) -> TimerBuilder {
        let mut builder = TimerBuilder::new().ticks_per_second(self.ticks_per_second);
        if let Some(timescale) = self.timescale {
            builder = builder.timescale(timescale);
        }
        if let Some(max_tick_count) = self.max_tick_count {
            builder = builder.max_tick_count(max_tick_count);
        }
        builder
    }
}
