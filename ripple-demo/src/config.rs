// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::DemoError;
use serde::Deserialize;
use std::path::Path;

/// Cadence of the scripted user driving the document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub click_every_ms: u64,
    pub mousemove_every_ms: u64,
    /// Mouse moves dispatched back to back on every mousemove tick.
    pub mousemove_burst: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            click_every_ms: 1500,
            mousemove_every_ms: 2500,
            mousemove_burst: 5,
        }
    }
}

/// Delays and periods used by the demos, all in milliseconds.
///
/// Fields missing from a TOML file keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub run_for_ms: u64,
    pub promise_delay_ms: u64,
    pub timer_delay_ms: u64,
    pub clock_interval_ms: u64,
    pub unsubscribe_interval_ms: u64,
    pub unsubscribe_after_ms: u64,
    pub throttle_ms: u64,
    pub debounce_ms: u64,
    pub switch_timer_ms: u64,
    pub breaker_ms: u64,
    pub continuous_interval_ms: u64,
    pub broadcast_delay_ms: u64,
    pub input: InputConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            run_for_ms: 12000,
            promise_delay_ms: 1000,
            timer_delay_ms: 1000,
            clock_interval_ms: 1000,
            unsubscribe_interval_ms: 500,
            unsubscribe_after_ms: 3000,
            throttle_ms: 1000,
            debounce_ms: 1000,
            switch_timer_ms: 1000,
            breaker_ms: 1000,
            continuous_interval_ms: 5000,
            broadcast_delay_ms: 1000,
            input: InputConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from the embedded `demo.toml`.
    pub fn load() -> Result<Self, DemoError> {
        Self::from_toml_str(include_str!("../demo.toml"))
    }

    /// Load configuration from a TOML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DemoError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, DemoError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Periods must be non-zero: a zero-period interval never yields.
    fn validate(&self) -> Result<(), DemoError> {
        let periods = [
            ("clock_interval_ms", self.clock_interval_ms),
            ("unsubscribe_interval_ms", self.unsubscribe_interval_ms),
            ("continuous_interval_ms", self.continuous_interval_ms),
            ("input.click_every_ms", self.input.click_every_ms),
            ("input.mousemove_every_ms", self.input.mousemove_every_ms),
        ];

        match periods.iter().find(|(_, value)| *value == 0) {
            Some((field, _)) => Err(DemoError::ZeroPeriod { field }),
            None => Ok(()),
        }
    }
}
