use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::CatalogRules;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rules: CatalogRules,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub fixture: FixtureConfig,
}

/// Terminal UI timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between tick events in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Ticks a notification stays on screen (default: 12).
    #[serde(default = "default_notification_ticks")]
    pub notification_ticks: u32,
}

/// Where the catalog loads its items from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// JSON item file. The builtin sample set is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_notification_ticks() -> u32 {
    12
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            notification_ticks: default_notification_ticks(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
