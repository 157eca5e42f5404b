use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stores user-configurable application preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    /// Trailing window, in days, used for category analytics. The weekly
    /// spending summary always uses 7.
    #[serde(default = "Config::default_analytics_window_days")]
    pub analytics_window_days: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for stored data. Defaults to
    /// `~/Documents/Mensa`.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            analytics_window_days: Self::default_analytics_window_days(),
            data_root: None,
        }
    }
}

impl Config {
    pub fn default_analytics_window_days() -> u32 {
        30
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("Mensa")
    }
}
