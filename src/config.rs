use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Path value meaning standard input or output
pub const STDIO: &str = "-";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// File with one NMEA sentence per line, or "-" for stdin
    #[serde(default = "default_stdio")]
    pub input: String,
    /// File receiving one JSON document per message, or "-" for stdout
    #[serde(default = "default_stdio")]
    pub output: String,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub logging: LogConfig,
    #[serde(default = "default_metrics_interval")]
    pub metrics_interval_seconds: u64,
}

fn default_stdio() -> String {
    STDIO.to_string()
}

fn default_metrics_interval() -> u64 {
    60
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Directory where log files will be stored
    pub directory: String,
    /// Log file name prefix (date will be appended)
    pub file_prefix: String,
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: "./logs".to_string(),
            file_prefix: "ais_router".to_string(),
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilterConfig {
    /// Message ids to pass on. Empty accepts every type.
    #[serde(default)]
    pub message_types: HashSet<u8>,
    /// MMSIs to pass on. Empty accepts every station.
    #[serde(default)]
    pub user_ids: HashSet<u32>,
}

impl FilterConfig {
    /// Check if a message should be accepted based on its type and source MMSI
    /// Returns true when both lists are empty or contain the value
    pub fn should_accept(&self, msgid: u8, userid: u32) -> bool {
        (self.message_types.is_empty() || self.message_types.contains(&msgid))
            && (self.user_ids.is_empty() || self.user_ids.contains(&userid))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: default_stdio(),
            output: default_stdio(),
            filter: FilterConfig::default(),
            logging: LogConfig::default(),
            metrics_interval_seconds: default_metrics_interval(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn metrics_interval(&self) -> Duration {
        Duration::from_secs(self.metrics_interval_seconds)
    }
}
