//! Runtime settings for the `pgcast` binary.
//! The library has no configuration of its own: the native catalog is fixed at compile time.

use serde::{Deserialize, Serialize};

pub const OUTPUT_ENV: &str = "PGCAST_OUTPUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliConfig {
    pub output: OutputFormat,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from an arbitrary variable source; unknown values fall back to defaults.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let output = lookup(OUTPUT_ENV).and_then(|v| OutputFormat::parse(&v)).unwrap_or_default();
        CliConfig { output }
    }
}
