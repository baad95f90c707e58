use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored sections with indented JSON
    Pretty,
    /// One machine-readable JSON document
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::Pretty,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".jwtpeek").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_pretty_output() {
        assert_eq!(Config::default().output, OutputFormat::Pretty);
    }

    #[test]
    fn round_trips_through_json() {
        let config = Config {
            output: OutputFormat::Json,
        };
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(text, r#"{"output":"json"}"#);

        let back: Config = serde_json::from_str(&text).unwrap();
        assert_eq!(back.output, OutputFormat::Json);
    }
}
