use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::animation::DEFAULT_TRAIL_LENGTH;
use crate::tle::NamePrefix;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub orbit: OrbitConfig,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub name_prefix: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            name_prefix: None,
        }
    }
}

impl CatalogConfig {
    pub fn prefix(&self) -> Option<NamePrefix> {
        self.name_prefix.as_deref().map(NamePrefix::new)
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("tle.txt")
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_duration", deserialize_with = "deserialize_duration")]
    pub duration: Duration,
    #[serde(default = "default_step", deserialize_with = "deserialize_duration")]
    pub step: Duration,
    #[serde(default = "default_trail_length")]
    pub trail_length: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: default_duration(),
            step: default_step(),
            trail_length: default_trail_length(),
        }
    }
}

fn default_duration() -> Duration {
    Duration::from_secs(3600)
}

fn default_step() -> Duration {
    Duration::from_secs(60)
}

fn default_trail_length() -> usize {
    DEFAULT_TRAIL_LENGTH
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrbitConfig {
    #[serde(default = "default_points")]
    pub points: usize,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            points: default_points(),
        }
    }
}

fn default_points() -> usize {
    100
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yaml reads an empty document as null
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

pub fn parse_duration(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_duration(&s).map_err(serde::de::Error::custom)
}
