use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::factors::EmissionFactors;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub industry: Option<String>,
    pub store_path: Option<PathBuf>,
    pub min_score: Option<u32>,
    /// Partial override: any factor not named falls back to the default table.
    pub factors: Option<EmissionFactors>,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let config: Config =
            toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
        Ok(config)
    }

    pub fn discover() -> Option<Self> {
        let path = Path::new("greenmetric.toml");
        if path.exists() {
            Config::load(path).ok()
        } else {
            None
        }
    }

    pub fn factors(&self) -> EmissionFactors {
        self.factors.clone().unwrap_or_default()
    }
}
