// src/config.rs
//! Runtime configuration loaded from `kgscore.toml`.

use crate::error::{KgError, Result};
use crate::taxonomy::CyclePolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "kgscore.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Composite weights keyed by metric name (HP, AtP, AP, RTF).
    /// A metric missing from this table is weighted 1.0; an empty table
    /// therefore yields an equal-weight average.
    #[serde(default = "default_weights")]
    pub weights: BTreeMap<String, f64>,

    /// Edge types expected to be one-directional.
    #[serde(default = "default_directional_types")]
    pub directional_types: Vec<String>,

    /// Namespace prefix assigned to bare concept names.
    #[serde(default = "default_namespace")]
    pub default_namespace: String,

    /// What to do when the taxonomy contains a cycle.
    #[serde(default)]
    pub cycle_policy: CyclePolicy,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config, overlaying `kgscore.toml` from the working
    /// directory when present.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        if let Ok(content) = fs::read_to_string(Path::new(CONFIG_FILE)) {
            config.parse_toml(&content);
        }
        config
    }

    /// Overlays settings parsed from TOML content. Unparseable content
    /// leaves the config unchanged.
    pub fn parse_toml(&mut self, content: &str) {
        if let Ok(parsed) = toml::from_str::<Config>(content) {
            *self = parsed;
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error if any weight is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        for (name, w) in &self.weights {
            if !w.is_finite() || *w < 0.0 {
                return Err(KgError::Config(format!(
                    "weight for '{name}' must be a non-negative number, got {w}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: default_weights(),
            directional_types: default_directional_types(),
            default_namespace: default_namespace(),
            cycle_policy: CyclePolicy::default(),
        }
    }
}

fn default_weights() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("HP".to_string(), 0.25),
        ("AtP".to_string(), 0.20),
        ("AP".to_string(), 0.20),
        ("RTF".to_string(), 0.35),
    ])
}

fn default_directional_types() -> Vec<String> {
    vec!["measured-in".to_string(), "for-period".to_string()]
}

fn default_namespace() -> String {
    "us-gaap".to_string()
}
