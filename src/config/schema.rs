// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from
//! review-ready.toml.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result, ReviewError};

/// The main configuration structure for review-ready.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReviewConfig {
    /// Diff and analysis settings.
    pub review: ReviewSettings,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl ReviewConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Diff and analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewSettings {
    /// Base branch used when none is given on the command line.
    pub base: String,

    /// Remote whose tracking branches are consulted during ref resolution.
    pub remote: String,

    /// Glob patterns for paths dropped before analysis.
    pub exclude: Vec<String>,
}

impl Default for ReviewSettings {
    fn default() -> Self {
        Self {
            base: "main".to_string(),
            remote: "origin".to_string(),
            exclude: Vec::new(),
        }
    }
}

impl ReviewSettings {
    /// Compile the exclude patterns.
    pub fn exclude_patterns(&self) -> Result<Vec<glob::Pattern>> {
        self.exclude
            .iter()
            .map(|p| {
                glob::Pattern::new(p).map_err(|e| {
                    ReviewError::Config(ConfigError::InvalidValue {
                        key: "review.exclude".to_string(),
                        message: format!("'{}': {}", p, e),
                    })
                })
            })
            .collect()
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,

    /// Whether to use emoji.
    pub emoji: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            emoji: true,
        }
    }
}
