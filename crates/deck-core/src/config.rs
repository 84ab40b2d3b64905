//! Controls configuration

use std::path::Path;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::navigation::{Direction, NavKey};

/// Errors that can occur while loading the controls configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No navigation keys are bound")]
    EmptyBindings,

    #[error("Key {0:?} is bound to both advance and retreat")]
    ConflictingBinding(NavKey),
}

/// Keys bound to each navigation direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Keys that move to the next slide
    #[serde(default)]
    pub advance: Vec<NavKey>,

    /// Keys that move to the previous slide
    #[serde(default)]
    pub retreat: Vec<NavKey>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            advance: vec![NavKey::Space, NavKey::ArrowRight],
            retreat: vec![NavKey::ArrowLeft],
        }
    }
}

impl KeyBindings {
    /// Direction a key is bound to, if any
    pub fn direction_of(&self, key: NavKey) -> Option<Direction> {
        if self.advance.contains(&key) {
            Some(Direction::Forward)
        } else if self.retreat.contains(&key) {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.advance.is_empty() && self.retreat.is_empty() {
            return Err(ConfigError::EmptyBindings);
        }

        match self.advance.iter().find(|key| self.retreat.contains(key)) {
            Some(key) => Err(ConfigError::ConflictingBinding(*key)),
            None => Ok(()),
        }
    }
}

/// Configuration for the navigation controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsConfig {
    /// Keyboard bindings
    #[serde(default)]
    pub bindings: KeyBindings,
}

impl ControlsConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ControlsConfig = serde_json::from_str(json)?;
        config.bindings.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load a configuration file, falling back to the defaults when it is
    /// missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No controls config at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                tracing::info!("Loaded controls config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring controls config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
