//! Game configuration.
//!
//! The rules themselves are fixed. What a front end may tune is where the
//! cursor starts and how many frames each kind of animation is given:
//! - `start_column`: tableau column the cursor lands on after a deal
//! - `deal_frames`: frames per card while dealing
//! - `slide_frames`: frames for cancel, auto-move and dragon collection
//! - `undeal_frames`: frames per card in the win teardown

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::board::TABLEAU_COLUMNS;

/// Engine configuration. Defaults match the handheld.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tableau column (0-based) the cursor is reset to after a deal.
    pub start_column: u8,

    /// Frames per dealt card.
    pub deal_frames: u8,

    /// Frames for a single slide (cancel, auto-move, dragon collection).
    pub slide_frames: u8,

    /// Frames per card removed during the win teardown.
    pub undeal_frames: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_column: 5,
            deal_frames: 8,
            slide_frames: 10,
            undeal_frames: 8,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_start_column(mut self, column: u8) -> Self {
        self.start_column = column;
        self
    }

    #[must_use]
    pub fn with_deal_frames(mut self, frames: u8) -> Self {
        self.deal_frames = frames;
        self
    }

    #[must_use]
    pub fn with_slide_frames(mut self, frames: u8) -> Self {
        self.slide_frames = frames;
        self
    }

    #[must_use]
    pub fn with_undeal_frames(mut self, frames: u8) -> Self {
        self.undeal_frames = frames;
        self
    }

    /// Set every frame count to zero. Headless runs skip animation entirely.
    #[must_use]
    pub fn instant(self) -> Self {
        self.with_deal_frames(0).with_slide_frames(0).with_undeal_frames(0)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if usize::from(self.start_column) >= TABLEAU_COLUMNS {
            return Err(ConfigError::StartColumnOutOfRange(self.start_column));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
