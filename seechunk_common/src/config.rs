use crate::{
    border::{
        is_valid_step,
        VerticalFan,
    },
    particle::BrushKind,
    read_ron_file,
};
use log::warn;
use serde::{
    Deserialize,
    Serialize,
};
use std::path::Path;
use thiserror::Error;

#[derive(Error, PartialEq, Debug)]
pub enum ConfigError {
    #[error("step {0} must divide the chunk size (16) with no remainder")]
    InvalidStep(i32),
    #[error("vertical margin must be positive, got {0}")]
    InvalidMargin(f32),
    #[error("tick interval must be at least 1")]
    ZeroInterval,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(default)]
pub struct SeeChunkConfig {
    /// Space between each particle in a line.
    pub step: i32,
    /// Height above the member's feet a border is created at.
    ///
    /// Every redraw places the border by `y_levels` and `y_margin` around the
    /// member's current height, so this never shows up in drawn particles.
    pub y_offset: f32,
    /// How many borders are stacked vertically. Expected to be even.
    pub y_levels: u32,
    /// Space between two stacked borders.
    pub y_margin: f32,
    /// Ticks between redraws.
    pub tick_interval: u32,
    pub brush: BrushKind,
}

impl Default for SeeChunkConfig {
    fn default() -> Self {
        Self {
            step: 2,
            y_offset: 0.8,
            y_levels: 4,
            y_margin: 5.0,
            tick_interval: 5,
            brush: BrushKind::Dust,
        }
    }
}

impl SeeChunkConfig {
    /// Blocking IO, must not be used directly in async
    pub fn load(path: impl AsRef<Path> + std::fmt::Debug) -> Result<Self, anyhow::Error> {
        let config: Self = read_ron_file(path)?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_step(self.step) {
            return Err(ConfigError::InvalidStep(self.step));
        }

        if !(self.y_margin > 0.0) {
            return Err(ConfigError::InvalidMargin(self.y_margin));
        }

        if self.tick_interval == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        if self.y_levels % 2 != 0 {
            warn!(
                "odd y_levels ({}), borders will not be centered around the player",
                self.y_levels
            );
        }

        Ok(())
    }

    pub fn fan(&self) -> VerticalFan {
        VerticalFan {
            levels: self.y_levels,
            margin: self.y_margin,
        }
    }
}
