use std::time::Duration;

pub mod assets;
pub mod component;
pub mod entity;
pub mod host;
pub mod local;
pub mod resource;
pub mod system;

/// Length of one host tick.
pub const TICK_DURATION: Duration = Duration::from_millis(50);
