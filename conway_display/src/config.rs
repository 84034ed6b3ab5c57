// config.rs - Window and pacing settings, with environment overrides

use std::str::FromStr;
use std::time::Duration;

use conway::DEFAULT_CELL_SIZE;
use tracing::warn;

pub const ENV_CANVAS_WIDTH: &str = "CONWAY_CANVAS_WIDTH";
pub const ENV_CANVAS_HEIGHT: &str = "CONWAY_CANVAS_HEIGHT";
pub const ENV_CELL_SIZE: &str = "CONWAY_CELL_SIZE";
pub const ENV_TPS: &str = "CONWAY_TPS";

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub title: String,
    pub canvas_width: usize,
    pub canvas_height: usize,
    pub cell_size: usize,
    /// Generations per second while running
    pub ticks_per_second: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Game of Life".to_owned(),
            canvas_width: 1200,
            canvas_height: 600,
            cell_size: DEFAULT_CELL_SIZE,
            ticks_per_second: 10,
        }
    }
}

impl DisplayConfig {
    /// Defaults overridden by any `CONWAY_*` variables that parse
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        override_with(&lookup, ENV_CANVAS_WIDTH, &mut config.canvas_width);
        override_with(&lookup, ENV_CANVAS_HEIGHT, &mut config.canvas_height);
        override_with(&lookup, ENV_CELL_SIZE, &mut config.cell_size);
        override_with(&lookup, ENV_TPS, &mut config.ticks_per_second);
        config
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.ticks_per_second.max(1) as u64)
    }
}

fn override_with<T: FromStr + PartialOrd + Default>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    slot: &mut T,
) {
    let Some(raw) = lookup(key) else { return };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => *slot = value,
        _ => warn!(key, value = %raw, "ignoring setting, expected a positive integer"),
    }
}
