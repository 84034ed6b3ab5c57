// main.rs - Window for the toroidal Game of Life
// The engine lives in the `conway` crate; this binary only paces and draws it.

use std::time::{Duration, Instant};

use conway::{PATTERNS, SimulationController};
use eframe::egui;
use egui::Color32;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config; // Window size, cell size and tick rate
mod ui;     // eframe::App impl: input routing and drawing

use config::DisplayConfig;

fn main() -> Result<(), eframe::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = DisplayConfig::from_env();
    let app = match GameOfLife::new(&config) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, ?config, "cannot build the simulation");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.canvas_width as f32, config.canvas_height as f32])
            .with_resizable(false),
        ..Default::default()
    };

    info!(?config, "opening window");
    eframe::run_native(&config.title, options, Box::new(|_cc| Box::new(app)))
        .inspect_err(|e| error!(error = %e, "window closed with an error"))
}

/// The window's state: the engine plus what's needed to pace and draw it
pub struct GameOfLife {
    pub sim: SimulationController,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub background: Color32,
    /// Index into `PATTERNS` used when the random world is switched off
    pub selected_pattern: usize,
}

impl GameOfLife {
    pub fn new(config: &DisplayConfig) -> conway::Result<Self> {
        let sim = SimulationController::new(config.canvas_width, config.canvas_height, config.cell_size)?;
        Ok(Self {
            sim,
            last_update: Instant::now(),
            update_interval: config.tick_interval(),
            live_color: Color32::WHITE,
            background: Color32::BLACK,
            selected_pattern: 0,
        })
    }

    /// Step through the built-in patterns and lay the new one down
    pub fn cycle_pattern(&mut self, delta: isize) {
        let count = PATTERNS.len() as isize;
        self.selected_pattern = (self.selected_pattern as isize + delta).rem_euclid(count) as usize;
        self.apply_selected_pattern();
    }

    /// The custom world is redrawn whenever the grid is rebuilt
    pub fn apply_selected_pattern(&mut self) {
        if !self.sim.random_seed() {
            self.sim.place_pattern(&PATTERNS[self.selected_pattern]);
        }
    }

    pub fn resize_cells(&mut self, delta: i64) {
        if let Err(e) = self.sim.set_cell_size(delta) {
            error!(error = %e, "cell size change failed");
            return;
        }
        self.apply_selected_pattern();
    }

    pub fn toggle_random_world(&mut self) {
        self.sim.toggle_random_seed();
        if self.sim.random_seed() {
            // Back to a blank board until the random fill on start
            self.sim.initialize_from(&[]);
        } else {
            self.apply_selected_pattern();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::Mode;

    fn app() -> GameOfLife {
        GameOfLife::new(&DisplayConfig::default()).unwrap()
    }

    #[test]
    fn custom_world_follows_the_selected_pattern() {
        let mut app = app();
        app.toggle_random_world();
        assert!(!app.sim.random_seed());
        assert_eq!(app.sim.grid().live_count(), PATTERNS[0].cells.len());

        app.cycle_pattern(-1);
        assert_eq!(app.selected_pattern, PATTERNS.len() - 1);
        assert_eq!(app.sim.grid().live_count(), PATTERNS[PATTERNS.len() - 1].cells.len());
    }

    #[test]
    fn resizing_redraws_the_custom_world() {
        let mut app = app();
        app.toggle_random_world();
        app.cycle_pattern(1);
        app.resize_cells(5);
        assert_eq!(app.sim.cell_size(), 15);
        assert_eq!(app.sim.grid().live_count(), PATTERNS[1].cells.len());
    }

    #[test]
    fn random_world_starts_blank() {
        let mut app = app();
        app.toggle_random_world();
        app.toggle_random_world();
        assert!(app.sim.random_seed());
        assert_eq!(app.sim.grid().live_count(), 0);
        assert_eq!(app.sim.mode(), Mode::Configuring);
    }
}
