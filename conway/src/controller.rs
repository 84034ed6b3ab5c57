// controller.rs - Mode, cell-size policy and seeding around a Grid

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::grid::Grid;
use crate::patterns::Pattern;

pub const MIN_CELL_SIZE: usize = 1;
pub const MAX_CELL_SIZE: usize = 20;
pub const DEFAULT_CELL_SIZE: usize = 10;

/// How many recent fingerprints to remember for settle detection
const HISTORY_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Configuring,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub cell_size: usize,
    pub random_seed: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            random_seed: true,
        }
    }
}

/// Owns the grid and decides when it may be resized, seeded or stepped.
///
/// Starts in [`Mode::Configuring`]. [`start`](Self::start) moves to
/// [`Mode::Running`] for good; configuration calls made after that are
/// ignored.
pub struct SimulationController<R = StdRng> {
    canvas_width: usize,
    canvas_height: usize,
    config: SimulationConfig,
    mode: Mode,
    grid: Grid,
    rng: R,
    generation: u64,
    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
    settled: bool,
}

impl SimulationController<StdRng> {
    pub fn new(canvas_width: usize, canvas_height: usize, initial_cell_size: usize) -> Result<Self> {
        Self::with_rng(canvas_width, canvas_height, initial_cell_size, StdRng::from_entropy())
    }
}

impl<R: Rng> SimulationController<R> {
    /// Like [`new`](SimulationController::new) with a caller-supplied
    /// random source, so seeded runs are reproducible.
    pub fn with_rng(
        canvas_width: usize,
        canvas_height: usize,
        initial_cell_size: usize,
        rng: R,
    ) -> Result<Self> {
        let cell_size = clamp_cell_size(initial_cell_size as i64);
        let (width, height) = grid_dimensions(canvas_width, canvas_height, cell_size);
        let grid = Grid::new(width, height)?;
        info!(canvas_width, canvas_height, cell_size, width, height, "simulation created");

        Ok(Self {
            canvas_width,
            canvas_height,
            config: SimulationConfig { cell_size, ..Default::default() },
            mode: Mode::Configuring,
            grid,
            rng,
            generation: 0,
            grid_history: [0; HISTORY_LEN],
            history_count: 0,
            settled: false,
        })
    }

    /// Grow or shrink cells by `delta`, clamped to
    /// `MIN_CELL_SIZE..=MAX_CELL_SIZE`. The grid is reallocated at the new
    /// dimensions and every cell starts dead.
    pub fn set_cell_size(&mut self, delta: i64) -> Result<()> {
        if !self.configurable("set_cell_size") {
            return Ok(());
        }

        let cell_size = clamp_cell_size((self.config.cell_size as i64).saturating_add(delta));
        let (width, height) = grid_dimensions(self.canvas_width, self.canvas_height, cell_size);
        if let Err(e) = self.grid.allocate(width, height) {
            warn!(cell_size, error = %e, "cell size rejected");
            return Err(e);
        }
        self.config.cell_size = cell_size;
        debug!(cell_size, width, height, "cell size changed");
        Ok(())
    }

    pub fn toggle_random_seed(&mut self) {
        if self.configurable("toggle_random_seed") {
            self.config.random_seed = !self.config.random_seed;
            debug!(random_seed = self.config.random_seed, "random seed toggled");
        }
    }

    /// Custom world: clear the grid and set the listed `(x, y)` cells alive
    pub fn initialize_from(&mut self, cells: &[(usize, usize)]) {
        if self.configurable("initialize_from") {
            self.grid.initialize_from(cells);
        }
    }

    /// Clear the grid and draw `pattern` centred on it
    pub fn place_pattern(&mut self, pattern: &Pattern) {
        if !self.configurable("place_pattern") {
            return;
        }
        let (pw, ph) = pattern.size();
        let left = self.grid.width().saturating_sub(pw) / 2;
        let top = self.grid.height().saturating_sub(ph) / 2;
        let cells: Vec<(usize, usize)> = pattern
            .cells
            .iter()
            .map(|&(x, y)| (left + x, top + y))
            .collect();
        self.grid.initialize_from(&cells);
        debug!(pattern = pattern.name, "pattern placed");
    }

    /// Leave configuration for good. Randomizes the grid first when the
    /// random seed flag is set.
    pub fn start(&mut self) {
        if self.mode == Mode::Running {
            return;
        }
        if self.config.random_seed {
            self.grid.randomize(&mut self.rng);
        }
        self.mode = Mode::Running;
        self.remember(self.grid.fingerprint());
        info!(
            random_seed = self.config.random_seed,
            live = self.grid.live_count(),
            "simulation started"
        );
    }

    /// One generation while running, nothing while configuring
    pub fn tick(&mut self) {
        match self.mode {
            Mode::Configuring => {}
            Mode::Running => {
                self.grid.step();
                self.generation += 1;
                self.record_fingerprint();
            }
        }
    }

    fn record_fingerprint(&mut self) {
        let hash = self.grid.fingerprint();
        let seen = self.grid_history[..self.history_count.min(HISTORY_LEN)].contains(&hash);
        if seen && !self.settled {
            info!(generation = self.generation, "pattern settled");
        }
        self.settled = seen;
        self.remember(hash);
    }

    fn remember(&mut self, hash: u64) {
        self.grid_history[self.history_count % HISTORY_LEN] = hash;
        self.history_count += 1;
    }

    fn configurable(&self, op: &str) -> bool {
        match self.mode {
            Mode::Configuring => true,
            Mode::Running => {
                warn!(op, "ignored while running");
                false
            }
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.grid.is_alive(x, y)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> SimulationConfig {
        self.config
    }

    pub fn cell_size(&self) -> usize {
        self.config.cell_size
    }

    pub fn random_seed(&self) -> bool {
        self.config.random_seed
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn canvas_size(&self) -> (usize, usize) {
        (self.canvas_width, self.canvas_height)
    }

    /// True when the latest generation repeats one of the last ten,
    /// i.e. a still life or a short oscillator has been reached
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

fn clamp_cell_size(size: i64) -> usize {
    size.clamp(MIN_CELL_SIZE as i64, MAX_CELL_SIZE as i64) as usize
}

/// Whole cells that fit on the canvas
pub fn grid_dimensions(canvas_width: usize, canvas_height: usize, cell_size: usize) -> (usize, usize) {
    (canvas_width / cell_size, canvas_height / cell_size)
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Configuring => write!(f, "configuring"),
            Mode::Running => write!(f, "running"),
        }
    }
}
