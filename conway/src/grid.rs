// grid.rs - Double-buffered toroidal grid for Conway's Game of Life

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::Rng;
use tracing::debug;

use crate::error::{LifeError, Result};

pub type TRow = Vec<bool>;
pub type TGrid = Vec<TRow>; // indexed [y][x]

/// Offsets of the eight Moore neighbours
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Cell state for one generation plus a scratch buffer for the next.
///
/// The grid has no edges: column `width - 1` sits left of column `0` and
/// the bottom row sits above the top row.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    current: TGrid,
    next: TGrid,
}

impl Grid {
    /// All-dead grid of the given size
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            current: blank(width, height),
            next: blank(width, height),
        })
    }

    /// Throw away both buffers and start over with an all-dead grid.
    /// On error the grid is left untouched.
    pub fn allocate(&mut self, width: usize, height: usize) -> Result<()> {
        check_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        self.current = blank(width, height);
        self.next = blank(width, height);
        debug!(width, height, "grid allocated");
        Ok(())
    }

    /// Every cell independently alive with probability 1/2
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for row in self.current.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.gen_bool(0.5);
            }
        }
    }

    /// Clear the grid and bring the listed `(x, y)` cells to life.
    /// Coordinates wrap around the grid like everything else here.
    pub fn initialize_from(&mut self, cells: &[(usize, usize)]) {
        for row in self.current.iter_mut() {
            row.fill(false);
        }
        for &(x, y) in cells {
            self.current[y % self.height][x % self.width] = true;
        }
    }

    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        count_neighbors(&self.current, x, y, self.width, self.height)
    }

    /// Advance one generation.
    ///
    /// `next` is filled from `current` alone, then the two buffers trade
    /// places so the old generation becomes scratch space for the next call.
    pub fn step(&mut self) {
        let current = &self.current;
        for (y, row) in self.next.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                let count = count_neighbors(current, x, y, self.width, self.height);
                *cell = match (current[y][x], count) {
                    (true, 2) | (true, 3) => true,  // Survival
                    (false, 3)            => true,  // Birth
                    _                     => false, // Death or stays dead
                };
            }
        }
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Out-of-range coordinates read as dead
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.current
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn live_count(&self) -> usize {
        self.current
            .iter()
            .map(|row| row.iter().filter(|&&alive| alive).count())
            .sum()
    }

    /// Hash of the current generation, used to spot repeating states
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.width.hash(&mut hasher);
        self.height.hash(&mut hasher);
        self.current.hash(&mut hasher);
        hasher.finish()
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(LifeError::InvalidDimensions { width, height });
    }
    Ok(())
}

fn blank(width: usize, height: usize) -> TGrid {
    vec![vec![false; width]; height]
}

#[inline]
fn wrap(coord: usize, offset: isize, size: usize) -> usize {
    let size = size as isize;
    (((coord as isize + offset) % size + size) % size) as usize
}

fn count_neighbors(grid: &TGrid, x: usize, y: usize, width: usize, height: usize) -> u8 {
    let mut count = 0;
    for &(dx, dy) in &NEIGHBOR_OFFSETS {
        if grid[wrap(y, dy, height)][wrap(x, dx, width)] {
            count += 1;
        }
    }
    count
}
