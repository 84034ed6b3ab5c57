use conway::patterns::{self, parse_plaintext};
use conway::{Grid, Mode, SimulationController};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.is_alive(x, y) {
                cells.push((x, y));
            }
        }
    }
    cells
}

fn custom_world(canvas: usize, cell_size: usize) -> SimulationController {
    let mut sim =
        SimulationController::with_rng(canvas, canvas, cell_size, StdRng::seed_from_u64(99)).unwrap();
    sim.toggle_random_seed();
    sim
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_generations() {
    let mut grid = Grid::new(12, 12).unwrap();
    let glider = patterns::find("Glider").unwrap();
    grid.initialize_from(glider.cells);

    for _ in 0..4 {
        grid.step();
    }
    let mut shifted: Vec<(usize, usize)> = glider.cells.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
    shifted.sort_by_key(|&(x, y)| (y, x));
    assert_eq!(live_cells(&grid), shifted);
}

#[test]
fn glider_wraps_around_the_torus() {
    let mut grid = Grid::new(8, 8).unwrap();
    grid.initialize_from(patterns::find("Glider").unwrap().cells);
    let start = live_cells(&grid);

    // 8 cells in each direction brings it home on an 8x8 torus
    for _ in 0..32 {
        grid.step();
        assert_eq!(grid.live_count(), 5);
    }
    assert_eq!(live_cells(&grid), start);
}

#[test]
fn pulsar_has_period_three() {
    let mut sim = custom_world(250, 10);
    sim.place_pattern(patterns::find("Pulsar").unwrap());
    sim.start();
    let start = live_cells(sim.grid());

    sim.tick();
    assert_ne!(live_cells(sim.grid()), start);
    sim.tick();
    sim.tick();
    assert_eq!(live_cells(sim.grid()), start);
    assert!(sim.is_settled());
}

#[test]
fn r_pentomino_is_still_growing_at_generation_fifty() {
    let mut grid = Grid::new(200, 200).unwrap();
    let cells: Vec<(usize, usize)> = patterns::find("R-pentomino")
        .unwrap()
        .cells
        .iter()
        .map(|&(x, y)| (x + 100, y + 100))
        .collect();
    grid.initialize_from(&cells);
    for _ in 0..50 {
        grid.step();
    }
    assert!(grid.live_count() > 20, "live = {}", grid.live_count());
}

#[test]
fn gosper_gun_keeps_growing() {
    let mut sim = SimulationController::with_rng(800, 600, 10, StdRng::seed_from_u64(3)).unwrap();
    sim.toggle_random_seed();
    sim.place_pattern(patterns::find("Gosper Glider Gun").unwrap());
    sim.start();
    for _ in 0..120 {
        sim.tick();
    }
    assert_eq!(sim.generation(), 120);
    assert!(sim.grid().live_count() > 36);
    assert!(!sim.is_settled());
}

#[test]
fn plaintext_world_runs_through_controller() {
    let cells = parse_plaintext("!Blinker\n...\nOOO\n...\n").unwrap();
    let mut sim = custom_world(50, 10);
    sim.initialize_from(&cells);
    sim.start();
    sim.tick();
    assert_eq!(live_cells(sim.grid()), vec![(1, 0), (1, 1), (1, 2)]);
}

#[test]
fn configure_then_run() {
    let mut sim = SimulationController::with_rng(1200, 600, 10, StdRng::seed_from_u64(5)).unwrap();
    sim.set_cell_size(10).unwrap();
    assert_eq!(sim.cell_size(), 20);
    assert_eq!((sim.grid().width(), sim.grid().height()), (60, 30));
    assert_eq!(sim.grid().live_count(), 0);

    sim.start();
    assert_eq!(sim.mode(), Mode::Running);
    assert!(sim.grid().live_count() > 0);

    sim.set_cell_size(-5).unwrap();
    sim.tick();
    assert_eq!(sim.cell_size(), 20);
    assert_eq!((sim.grid().width(), sim.grid().height()), (60, 30));
    assert_eq!(sim.generation(), 1);
}
