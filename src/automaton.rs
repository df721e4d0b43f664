//! Cellular automaton smoothing
//!
//! Seeds a noisy random grid, then smooths it into coherent blobs with a
//! uniform majority rule. The rule intentionally ignores a cell's own prior
//! value (unlike classic birth/death automata): every new cell is derived only
//! from the previous generation's 8-neighborhood, so a step is a pure function
//! from one grid to the next.

use rand::Rng;

use crate::config::CaveConfig;
use crate::grid::{Grid, GROUND, VOID};

/// Create the initial random grid: cells within `border_width` of any edge are
/// forced void, every other cell is ground with probability
/// `chance_to_start_alive`.
pub fn seed_grid<R: Rng>(
    width: usize,
    height: usize,
    config: &CaveConfig,
    rng: &mut R,
) -> Grid<u8> {
    let mut grid = Grid::new_with(width, height, VOID);
    let border = config.border_width as i32;
    let max_x = width as i32 - border;
    let max_y = height as i32 - border;
    let chance = config.chance_to_start_alive.clamp(0.0, 1.0);

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if x < border || x >= max_x || y < border || y >= max_y {
                continue;
            }
            if rng.gen_bool(chance) {
                grid.set(x, y, GROUND);
            }
        }
    }

    grid
}

/// Count the void-side neighbors of (x, y): the 8 surrounding cells that are
/// void or outside the grid. Out-of-range neighbors count as void, which
/// biases border cells toward water and reinforces the map edge.
pub fn void_neighbor_count(grid: &Grid<u8>, x: i32, y: i32) -> u8 {
    let mut count = 0;
    for dx in -1..=1 {
        for dy in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            match grid.get(x + dx, y + dy) {
                Some(&value) if value != VOID => {}
                _ => count += 1,
            }
        }
    }
    count
}

/// Count the ground-side neighbors of (x, y): the 8 surrounding cells that
/// are ground or outside the grid. This is the finalized neighbor cost of a
/// ground cell: 8 means fully interior, 7 or less means some boundary is
/// exposed nearby.
pub fn ground_neighbor_count(grid: &Grid<u8>, x: i32, y: i32) -> u8 {
    let mut count = 0;
    for dx in -1..=1 {
        for dy in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            match grid.get(x + dx, y + dy) {
                Some(&VOID) => {}
                _ => count += 1,
            }
        }
    }
    count
}

/// Compute one smoothing generation into a brand-new grid. A cell becomes
/// void when more than 4 of its previous-generation neighbors were void-side,
/// ground otherwise, regardless of its own previous value.
pub fn simulation_step(grid: &Grid<u8>) -> Grid<u8> {
    let mut next = Grid::new_with(grid.width, grid.height, VOID);

    for y in 0..grid.height as i32 {
        for x in 0..grid.width as i32 {
            let hostile = void_neighbor_count(grid, x, y);
            let value = if hostile > 4 { VOID } else { GROUND };
            next.set(x, y, value);
        }
    }

    next
}

/// Run `steps` smoothing generations, replacing the working grid wholesale
/// after each one. Never mutates a generation in place, so neighbor reads are
/// never order-dependent within a pass.
pub fn run_simulation(grid: &mut Grid<u8>, steps: u32) {
    for _ in 0..steps {
        *grid = simulation_step(grid);
    }
}

/// Replace every ground cell's value with its neighbor cost. Void cells keep
/// the value 0, so the finished grid encodes both classification and cost.
pub fn apply_neighbor_cost(grid: &mut Grid<u8>) {
    let costs: Vec<(i32, i32, u8)> = grid
        .iter()
        .filter(|(_, _, &value)| value != VOID)
        .map(|(x, y, _)| (x, y, ground_neighbor_count(grid, x, y)))
        .collect();

    for (x, y, cost) in costs {
        grid.set(x, y, cost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn config() -> CaveConfig {
        CaveConfig::default()
    }

    #[test]
    fn test_seed_grid_forces_border_void() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let cfg = CaveConfig {
            chance_to_start_alive: 1.0,
            border_width: 2,
            ..config()
        };
        let grid = seed_grid(10, 10, &cfg, &mut rng);

        for (x, y, &value) in grid.iter() {
            let in_border = x < 2 || x >= 8 || y < 2 || y >= 8;
            if in_border {
                assert_eq!(value, VOID, "border cell ({x}, {y}) must be void");
            } else {
                assert_eq!(value, GROUND, "interior cell ({x}, {y}) must be ground");
            }
        }
    }

    #[test]
    fn test_seed_grid_zero_border() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let cfg = CaveConfig {
            chance_to_start_alive: 1.0,
            border_width: 0,
            ..config()
        };
        let grid = seed_grid(4, 4, &cfg, &mut rng);
        assert!(grid.iter().all(|(_, _, &v)| v == GROUND));
    }

    #[test]
    fn test_seed_grid_is_deterministic() {
        let cfg = config();
        let a = seed_grid(32, 32, &cfg, &mut ChaCha8Rng::seed_from_u64(99));
        let b = seed_grid(32, 32, &cfg, &mut ChaCha8Rng::seed_from_u64(99));

        for ((x, y, va), (_, _, vb)) in a.iter().zip(b.iter()) {
            assert_eq!(va, vb, "cell ({x}, {y}) differs between identical seeds");
        }
    }

    #[test]
    fn test_void_neighbor_count_treats_out_of_range_as_void() {
        let grid = Grid::new_with(3, 3, GROUND);
        // Corner cell: 5 of its 8 window slots are off-grid.
        assert_eq!(void_neighbor_count(&grid, 0, 0), 5);
        // Interior cell of an all-ground grid has no void neighbors.
        assert_eq!(void_neighbor_count(&grid, 1, 1), 0);
    }

    #[test]
    fn test_step_fills_isolated_pocket() {
        let mut grid = Grid::new_with(5, 5, GROUND);
        grid.set(2, 2, VOID);

        let next = simulation_step(&grid);
        // The lone void cell has zero void neighbors, so it becomes ground.
        assert_eq!(next.get(2, 2), Some(&GROUND));
    }

    #[test]
    fn test_step_ignores_own_value() {
        // Two grids identical except for the center cell produce the same
        // center in the next generation: the rule only reads neighbors.
        let mut a = Grid::new_with(5, 5, GROUND);
        let mut b = a.clone();
        a.set(2, 2, VOID);
        b.set(2, 2, GROUND);

        let na = simulation_step(&a);
        let nb = simulation_step(&b);
        assert_eq!(na.get(2, 2), nb.get(2, 2));
    }

    #[test]
    fn test_step_erodes_void_majority() {
        // A ground cell with 5 void-side neighbors dies.
        let mut grid = Grid::new_with(5, 5, VOID);
        for x in 1..4 {
            grid.set(x, 2, GROUND);
        }
        // (1, 2) has ground neighbors only at (2, 2): 7 void-side.
        let next = simulation_step(&grid);
        assert_eq!(next.get(1, 2), Some(&VOID));
    }

    #[test]
    fn test_neighbor_cost_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut grid = seed_grid(24, 24, &config(), &mut rng);
        run_simulation(&mut grid, 8);
        apply_neighbor_cost(&mut grid);

        for (x, y, &value) in grid.iter() {
            assert!(value <= 8, "cell ({x}, {y}) has cost {value} > 8");
        }
    }

    #[test]
    fn test_neighbor_cost_interior_is_eight() {
        let mut grid = Grid::new_with(5, 5, GROUND);
        apply_neighbor_cost(&mut grid);
        assert_eq!(grid.get(2, 2), Some(&8));
        // The corner counts its 5 off-grid slots toward the total.
        assert_eq!(grid.get(0, 0), Some(&8));
    }
}
