//! Cave map container and generation pipeline
//!
//! Bundles everything one generation run produces: the finished grid, the
//! room graph, and the configuration and seeds that made it, so a run can be
//! recreated exactly. Each run is a one-shot batch computation over fresh
//! structures; nothing persists between runs except configuration defaults.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::automaton;
use crate::config::CaveConfig;
use crate::connector;
use crate::grid::{Grid, GROUND, VOID};
use crate::regions::{self, Region};
use crate::rooms::{self, Room, RoomId};
use crate::seeds::MapSeeds;

/// Semantic tier of a finished cell, derived from its neighbor cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CellKind {
    /// Void terrain (cost 0).
    Water,
    /// Ground with exposed boundary nearby (cost 1-7).
    Fringe,
    /// Fully enclosed ground (cost 8).
    Interior,
}

impl CellKind {
    /// Classify a finished cell value.
    pub fn from_cost(value: u8) -> Self {
        match value {
            0 => CellKind::Water,
            1..=7 => CellKind::Fringe,
            _ => CellKind::Interior,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CellKind::Water => "Water",
            CellKind::Fringe => "Fringe",
            CellKind::Interior => "Interior",
        }
    }
}

/// All data produced by one generation run.
pub struct CaveMap {
    /// Seeds used for generation (allows recreation).
    pub seeds: MapSeeds,
    /// Map width in cells.
    pub width: usize,
    /// Map height in cells.
    pub height: usize,
    /// Configuration the run was generated with.
    pub config: CaveConfig,
    /// Finished grid: 0 = void, 1-8 = ground neighbor cost.
    pub grid: Grid<u8>,
    /// Surviving rooms in construction order.
    pub rooms: Vec<Room>,
    /// The largest room, if any survived pruning. `None` means the run was
    /// degenerate (fully void); the connection phases were skipped.
    pub main_room: Option<RoomId>,
}

impl CaveMap {
    pub fn seed(&self) -> u64 {
        self.seeds.master
    }

    /// Tier of the cell at (x, y); out-of-range reads as water.
    pub fn kind_at(&self, x: i32, y: i32) -> CellKind {
        CellKind::from_cost(*self.grid.get(x, y).unwrap_or(&VOID))
    }

    /// Number of undirected room connections.
    pub fn connection_count(&self) -> usize {
        let directed: usize = self.rooms.iter().map(|r| r.connected.len()).sum();
        directed / 2
    }

    /// Ground cell count in the finished grid.
    pub fn ground_cells(&self) -> usize {
        self.grid.iter().filter(|(_, _, &v)| v != VOID).count()
    }
}

/// Run the full generation pipeline: random seeding, smoothing, pruning,
/// room construction, connection, passage carving and cost finalization.
pub fn generate_cave(width: usize, height: usize, config: &CaveConfig, seeds: MapSeeds) -> CaveMap {
    let mut rng = ChaCha8Rng::seed_from_u64(seeds.terrain);

    let mut grid = automaton::seed_grid(width, height, config, &mut rng);
    automaton::run_simulation(&mut grid, config.simulation_steps);

    finish_map(grid, config, seeds)
}

/// Everything after smoothing. Split out so tests (and callers with
/// hand-built terrain) can run the structural phases on an existing grid.
pub fn finish_map(mut grid: Grid<u8>, config: &CaveConfig, seeds: MapSeeds) -> CaveMap {
    prune_regions(&mut grid, config);

    let mut rooms = build_rooms(&grid);
    let main_room = rooms::mark_main_room(&mut rooms);
    if main_room.is_some() {
        connector::connect_closest_rooms(&mut grid, &mut rooms, config.connections_radius as i32);
    }

    automaton::apply_neighbor_cost(&mut grid);

    CaveMap {
        seeds,
        width: grid.width,
        height: grid.height,
        config: config.clone(),
        grid,
        rooms,
        main_room,
    }
}

/// Erase undersized ground regions to void, then fill undersized void
/// pockets back to ground. Room construction re-extracts afterwards, so
/// rooms always reflect the final grid (pocket filling can merge regions).
fn prune_regions(grid: &mut Grid<u8>, config: &CaveConfig) {
    let small_ground: Vec<Region> = regions::regions(grid, GROUND)
        .filter(|region| region.size() < config.ground_region_threshold)
        .collect();
    for region in small_ground {
        grid.flag_tiles(&region.tiles, VOID);
    }

    let small_void: Vec<Region> = regions::regions(grid, VOID)
        .filter(|region| region.size() < config.void_region_threshold)
        .collect();
    for region in small_void {
        grid.flag_tiles(&region.tiles, GROUND);
    }
}

fn build_rooms(grid: &Grid<u8>) -> Vec<Room> {
    regions::regions(grid, GROUND)
        .map(|region| Room::from_region(region, grid))
        .collect()
}
