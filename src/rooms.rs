//! Room graph
//!
//! A room is a surviving ground region promoted to a graph node: its tiles,
//! its boundary ("edge") tiles, and the set of rooms it is directly connected
//! to. Rooms live in a flat arena (`Vec<Room>`) and refer to each other by
//! [`RoomId`] index, so the connection graph carries no ownership cycles.

use std::collections::HashSet;

use crate::grid::{Coord, Grid, VOID};
use crate::regions::Region;

/// Arena index of a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoomId(pub usize);

#[derive(Clone, Debug)]
pub struct Room {
    /// Tiles in construction (flood-fill discovery) order.
    pub tiles: Vec<Coord>,
    /// Tile count, cached at construction.
    pub size: usize,
    /// Tiles orthogonally adjacent to a non-ground cell, in construction
    /// order. A tile appears once per exposed direction: tiles with more
    /// boundary exposure weigh heavier in the nearest-pair search.
    pub edge_tiles: Vec<Coord>,
    /// Rooms this one is directly connected to.
    pub connected: HashSet<RoomId>,
    /// Exactly one room per map: the largest by tile count.
    pub is_main: bool,
    /// True for the main room and, transitively, every room reachable from it.
    pub accessible_from_main: bool,
}

impl Room {
    /// Build a room from a ground region against the current grid, so edge
    /// tiles reflect the final, already-pruned boundaries.
    pub fn from_region(region: Region, grid: &Grid<u8>) -> Self {
        let mut edge_tiles = Vec::new();

        for tile in &region.tiles {
            for x in tile.x - 1..=tile.x + 1 {
                for y in tile.y - 1..=tile.y + 1 {
                    let orthogonal = x == tile.x || y == tile.y;
                    if !orthogonal || (x == tile.x && y == tile.y) {
                        continue;
                    }
                    // Off-grid neighbors read as border, same as void.
                    match grid.get(x, y) {
                        Some(&value) if value != VOID => {}
                        _ => edge_tiles.push(*tile),
                    }
                }
            }
        }

        let size = region.tiles.len();
        Self {
            tiles: region.tiles,
            size,
            edge_tiles,
            connected: HashSet::new(),
            is_main: false,
            accessible_from_main: false,
        }
    }

    pub fn is_connected(&self, other: RoomId) -> bool {
        self.connected.contains(&other)
    }
}

/// Register the symmetric connection between two rooms and propagate
/// main-room accessibility across it. If either endpoint can already reach
/// the main room, the other endpoint (and everything connected to it) can
/// now too.
pub fn connect(rooms: &mut [Room], a: RoomId, b: RoomId) {
    if rooms[a.0].accessible_from_main {
        mark_accessible(rooms, b);
    } else if rooms[b.0].accessible_from_main {
        mark_accessible(rooms, a);
    }
    rooms[a.0].connected.insert(b);
    rooms[b.0].connected.insert(a);
}

/// Flag `start` and every room transitively connected to it as accessible
/// from the main room. Worklist traversal: the connection graph can be
/// arbitrarily deep.
pub fn mark_accessible(rooms: &mut [Room], start: RoomId) {
    let mut stack = vec![start];

    while let Some(id) = stack.pop() {
        if rooms[id.0].accessible_from_main {
            continue;
        }
        rooms[id.0].accessible_from_main = true;
        stack.extend(rooms[id.0].connected.iter().copied());
    }
}

/// Select the largest room as the main room and seed the accessibility flag
/// from it. Ties go to the first-constructed room. Returns `None` when no
/// room survived pruning.
pub fn mark_main_room(rooms: &mut [Room]) -> Option<RoomId> {
    let mut main: Option<RoomId> = None;
    let mut best_size = 0;

    for (idx, room) in rooms.iter().enumerate() {
        if room.size > best_size {
            best_size = room.size;
            main = Some(RoomId(idx));
        }
    }

    if let Some(id) = main {
        rooms[id.0].is_main = true;
        rooms[id.0].accessible_from_main = true;
    }
    main
}
