//! Room connection
//!
//! Builds a spanning connectivity over the rooms so everything is reachable
//! from the main room. Two phases of greedy nearest-pair matching over edge
//! tiles: phase one gives every unconnected room its closest partner, phase
//! two repeatedly bridges the closest accessible/not-accessible pair until
//! the graph is connected. Distances compare squared, with strict less-than,
//! so the first pair found in iteration order wins ties; rooms iterate in
//! construction order and edge tiles in per-room construction order, which
//! keeps the output deterministic for a fixed seed.

use crate::grid::{Coord, Grid};
use crate::passages::carve_passage;
use crate::rooms::{self, Room, RoomId};

/// The best edge-tile pair found so far during a search pass.
struct Candidate {
    room_a: RoomId,
    room_b: RoomId,
    tile_a: Coord,
    tile_b: Coord,
    distance: i64,
}

/// Connect all rooms and guarantee reachability from the main room. Carves a
/// passage of `radius` for every connection made. A no-op for zero or one
/// rooms.
pub fn connect_closest_rooms(grid: &mut Grid<u8>, rooms: &mut Vec<Room>, radius: i32) {
    nearest_pass(grid, rooms, radius);

    // Force reachability: each pass connects at least one stranded room to
    // the accessible side, so this ends within rooms-1 iterations.
    while force_accessibility_pass(grid, rooms, radius) {}
}

/// Phase 1: every room with no connections yet is linked to whichever other
/// room has the globally closest edge tile. Passages are carved immediately,
/// so a room connected as a partner earlier in the pass is skipped when its
/// own turn comes.
fn nearest_pass(grid: &mut Grid<u8>, rooms: &mut Vec<Room>, radius: i32) {
    for a in 0..rooms.len() {
        if !rooms[a].connected.is_empty() {
            continue;
        }

        let mut best: Option<Candidate> = None;
        for b in 0..rooms.len() {
            if a == b || rooms[a].is_connected(RoomId(b)) {
                continue;
            }
            closest_tile_pair(&rooms[a], &rooms[b], RoomId(a), RoomId(b), &mut best);
        }

        if let Some(candidate) = best {
            create_passage(grid, rooms, candidate, radius);
        }
    }
}

/// Phase 2: one bridging connection between the accessible and
/// not-accessible partitions. Returns false when every room is already
/// reachable from the main room (or no bridge exists).
fn force_accessibility_pass(grid: &mut Grid<u8>, rooms: &mut Vec<Room>, radius: i32) -> bool {
    let mut best: Option<Candidate> = None;

    for a in 0..rooms.len() {
        if rooms[a].accessible_from_main {
            continue;
        }
        for b in 0..rooms.len() {
            if !rooms[b].accessible_from_main {
                continue;
            }
            closest_tile_pair(&rooms[a], &rooms[b], RoomId(a), RoomId(b), &mut best);
        }
    }

    match best {
        Some(candidate) => {
            create_passage(grid, rooms, candidate, radius);
            true
        }
        None => false,
    }
}

/// Scan every edge-tile pair of two rooms and keep the closest one seen so
/// far across the whole pass. Strict less-than: earlier pairs win ties.
fn closest_tile_pair(
    room_a: &Room,
    room_b: &Room,
    id_a: RoomId,
    id_b: RoomId,
    best: &mut Option<Candidate>,
) {
    for tile_a in &room_a.edge_tiles {
        for tile_b in &room_b.edge_tiles {
            let distance = tile_a.distance_squared(tile_b);
            let closer = match best {
                Some(candidate) => distance < candidate.distance,
                None => true,
            };
            if closer {
                *best = Some(Candidate {
                    room_a: id_a,
                    room_b: id_b,
                    tile_a: *tile_a,
                    tile_b: *tile_b,
                    distance,
                });
            }
        }
    }
}

fn create_passage(grid: &mut Grid<u8>, rooms: &mut [Room], candidate: Candidate, radius: i32) {
    rooms::connect(rooms, candidate.room_a, candidate.room_b);
    carve_passage(grid, candidate.tile_a, candidate.tile_b, radius);
}
