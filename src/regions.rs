//! Flood-fill region extraction
//!
//! Splits the grid into maximal orthogonally-connected components of one
//! target value. Used twice by the pipeline: to prune undersized ground and
//! void regions, and to promote the surviving ground regions to rooms.
//!
//! Extraction is lazy: [`regions`] returns an iterator that discovers one
//! region per `next` call. Region membership is deterministic for a fixed
//! grid; region order follows the row-major seed scan, not traversal order.

use std::collections::VecDeque;

use crate::grid::{Coord, Grid};

/// A connected component of same-valued cells. Tiles are listed in
/// breadth-first discovery order from the seed cell.
#[derive(Clone, Debug)]
pub struct Region {
    pub value: u8,
    pub tiles: Vec<Coord>,
}

impl Region {
    pub fn size(&self) -> usize {
        self.tiles.len()
    }
}

/// Lazy iterator over all regions of `target` cells in a grid.
pub struct Regions<'a> {
    grid: &'a Grid<u8>,
    target: u8,
    visited: Grid<bool>,
    cursor: usize,
}

/// Extract every region of cells holding exactly `target`. Together the
/// yielded regions cover every matching cell exactly once.
pub fn regions(grid: &Grid<u8>, target: u8) -> Regions<'_> {
    Regions {
        grid,
        target,
        visited: Grid::new_with(grid.width, grid.height, false),
        cursor: 0,
    }
}

impl Regions<'_> {
    /// Breadth-first traversal from a seed cell. Only orthogonal neighbors
    /// extend a region; diagonal contact does not connect. Cells are marked
    /// visited when enqueued so no cell is queued twice.
    fn flood_fill(&mut self, start_x: i32, start_y: i32) -> Region {
        let mut tiles = Vec::new();
        let mut queue = VecDeque::new();

        queue.push_back(Coord::new(start_x, start_y));
        self.visited.set(start_x, start_y, true);

        while let Some(tile) = queue.pop_front() {
            tiles.push(tile);

            for (x, y, &value) in self.grid.neighborhood(tile.x, tile.y) {
                let orthogonal = x == tile.x || y == tile.y;
                if !orthogonal || (x == tile.x && y == tile.y) {
                    continue;
                }
                if value == self.target && self.visited.get(x, y) == Some(&false) {
                    self.visited.set(x, y, true);
                    queue.push_back(Coord::new(x, y));
                }
            }
        }

        Region {
            value: self.target,
            tiles,
        }
    }
}

impl Iterator for Regions<'_> {
    type Item = Region;

    fn next(&mut self) -> Option<Region> {
        while self.cursor < self.grid.width * self.grid.height {
            let x = (self.cursor % self.grid.width) as i32;
            let y = (self.cursor / self.grid.width) as i32;
            self.cursor += 1;

            if self.visited.get(x, y) == Some(&false) && self.grid.get(x, y) == Some(&self.target)
            {
                return Some(self.flood_fill(x, y));
            }
        }
        None
    }
}
