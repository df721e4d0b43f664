//! Passage carving
//!
//! Opens a physical corridor between two tiles: rasterize the connecting
//! line with an integer digital-line walk, then stamp a filled disk of
//! ground along it. Stamping overwrites whatever was there, which is how
//! passages cut through void terrain. Out-of-range cells are skipped
//! silently by the grid's `set`, so carving has no failure mode.

use crate::grid::{Coord, Grid, GROUND};

/// Tiles along the digital line from `from` toward `to`, walking one unit
/// along the dominant axis per step and accumulating error along the minor
/// axis. Sign-based stepping keeps the walk correct in all four quadrants
/// and for either axis dominance. Yields `max(|dx|, |dy|)` tiles starting at
/// `from`; the final stamp radius covers the remaining gap to `to`.
pub fn line_between(from: Coord, to: Coord) -> Vec<Coord> {
    let mut line = Vec::new();

    let mut x = from.x;
    let mut y = from.y;
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let mut step = dx.signum();
    let mut gradient_step = dy.signum();
    let mut longest = dx.abs();
    let mut shortest = dy.abs();

    let inverted = longest < shortest;
    if inverted {
        std::mem::swap(&mut longest, &mut shortest);
        std::mem::swap(&mut step, &mut gradient_step);
    }

    let mut gradient_accumulation = longest / 2;
    for _ in 0..longest {
        line.push(Coord::new(x, y));

        if inverted {
            y += step;
        } else {
            x += step;
        }

        gradient_accumulation += shortest;
        if gradient_accumulation >= longest {
            if inverted {
                x += gradient_step;
            } else {
                y += gradient_step;
            }
            gradient_accumulation -= longest;
        }
    }

    line
}

/// Force every cell within `radius` of `center` (inclusive, squared-distance
/// test) to ground.
pub fn stamp_disk(grid: &mut Grid<u8>, center: Coord, radius: i32) {
    for dx in -radius..=radius {
        for dy in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                grid.set(center.x + dx, center.y + dy, GROUND);
            }
        }
    }
}

/// Carve the corridor between two tiles: disk-stamp every tile on the
/// connecting line.
pub fn carve_passage(grid: &mut Grid<u8>, from: Coord, to: Coord, radius: i32) {
    for tile in line_between(from, to) {
        stamp_disk(grid, tile, radius);
    }
}
