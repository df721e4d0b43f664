//! Bounds-checked 2D cell grid
//!
//! The cave map lives on a `Grid<u8>`: cells hold the binary classification
//! during simulation (void/ground) and a neighbor cost after finalization.
//! Coordinates are signed so neighbor probes can run past the map edge and
//! simply come back empty.

/// Cell value for water/void.
pub const VOID: u8 = 0;
/// Cell value for walkable ground during simulation.
pub const GROUND: u8 = 1;

/// An (x, y) grid address. Equality is by value; no implicit ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another coordinate.
    /// No square root: only relative ordering matters to callers.
    pub fn distance_squared(&self, other: &Coord) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

/// A width×height grid stored row-major.
#[derive(Clone)]
pub struct Grid<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T: Clone> Grid<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    /// Whether (x, y) addresses a cell inside the grid.
    pub fn in_range(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Bounds-checked read. Out-of-range addresses return `None`, never panic.
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        if self.in_range(x, y) {
            Some(&self.data[self.index(x, y)])
        } else {
            None
        }
    }

    /// Bounds-checked write. Out-of-range addresses are silently ignored.
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if self.in_range(x, y) {
            let idx = self.index(x, y);
            self.data[idx] = value;
        }
    }

    /// Fill the entire grid with one value.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Iterate over all cells in row-major order. Restartable: each call
    /// starts a fresh pass over the same data.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &T)> {
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = (idx % self.width) as i32;
            let y = (idx / self.width) as i32;
            (x, y, val)
        })
    }

    /// Iterate mutably over all cells in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (i32, i32, &mut T)> {
        let width = self.width;
        self.data.iter_mut().enumerate().map(move |(idx, val)| {
            let x = (idx % width) as i32;
            let y = (idx / width) as i32;
            (x, y, val)
        })
    }

    /// Iterate over the up-to-9 in-range cells of the 3×3 window centered on
    /// (cx, cy), column by column. Includes the center cell itself.
    pub fn neighborhood(&self, cx: i32, cy: i32) -> impl Iterator<Item = (i32, i32, &T)> {
        (cx - 1..=cx + 1)
            .flat_map(move |x| (cy - 1..=cy + 1).map(move |y| (x, y)))
            .filter_map(move |(x, y)| self.get(x, y).map(|v| (x, y, v)))
    }
}

impl Grid<u8> {
    /// Reclassify a set of tiles in bulk. Used when pruning erases or fills a
    /// whole region.
    pub fn flag_tiles(&mut self, tiles: &[Coord], value: u8) {
        for tile in tiles {
            self.set(tile.x, tile.y, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_out_of_range_is_none() {
        let grid = Grid::new_with(4, 3, GROUND);

        assert_eq!(grid.get(0, 0), Some(&GROUND));
        assert_eq!(grid.get(3, 2), Some(&GROUND));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_set_out_of_range_is_noop() {
        let mut grid = Grid::new_with(4, 3, VOID);

        grid.set(-1, 0, GROUND);
        grid.set(4, 2, GROUND);
        grid.set(0, 3, GROUND);

        assert!(grid.iter().all(|(_, _, &v)| v == VOID));

        grid.set(2, 1, GROUND);
        assert_eq!(grid.get(2, 1), Some(&GROUND));
    }

    #[test]
    fn test_iter_is_row_major_and_restartable() {
        let mut grid = Grid::new_with(3, 2, 0u8);
        grid.set(1, 0, 5);

        let coords: Vec<(i32, i32)> = grid.iter().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(
            coords,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );

        // A second pass sees the same cells again.
        assert_eq!(grid.iter().count(), 6);
        assert_eq!(grid.iter().filter(|(_, _, &v)| v == 5).count(), 1);
    }

    #[test]
    fn test_neighborhood_clips_to_bounds() {
        let grid = Grid::new_with(3, 3, GROUND);

        // Corner: the 3x3 window only has 4 in-range cells (center included).
        assert_eq!(grid.neighborhood(0, 0).count(), 4);
        // Edge: 6 in-range cells.
        assert_eq!(grid.neighborhood(1, 0).count(), 6);
        // Interior: full window.
        assert_eq!(grid.neighborhood(1, 1).count(), 9);
    }

    #[test]
    fn test_flag_tiles() {
        let mut grid = Grid::new_with(3, 3, GROUND);
        let tiles = vec![Coord::new(0, 0), Coord::new(2, 2), Coord::new(5, 5)];

        grid.flag_tiles(&tiles, VOID);

        assert_eq!(grid.get(0, 0), Some(&VOID));
        assert_eq!(grid.get(2, 2), Some(&VOID));
        assert_eq!(grid.get(1, 1), Some(&GROUND));
    }

    #[test]
    fn test_distance_squared() {
        let a = Coord::new(1, 2);
        let b = Coord::new(4, 6);
        assert_eq!(a.distance_squared(&b), 25);
        assert_eq!(b.distance_squared(&a), 25);
        assert_eq!(a.distance_squared(&a), 0);
    }
}
