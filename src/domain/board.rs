use std::fmt;

use super::{Cell, Direction};
use rayon::prelude::*;

/// Board-independent tile coordinate.
///
/// Board indices shift by one every time the board grows, so tiles are
/// addressed relative to the board centre instead: index `(x, y)` of a board
/// with side `n` maps to `(x - (n/2 - 1), y - (n/2 - 1))`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring coordinate one step along `dir`
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Square grid of cell codes holding the diamond-shaped playable region.
///
/// Cells are stored x-major (`x * size + y`), which is also the scan order
/// used by collision resolution and spawning.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create the empty 0x0 board every run starts from
    pub fn new() -> Self {
        Self::default()
    }

    /// Side length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of growth steps applied so far (the diamond's order)
    pub const fn order(&self) -> usize {
        self.size / 2
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        x * self.size + y
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.size && y < self.size).then(|| self.cells[self.index(x, y)])
    }

    /// Set cell at position. Out-of-range writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.size && y < self.size {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Index of the cell one step from `(x, y)` along `dir`, if on the board
    pub fn neighbor(&self, x: usize, y: usize, dir: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = dir.delta();
        let nx = x.checked_add_signed(dx as isize)?;
        let ny = y.checked_add_signed(dy as isize)?;
        (nx < self.size && ny < self.size).then_some((nx, ny))
    }

    fn origin(&self) -> i32 {
        self.size as i32 / 2 - 1
    }

    /// Convert a board index to its board-independent coordinate
    pub fn to_coord(&self, x: usize, y: usize) -> Coord {
        let origin = self.origin();
        Coord::new(x as i32 - origin, y as i32 - origin)
    }

    /// Convert a coordinate back to a board index, if it lies on the board
    pub fn to_index(&self, coord: Coord) -> Option<(usize, usize)> {
        let origin = self.origin();
        let x = usize::try_from(coord.x + origin).ok()?;
        let y = usize::try_from(coord.y + origin).ok()?;
        (x < self.size && y < self.size).then_some((x, y))
    }

    /// Cell at a board-independent coordinate
    pub fn cell_at(&self, coord: Coord) -> Option<Cell> {
        self.to_index(coord).and_then(|(x, y)| self.get(x, y))
    }

    /// Set the cell at a board-independent coordinate
    pub fn set_at(&mut self, coord: Coord, cell: Cell) {
        if let Some((x, y)) = self.to_index(coord) {
            self.set(x, y, cell);
        }
    }

    /// Grow by one ring: the side increases by 2, the new border starts as
    /// `Outside`, and the diamond boundary of the new board is carved out
    /// as `Empty`. Previously playable cells keep their contents.
    pub fn grow(&mut self) {
        let old = self.size;
        let size = old + 2;
        let mut cells = vec![Cell::Outside; size * size];
        for x in 0..old {
            for y in 0..old {
                cells[(x + 1) * size + (y + 1)] = self.cells[x * old + y];
            }
        }
        self.size = size;
        self.cells = cells;

        let s = size - 1;
        for i in 0..size * 2 {
            let row = i % size;
            let offset = (s / 2).abs_diff((row * s + s / 2) / size);
            let half = i / size;
            // sign is -1 for the left sweep, +1 for the right one
            let col = if half == 0 { offset } else { s - offset };
            if self.get(row, col) == Some(Cell::Outside) {
                self.set(row, col, Cell::Empty);
            }
        }
    }

    /// Deep copy with occupancy discarded: sentinels stay, everything else
    /// becomes `Empty`
    pub fn shape(&self) -> Self {
        Self {
            size: self.size,
            cells: self.cells.iter().map(|c| c.shape()).collect(),
        }
    }

    /// Count of cells holding a tile marker
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.direction().is_some()).count()
    }

    /// Count of playable (non-sentinel) cells
    pub fn playable_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_outside()).count()
    }

    /// True when every tile marker has a full cell of board around it, so
    /// neighbour lookups and the move pass stay in range
    pub fn has_clearance(&self) -> bool {
        let last = self.size.saturating_sub(1);
        self.iter_cells()
            .filter(|(_, _, cell)| cell.direction().is_some())
            .all(|(x, y, _)| x > 0 && y > 0 && x < last && y < last)
    }

    /// Move every marker one cell along its direction (serial scatter).
    /// Always writes into a fresh buffer, so no marker moves twice.
    pub fn shifted(&self) -> Self {
        let mut next = self.shape();
        for (x, y, cell) in self.iter_cells() {
            let Some(dir) = cell.direction() else { continue };
            match self.neighbor(x, y, dir) {
                Some((tx, ty)) => {
                    debug_assert!(!self.cells[self.index(tx, ty)].is_outside());
                    next.set(tx, ty, cell);
                }
                None => unreachable!("tile at ({x}, {y}) moved off the board"),
            }
        }
        next
    }

    /// Parallel move pass using rayon: each target cell gathers the single
    /// marker pointing into it. Agrees with `shifted` on every board where
    /// no two markers share a target.
    pub fn shifted_parallel(&self) -> Self {
        let size = self.size;
        let cells = (0..size * size)
            .into_par_iter()
            .map(|idx| {
                let (x, y) = (idx / size, idx % size);
                let base = self.cells[idx].shape();
                Direction::ALL
                    .iter()
                    .find(|&&dir| {
                        self.neighbor(x, y, dir.opposite())
                            .and_then(|(sx, sy)| self.get(sx, sy))
                            == Some(Cell::Occupied(dir))
                    })
                    .map_or(base, |&dir| Cell::Occupied(dir))
            })
            .collect();

        Self { size, cells }
    }

    /// Iterate over all cells with their positions, x-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.size)
            .flat_map(move |x| (0..self.size).map(move |y| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.index(x, y)]))
    }
}

impl fmt::Display for Board {
    /// ASCII dump, highest row first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.size).rev() {
            let line: String = (0..self.size)
                .map(|x| self.cells[self.index(x, y)].glyph())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
