//! The simulation world: board, live tiles and the rules that move them.
//!
//! One `World` value holds all mutable state. Every operation takes the
//! render collaborator and the random source explicitly, so tests can build
//! isolated worlds with recording renderers and seeded generators.

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use super::{Board, Cell, Coord, Direction, MoveStrategy, Tile, TileId, TileRegistry, TileRenderer};

/// Broken coupling between the board and the tile registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("tile registry does not map exactly the cells of its live tiles")]
    Registry,

    #[error("board cell {0:?} holds a marker but no tile occupies it")]
    Unowned(Coord),

    #[error("board cell {0:?} disagrees with its tile's direction")]
    DirectionMismatch(Coord),

    #[error("tile cell {0:?} is not marked on the board")]
    Unmarked(Coord),
}

#[derive(Default)]
pub struct World {
    board: Board,
    tiles: TileRegistry,
}

impl World {
    /// Start from the empty 0x0 board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tiles(&self) -> &TileRegistry {
        &self.tiles
    }

    /// Grow the board by one ring around the diamond
    pub fn grow(&mut self) {
        self.board.grow();
    }

    /// Annihilate every pair of tiles facing each other across one edge.
    /// Returns the number of tiles destroyed.
    pub fn resolve_collisions(&mut self, renderer: &mut dyn TileRenderer) -> usize {
        let size = self.board.size();
        let mut destroyed = 0;
        for x in 0..size {
            for y in 0..size {
                let Some(Cell::Occupied(dir)) = self.board.get(x, y) else { continue };
                let Some((nx, ny)) = self.board.neighbor(x, y, dir) else { continue };
                if self.board.get(nx, ny) != Some(Cell::Occupied(dir.opposite())) {
                    continue;
                }

                self.board.set(x, y, Cell::Empty);
                self.board.set(nx, ny, Cell::Empty);
                let here = self.board.to_coord(x, y);
                let there = self.board.to_coord(nx, ny);
                debug!(?here, ?there, ?dir, "collision");
                destroyed += usize::from(self.remove_at(here, renderer));
                destroyed += usize::from(self.remove_at(there, renderer));
            }
        }
        destroyed
    }

    /// Destroy the tile occupying `coord`: both of its cells are cleared on
    /// the board and unregistered, and its render payload is detached.
    /// Returns false (and does nothing) when no tile is there.
    pub fn remove_at(&mut self, coord: Coord, renderer: &mut dyn TileRenderer) -> bool {
        let Some(id) = self.tiles.at(coord) else { return false };
        let Some(tile) = self.tiles.remove(id) else { return false };
        for cell in tile.cells() {
            if self.board.cell_at(cell) == Some(Cell::Occupied(tile.dir)) {
                self.board.set_at(cell, Cell::Empty);
            }
        }
        if let Some(handle) = tile.handle {
            renderer.detach(handle);
        }
        true
    }

    /// One discrete step: move every tile, then fill every vacated 2x2
    /// block with a fresh domino pair. Returns the number of pairs spawned.
    pub fn advance<R: Rng>(
        &mut self,
        rng: &mut R,
        renderer: &mut dyn TileRenderer,
        strategy: MoveStrategy,
    ) -> usize {
        self.move_tiles(strategy);
        let spawned = self.spawn(rng, renderer);
        debug_assert_eq!(self.check_invariants(), Ok(()));
        spawned
    }

    /// Move pass plus registry bookkeeping, both from the same pre-step state
    pub fn move_tiles(&mut self, strategy: MoveStrategy) {
        assert!(
            self.board.has_clearance(),
            "tiles touch the board edge; the board must grow before moving"
        );
        self.board = match strategy {
            MoveStrategy::Serial => self.board.shifted(),
            MoveStrategy::Parallel => self.board.shifted_parallel(),
        };
        self.tiles.advance_all();
    }

    /// Fill every all-empty 2x2 block with a domino pair, one random bit per
    /// block. Blocks are scanned x-major; a block overlapping one already
    /// filled in this pass no longer qualifies.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, renderer: &mut dyn TileRenderer) -> usize {
        let size = self.board.size();
        let mut pairs = 0;
        for x in 0..size.saturating_sub(1) {
            for y in 0..size.saturating_sub(1) {
                let block = [(x, y), (x + 1, y), (x, y + 1), (x + 1, y + 1)];
                if !block.iter().all(|&(bx, by)| self.board.get(bx, by) == Some(Cell::Empty)) {
                    continue;
                }

                let origin = self.board.to_coord(x, y);
                let (first, second) = if rng.random::<bool>() {
                    (Direction::Right, Direction::Left)
                } else {
                    (Direction::Up, Direction::Down)
                };
                debug!(?origin, ?first, ?second, "spawn");
                self.place(Tile::spawn(origin, first), renderer);
                self.place(Tile::spawn(origin, second), renderer);
                pairs += 1;
            }
        }
        pairs
    }

    /// Mark a new tile on the board, register it and attach its payload
    fn place(&mut self, tile: Tile, renderer: &mut dyn TileRenderer) -> TileId {
        for cell in tile.cells() {
            self.board.set_at(cell, Cell::Occupied(tile.dir));
        }
        let id = self.tiles.insert(tile);
        if let Some(tile) = self.tiles.get_mut(id) {
            tile.handle = Some(renderer.attach(id, tile));
        }
        id
    }

    /// Set the on-screen progress of every live tile through the current step
    pub fn set_progress(&mut self, t: f32) {
        let t = t.clamp(0.0, 1.0);
        self.tiles.iter_mut().for_each(|(_, tile)| tile.progress = t);
    }

    /// Verify the registry and its coupling with the board
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if !self.tiles.is_consistent() {
            return Err(InvariantError::Registry);
        }
        for (x, y, cell) in self.board.iter_cells() {
            let Some(dir) = cell.direction() else { continue };
            let coord = self.board.to_coord(x, y);
            let tile = self
                .tiles
                .at(coord)
                .and_then(|id| self.tiles.get(id))
                .ok_or(InvariantError::Unowned(coord))?;
            if tile.dir != dir {
                return Err(InvariantError::DirectionMismatch(coord));
            }
        }
        for (_, tile) in self.tiles.iter() {
            for coord in tile.cells() {
                if self.board.cell_at(coord) != Some(Cell::Occupied(tile.dir)) {
                    return Err(InvariantError::Unmarked(coord));
                }
            }
        }
        Ok(())
    }
}
