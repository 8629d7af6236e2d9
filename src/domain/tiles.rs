use std::collections::HashMap;

use slotmap::{SlotMap, new_key_type};

use super::{Coord, Direction, RenderHandle};

new_key_type! {
    /// Stable handle for a live tile. Removing the tile invalidates the id.
    pub struct TileId;
}

/// A domino half: two orthogonally adjacent cells travelling together.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub dir: Direction,
    pub pos_a: Coord,
    pub pos_b: Coord,
    /// Render payload, present while attached to a renderer
    pub handle: Option<RenderHandle>,
    /// Fraction of the current step already shown on screen (0..=1)
    pub progress: f32,
}

impl Tile {
    /// Build the half of a domino pair spawned into the 2x2 block whose
    /// lowest corner is `origin`. The half sits on the side its direction
    /// points to.
    pub fn spawn(origin: Coord, dir: Direction) -> Self {
        let Coord { x, y } = origin;
        let (pos_a, pos_b) = match dir {
            Direction::Right => (Coord::new(x + 1, y + 1), Coord::new(x + 1, y)),
            Direction::Up => (Coord::new(x + 1, y + 1), Coord::new(x, y + 1)),
            Direction::Left => (Coord::new(x, y), Coord::new(x, y + 1)),
            Direction::Down => (Coord::new(x, y), Coord::new(x + 1, y)),
        };
        Self { dir, pos_a, pos_b, handle: None, progress: 0.0 }
    }

    /// Both occupied coordinates
    pub const fn cells(&self) -> [Coord; 2] {
        [self.pos_a, self.pos_b]
    }

    /// Translate both cells one unit along the travel direction
    pub fn advance(&mut self) {
        self.pos_a = self.pos_a.step(self.dir);
        self.pos_b = self.pos_b.step(self.dir);
        self.progress = 0.0;
    }

    /// Visual displacement in cells for the current interpolation progress
    pub fn visual_offset(&self) -> (f32, f32) {
        let (dx, dy) = self.dir.delta();
        (dx as f32 * self.progress, dy as f32 * self.progress)
    }
}

/// Owns every live tile and maps occupied coordinates back to their tile.
#[derive(Default)]
pub struct TileRegistry {
    tiles: SlotMap<TileId, Tile>,
    by_coord: HashMap<Coord, TileId>,
}

impl TileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of mapped coordinates
    pub fn mapped_len(&self) -> usize {
        self.by_coord.len()
    }

    /// Add a tile and register both of its cells
    pub fn insert(&mut self, tile: Tile) -> TileId {
        let cells = tile.cells();
        let id = self.tiles.insert(tile);
        for coord in cells {
            let previous = self.by_coord.insert(coord, id);
            debug_assert!(previous.is_none(), "coordinate {coord:?} already occupied");
        }
        id
    }

    /// Remove a tile and unregister its cells. `None` if the id is stale.
    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        let tile = self.tiles.remove(id)?;
        for coord in tile.cells() {
            if self.by_coord.get(&coord) == Some(&id) {
                self.by_coord.remove(&coord);
            }
        }
        Some(tile)
    }

    /// Tile occupying `coord`, if any
    pub fn at(&self, coord: Coord) -> Option<TileId> {
        self.by_coord.get(&coord).copied()
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileId, &Tile)> {
        self.tiles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (TileId, &mut Tile)> {
        self.tiles.iter_mut()
    }

    /// Step every tile one cell. All old coordinates are unregistered before
    /// any new one is inserted, so a tile moving into a cell another tile
    /// just left never loses its entry.
    pub fn advance_all(&mut self) {
        for tile in self.tiles.values() {
            for coord in tile.cells() {
                self.by_coord.remove(&coord);
            }
        }
        for (id, tile) in self.tiles.iter_mut() {
            tile.advance();
            for coord in tile.cells() {
                self.by_coord.insert(coord, id);
            }
        }
    }

    /// Every live tile maps exactly its own two cells, and nothing else is
    /// mapped
    pub fn is_consistent(&self) -> bool {
        let owned_by_tiles = self.tiles.iter().all(|(id, tile)| {
            tile.pos_a != tile.pos_b
                && tile.cells().iter().all(|c| self.by_coord.get(c) == Some(&id))
        });
        owned_by_tiles && self.by_coord.len() == self.tiles.len() * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_positions_cover_block() {
        let origin = Coord::new(3, -2);
        let mut cells: Vec<Coord> = [Direction::Left, Direction::Right]
            .iter()
            .flat_map(|&d| Tile::spawn(origin, d).cells())
            .collect();
        cells.sort();
        let mut block = vec![
            Coord::new(3, -2),
            Coord::new(3, -1),
            Coord::new(4, -2),
            Coord::new(4, -1),
        ];
        block.sort();
        assert_eq!(cells, block);

        let mut vertical: Vec<Coord> = [Direction::Down, Direction::Up]
            .iter()
            .flat_map(|&d| Tile::spawn(origin, d).cells())
            .collect();
        vertical.sort();
        assert_eq!(vertical, block);
    }

    #[test]
    fn test_spawned_halves_face_outward() {
        let origin = Coord::new(0, 0);
        let right = Tile::spawn(origin, Direction::Right);
        assert!(right.cells().iter().all(|c| c.x == 1));
        let left = Tile::spawn(origin, Direction::Left);
        assert!(left.cells().iter().all(|c| c.x == 0));
        let up = Tile::spawn(origin, Direction::Up);
        assert!(up.cells().iter().all(|c| c.y == 1));
        let down = Tile::spawn(origin, Direction::Down);
        assert!(down.cells().iter().all(|c| c.y == 0));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut registry = TileRegistry::new();
        let id = registry.insert(Tile::spawn(Coord::new(0, 0), Direction::Up));
        assert_eq!(registry.at(Coord::new(0, 1)), Some(id));
        assert_eq!(registry.at(Coord::new(1, 1)), Some(id));
        assert!(registry.is_consistent());

        let tile = registry.remove(id).unwrap();
        assert_eq!(tile.dir, Direction::Up);
        assert!(registry.is_empty());
        assert_eq!(registry.mapped_len(), 0);
        assert!(registry.remove(id).is_none());
        assert!(registry.get(id).is_none());
    }

    #[test]
    fn test_advance_keeps_both_cells_mapped() {
        let mut registry = TileRegistry::new();
        let id = registry.insert(Tile::spawn(Coord::new(0, 0), Direction::Right));
        registry.advance_all();
        assert_eq!(registry.at(Coord::new(2, 0)), Some(id));
        assert_eq!(registry.at(Coord::new(2, 1)), Some(id));
        assert_eq!(registry.at(Coord::new(1, 0)), None);
        assert_eq!(registry.at(Coord::new(1, 1)), None);
        assert!(registry.is_consistent());
    }

    #[test]
    fn test_advance_into_vacated_cell() {
        // Two Right tiles in a line: the trailing one moves into the cells
        // the leading one vacates.
        let mut registry = TileRegistry::new();
        let lead = registry.insert(Tile::spawn(Coord::new(0, 0), Direction::Right));
        let trail = registry.insert(Tile::spawn(Coord::new(-1, 0), Direction::Right));
        registry.advance_all();
        assert_eq!(registry.at(Coord::new(1, 0)), Some(trail));
        assert_eq!(registry.at(Coord::new(2, 0)), Some(lead));
        assert!(registry.is_consistent());
    }

    #[test]
    fn test_visual_offset_follows_direction() {
        let mut tile = Tile::spawn(Coord::new(0, 0), Direction::Down);
        tile.progress = 0.25;
        assert_eq!(tile.visual_offset(), (0.0, -0.25));
        tile.advance();
        assert_eq!(tile.visual_offset(), (0.0, 0.0));
        assert_eq!(tile.cells(), [Coord::new(0, -1), Coord::new(1, -1)]);
    }
}
