use super::{Tile, TileId};

/// Opaque handle returned by a renderer for an attached tile
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RenderHandle(pub u64);

/// Collaborator that owns the visual payload of each tile.
///
/// The world calls `attach` exactly once when a tile spawns and `detach`
/// exactly once before the tile is destroyed.
pub trait TileRenderer {
    fn attach(&mut self, id: TileId, tile: &Tile) -> RenderHandle;

    fn detach(&mut self, handle: RenderHandle);
}

/// Renderer for headless runs: hands out sequential handles, draws nothing
#[derive(Default)]
pub struct NullRenderer {
    next: u64,
}

impl TileRenderer for NullRenderer {
    fn attach(&mut self, _id: TileId, _tile: &Tile) -> RenderHandle {
        self.next += 1;
        RenderHandle(self.next)
    }

    fn detach(&mut self, _handle: RenderHandle) {}
}
