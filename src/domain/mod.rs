mod cell;
mod board;
mod tiles;
mod render;
mod strategy;
mod world;

pub use cell::{Cell, Direction};
pub use board::{Board, Coord};
pub use tiles::{Tile, TileId, TileRegistry};
pub use render::{NullRenderer, RenderHandle, TileRenderer};
pub use strategy::MoveStrategy;
pub use world::{InvariantError, World};
