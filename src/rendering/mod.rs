use std::collections::HashMap;

use macroquad::prelude::*;

use crate::application::{Camera, Phase, Simulation};
use crate::domain::{Board, Direction, RenderHandle, Tile, TileId, TileRenderer, World};
use crate::ui::{Button, panel_x, board_area_width, board_area_height, CELL_SIZE};

/// 9-bit colour code per direction: three bits each for red, green, blue
pub const fn color_code(dir: Direction) -> u16 {
    match dir {
        Direction::Right => 7,
        Direction::Up => 7 << 6,
        Direction::Left => 7 | (7 << 3),
        Direction::Down => 7 << 3,
    }
}

/// Expand a 9-bit colour code to an opaque colour
pub fn palette(code: u16) -> Color {
    let channel = |shift: u16| ((code >> shift) & 7) as f32 / 7.0;
    Color::new(channel(0), channel(3), channel(6), 1.0)
}

/// Render payload of one tile
#[derive(Clone, Copy, Debug)]
pub struct Sprite {
    pub color: Color,
}

/// Renderer collaborator for the window: keeps one sprite per attached tile
#[derive(Default)]
pub struct SpriteBank {
    next: u64,
    sprites: HashMap<RenderHandle, Sprite>,
}

impl SpriteBank {
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn get(&self, handle: RenderHandle) -> Option<&Sprite> {
        self.sprites.get(&handle)
    }
}

impl TileRenderer for SpriteBank {
    fn attach(&mut self, _id: TileId, tile: &Tile) -> RenderHandle {
        self.next += 1;
        let handle = RenderHandle(self.next);
        let sprite = Sprite { color: palette(color_code(tile.dir)) };
        self.sprites.insert(handle, sprite);
        handle
    }

    fn detach(&mut self, handle: RenderHandle) {
        self.sprites.remove(&handle);
    }
}

/// Centre of the diamond in board space: cells span `[-(k-1), k+1)`
pub fn board_center() -> (f32, f32) {
    (1.0, 1.0)
}

/// Draw the playable cells of the board
pub fn draw_board(board: &Board, camera: &Camera) {
    let cell_size = CELL_SIZE * camera.zoom;
    let area_width = board_area_width();
    let area_height = board_area_height();
    let cell_color = Color::from_rgba(25, 25, 25, 255);
    let line_color = Color::from_rgba(45, 45, 45, 255);
    let draw_lines = cell_size >= 4.0;

    for (x, y, cell) in board.iter_cells() {
        if cell.is_outside() {
            continue;
        }
        let coord = board.to_coord(x, y);
        let (sx, sy) = camera.board_to_screen(coord.x as f32, (coord.y + 1) as f32, CELL_SIZE);

        // Skip if outside viewport
        if sx + cell_size < 0.0 || sx > area_width || sy + cell_size < 0.0 || sy > area_height {
            continue;
        }

        draw_rectangle(sx, sy, cell_size, cell_size, cell_color);
        if draw_lines {
            draw_rectangle_lines(sx, sy, cell_size, cell_size, 1.0, line_color);
        }
    }
}

/// Draw every live tile at its interpolated position
pub fn draw_tiles(world: &World, sprites: &SpriteBank, camera: &Camera) {
    let scale = CELL_SIZE * camera.zoom;
    let area_width = board_area_width();
    let area_height = board_area_height();

    for (_, tile) in world.tiles().iter() {
        let Some(sprite) = tile.handle.and_then(|h| sprites.get(h)) else { continue };
        let (ox, oy) = tile.visual_offset();
        let min_x = tile.pos_a.x.min(tile.pos_b.x) as f32 + ox;
        let max_y = tile.pos_a.y.max(tile.pos_b.y) as f32 + oy;
        let width = ((tile.pos_a.x - tile.pos_b.x).abs() + 1) as f32 * scale;
        let height = ((tile.pos_a.y - tile.pos_b.y).abs() + 1) as f32 * scale;
        let (sx, sy) = camera.board_to_screen(min_x, max_y + 1.0, CELL_SIZE);

        if sx + width < 0.0 || sx > area_width || sy + height < 0.0 || sy > area_height {
            continue;
        }

        draw_rectangle(sx, sy, width, height, sprite.color);
        if scale >= 4.0 {
            draw_rectangle_lines(sx, sy, width, height, 1.0, BLACK);
            draw_arrow(tile.dir, vec2(sx + width / 2.0, sy + height / 2.0), scale * 0.4);
        }
    }
}

/// Small triangle pointing along the tile's travel direction
fn draw_arrow(dir: Direction, center: Vec2, size: f32) {
    let (dx, dy) = dir.delta();
    // screen y grows downwards
    let forward = vec2(dx as f32, -dy as f32);
    let side = vec2(-forward.y, forward.x);
    let tip = center + forward * size;
    let back = center - forward * size * 0.5;
    draw_triangle(tip, back + side * size * 0.6, back - side * size * 0.6, Color::from_rgba(0, 0, 0, 160));
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Idle",
        Phase::GrowAndPrecheck => "Growing",
        Phase::Interpolating => "Moving",
        Phase::DiscreteUpdate => "Updating",
    }
}

/// Draw the control panel with buttons and simulation info
pub fn draw_controls(sim: &Simulation<SpriteBank>, camera: &Camera, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, crate::ui::PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let controls = [
        ("Controls:", 140.0, 14.0, WHITE),
        ("Space: Next cycle", 155.0, 12.0, GRAY),
        ("P: Strategy", 168.0, 12.0, GRAY),
        ("Wheel: Zoom", 181.0, 12.0, GRAY),
        ("Mid-drag: Pan", 194.0, 12.0, GRAY),
        ("H: Fit board", 207.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, y, size, color)| {
        draw_text_label(text, px, *y, *size, *color);
    });

    let world = sim.world();
    let accent = Color::from_rgba(0, 255, 150, 255);
    let soft = Color::from_rgba(180, 180, 180, 255);
    let idle = sim.phase() == Phase::Idle;

    let mut lines: Vec<(String, f32, Color)> = vec![
        ("Order:".to_owned(), 16.0, WHITE),
        (format!("{}", world.board().order()), 20.0, accent),
        ("Tiles:".to_owned(), 16.0, WHITE),
        (format!("{} ({} sprites)", world.tiles().len(), sim.renderer().len()), 14.0, soft),
        ("Phase:".to_owned(), 16.0, WHITE),
        (
            format!("{} {:.0}%", phase_name(sim.phase()), sim.progress() * 100.0),
            16.0,
            if idle { Color::from_rgba(255, 165, 0, 255) } else { Color::from_rgba(0, 255, 0, 255) },
        ),
    ];
    if let Some(report) = sim.last_report {
        lines.push(("Last cycle:".to_owned(), 16.0, WHITE));
        lines.push((format!("-{} pairs  +{} pairs", report.collisions, report.spawned_pairs), 13.0, soft));
    }
    lines.push((format!("{} | {:.1}ms", sim.strategy.name(), sim.last_step_time_ms), 13.0, soft));
    lines.push((format!("{:.0} ticks/s | FPS {}", sim.tick_rate(), get_fps()), 12.0, GRAY));
    lines.push((format!("Seed {}", sim.seed()), 12.0, GRAY));
    lines.push((format!("Zoom {:.2}x{}", camera.zoom, if camera.follow { " (fit)" } else { "" }), 12.0, GRAY));

    let mut y = 240.0;
    for (text, size, color) in &lines {
        y += size + 6.0;
        draw_text_label(text, px, y, *size, *color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coord;
    use slotmap::SlotMap;

    #[test]
    fn test_palette_channels() {
        assert_eq!(palette(color_code(Direction::Right)), Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(palette(color_code(Direction::Left)), Color::new(1.0, 1.0, 0.0, 1.0));
        assert_eq!(palette(color_code(Direction::Down)), Color::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(palette(color_code(Direction::Up)), Color::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_sprite_bank_attach_detach() {
        let mut ids: SlotMap<TileId, ()> = SlotMap::with_key();
        let id = ids.insert(());
        let mut bank = SpriteBank::default();
        let tile = Tile::spawn(Coord::new(0, 0), Direction::Up);
        let handle = bank.attach(id, &tile);
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.get(handle).map(|s| s.color), Some(palette(color_code(Direction::Up))));
        let other = bank.attach(id, &Tile::spawn(Coord::new(0, 0), Direction::Left));
        assert_ne!(other, handle);
        assert_eq!(bank.len(), 2);
        bank.detach(other);
        bank.detach(handle);
        assert!(bank.is_empty());
    }
}
