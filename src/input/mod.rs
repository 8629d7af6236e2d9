use macroquad::prelude::*;

use crate::application::{Camera, Simulation};
use crate::rendering::SpriteBank;
use crate::ui::{Button, board_area_width};

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Handle pan with middle mouse button drag over the board area
pub fn handle_pan(camera: &mut Camera, mouse_pos: (f32, f32)) {
    let dragging = is_mouse_button_down(MouseButton::Middle) && mouse_pos.0 < board_area_width();
    camera.drag(dragging.then_some(mouse_pos));
}

/// Keyboard controls: Space resumes, P toggles the move strategy, H refits
pub fn process_keyboard_input(sim: &mut Simulation<SpriteBank>, camera: &mut Camera) {
    if is_key_pressed(KeyCode::Space) {
        sim.resume();
    }
    if is_key_pressed(KeyCode::P) {
        sim.toggle_strategy();
    }
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }
}

/// Process button clicks: index 0 is Next, index 1 is Strategy
pub fn process_button_clicks(sim: &mut Simulation<SpriteBank>, buttons: &[Button], mouse_pos: (f32, f32)) {
    for (idx, btn) in buttons.iter().enumerate() {
        if !btn.is_clicked(mouse_pos) {
            continue;
        }
        match idx {
            0 => {
                sim.resume();
            }
            1 => sim.toggle_strategy(),
            _ => {}
        }
    }
}
