use macroquad::prelude::*;
use tracing::{error, info};
use aztec_diamond::{
    Camera, Config, Simulation,
    application::Phase,
    rendering::{self, SpriteBank},
    ui, input,
};

/// Upper bound on simulation ticks per frame after a stall
const MAX_TICKS_PER_FRAME: u32 = 8;

fn window_conf() -> Conf {
    Conf {
        window_title: "Aztec Diamond - Domino Shuffling".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    aztec_diamond::init_logging();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return;
        }
    };
    let mut sim = match Simulation::new(&config, SpriteBank::default()) {
        Ok(sim) => sim,
        Err(e) => {
            error!("{e}");
            return;
        }
    };
    info!(tick_rate = config.tick_rate, "window open, Space advances one cycle");

    let mut camera = Camera::new();
    let tick_interval = 1.0 / config.tick_rate;
    let mut accumulator = 0.0f32;

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(sim.phase() != Phase::Idle);

        input::process_button_clicks(&mut sim, &buttons, mouse_pos);
        input::process_keyboard_input(&mut sim, &mut camera);
        input::handle_zoom(&mut camera);
        input::handle_pan(&mut camera, mouse_pos);

        // Fixed-timestep driver: one simulation tick per elapsed interval
        accumulator += get_frame_time();
        let mut ticks = 0;
        while accumulator >= tick_interval && ticks < MAX_TICKS_PER_FRAME {
            sim.tick();
            accumulator -= tick_interval;
            ticks += 1;
        }
        if ticks == MAX_TICKS_PER_FRAME {
            accumulator = 0.0;
        }

        // Zoom out as the tiles slide into the new outer ring
        let reveal = if sim.phase() == Phase::Idle { 1.0 } else { sim.progress() };
        let size = sim.world().board().size() as f32;
        let extent = (size - 2.0 + 2.0 * reveal).max(2.0) + 2.0;
        camera.follow_board(
            extent,
            rendering::board_center(),
            (ui::board_area_width(), ui::board_area_height()),
            ui::CELL_SIZE,
        );

        clear_background(BLACK);
        rendering::draw_board(sim.world().board(), &camera);
        rendering::draw_tiles(sim.world(), sim.renderer(), &camera);
        rendering::draw_controls(&sim, &camera, &buttons, mouse_pos);

        next_frame().await;
    }
}
