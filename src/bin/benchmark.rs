//! Performance benchmark comparing the serial and parallel move passes

use std::time::Instant;
use aztec_diamond::domain::{MoveStrategy, NullRenderer, World};
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Grow a fully tiled diamond of the given order
fn build_world(order: usize, seed: u64) -> World {
    let mut world = World::new();
    let mut renderer = NullRenderer::default();
    let mut rng = Pcg32::seed_from_u64(seed);
    for _ in 0..order {
        world.grow();
        world.resolve_collisions(&mut renderer);
        world.advance(&mut rng, &mut renderer, MoveStrategy::Serial);
    }
    world
}

/// Average milliseconds for the board move pass alone
fn benchmark_move_pass(world: &World, strategy: MoveStrategy, iterations: u32) -> f64 {
    let mut board = world.board().clone();
    board.grow();

    let start = Instant::now();
    for _ in 0..iterations {
        let moved = match strategy {
            MoveStrategy::Serial => board.shifted(),
            MoveStrategy::Parallel => board.shifted_parallel(),
        };
        std::hint::black_box(moved);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Average milliseconds per full growth+collision+move+spawn cycle
fn benchmark_cycles(order: usize, strategy: MoveStrategy, cycles: u32) -> f64 {
    let mut world = build_world(order, 7);
    let mut renderer = NullRenderer::default();
    let mut rng = Pcg32::seed_from_u64(11);

    let start = Instant::now();
    for _ in 0..cycles {
        world.grow();
        world.resolve_collisions(&mut renderer);
        world.advance(&mut rng, &mut renderer, strategy);
    }
    start.elapsed().as_secs_f64() * 1000.0 / cycles as f64
}

fn main() {
    println!("=== Aztec Diamond Move Pass Benchmark ===\n");

    let orders = [50, 100, 200, 400];
    let iterations = 20;

    println!("{:>8} {:>12} {:>12} {:>12} {:>10}",
        "Order", "Cells", "Serial", "Parallel", "Speedup");
    println!("{:-<60}", "");

    for order in orders {
        let world = build_world(order, 42);
        let serial_ms = benchmark_move_pass(&world, MoveStrategy::Serial, iterations);
        let parallel_ms = benchmark_move_pass(&world, MoveStrategy::Parallel, iterations);
        let side = world.board().size() + 2;

        println!(
            "{:>8} {:>12} {:>12.2} {:>12.2} {:>9.1}x",
            order,
            side * side,
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Full cycles from order 200 (10 cycles) ===\n");

    for strategy in MoveStrategy::all() {
        let ms = benchmark_cycles(200, strategy, 10);
        println!("{:<10} {:.2} ms/cycle", strategy.name(), ms);
    }

    println!("\n=== Order 6 tiling ===\n");
    print!("{}", build_world(6, 1).board());
}
