use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{snake_collided, BodyChain, GameState, Segment, SimpleRng};
use tui_snake::term::{ColorPairTable, GameView, HalfBlockGrid, PixelField, Viewport};
use tui_snake::types::{Direction, GameInput, Vector2};

/// A long body folded into a zig-zag across a 64x64 board.
fn zigzag_body() -> BodyChain {
    let mut segments = Vec::new();
    for i in 0..30 {
        let across = if i % 2 == 0 { Direction::Left } else { Direction::Right };
        segments.push(Segment::new(Direction::Up, 2));
        segments.push(Segment::new(across, 60));
    }
    BodyChain::from_segments(Vector2::new(2, 2), segments)
}

fn bench_tick(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut game = GameState::new(40, 40, &mut rng);
    let turns = [
        Some(GameInput::Left),
        Some(GameInput::Down),
        Some(GameInput::Right),
        Some(GameInput::Up),
    ];
    let mut i = 0;

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            i += 1;
            let input = if i % 3 == 0 { turns[(i / 3) % 4] } else { None };
            if !game.alive() {
                game.tick(Some(GameInput::Confirm), &mut rng);
            }
            black_box(game.tick(black_box(input), &mut rng));
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let body = zigzag_body();
    let board = Vector2::new(64, 64);

    c.bench_function("snake_collided_60_segments", |b| {
        b.iter(|| snake_collided(black_box(&body), black_box(board)))
    });
}

fn bench_half_block_encode(c: &mut Criterion) {
    let mut field = PixelField::new(Vector2::new(64, 64));
    field.draw_snake(&zigzag_body(), tui_snake::term::SNAKE_COLOR);

    c.bench_function("half_block_encode_64x64", |b| {
        b.iter(|| HalfBlockGrid::encode(black_box(&field)))
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let game = GameState::new(40, 40, &mut SimpleRng::new(1));
    let pairs = ColorPairTable::register(256).expect("256 colours");
    let mut view = GameView::new();
    let mut fb = tui_snake::term::FrameBuffer::new(80, 30);
    let vp = Viewport::new(80, 30);

    c.bench_function("render_into_40x40", |b| {
        b.iter(|| view.render_into(black_box(&game), &pairs, vp, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_collision,
    bench_half_block_encode,
    bench_render_frame
);
criterion_main!(benches);
