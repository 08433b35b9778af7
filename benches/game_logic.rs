use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{place_food, stage_for, GameState, SimpleRng};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Direction, GameAction, Position};

const LAP: [Direction; 4] = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

fn circling_state() -> GameState {
    let mut state = GameState::new(12345);
    state.start();
    state.set_layout(
        &[Position::new(4, 2), Position::new(3, 2), Position::new(2, 2)],
        Direction::Right,
        None,
    );
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = circling_state();
    let mut step = 0usize;

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if step % 4 == 0 {
                state.apply_action(GameAction::SetDirection(LAP[(step / 4) % 4]));
            }
            step += 1;
            black_box(state.tick());
        })
    });
}

fn bench_place_food_sparse(c: &mut Criterion) {
    let snake = [Position::new(10, 10), Position::new(9, 10), Position::new(8, 10)];
    let mut rng = SimpleRng::new(7);

    c.bench_function("place_food_sparse", |b| {
        b.iter(|| black_box(place_food(&snake, 20, &mut rng)))
    });
}

fn bench_place_food_nearly_full(c: &mut Criterion) {
    // Every cell but one: sampling gives up and the free-cell scan runs.
    let snake: Vec<Position> = (0..20)
        .flat_map(|y| (0..20).map(move |x| Position::new(x, y)))
        .filter(|&p| p != Position::new(13, 17))
        .collect();
    let mut rng = SimpleRng::new(7);

    c.bench_function("place_food_nearly_full", |b| {
        b.iter(|| black_box(place_food(&snake, 20, &mut rng)))
    });
}

fn bench_stage_for(c: &mut Criterion) {
    c.bench_function("stage_for", |b| {
        b.iter(|| {
            for score in 0..32 {
                black_box(stage_for(black_box(score)));
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = circling_state();
    let snap = state.snapshot();
    let view = GameView::new();
    let vp = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_into_120x40", |b| {
        b.iter(|| view.render_into(black_box(&snap), vp, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_place_food_sparse,
    bench_place_food_nearly_full,
    bench_stage_for,
    bench_render
);
criterion_main!(benches);
