use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::engine::{GameSession, MemoryStore};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Direction, GameAction, Position};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

const LAP: [Direction; 4] = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

#[test]
fn core_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut gs = GameState::new(1);
    gs.start();
    gs.set_layout(
        &[Position::new(4, 2), Position::new(3, 2), Position::new(2, 2)],
        Direction::Right,
        None,
    );
    let mut snap = GameSnapshot::default();

    // Warm-up: one lap grows the ring buffer and the snapshot once.
    for dir in LAP {
        gs.apply_action(GameAction::SetDirection(dir));
        for _ in 0..4 {
            gs.tick();
        }
    }
    gs.snapshot_into(&mut snap);

    let allocs = with_alloc_counting(|| {
        for _ in 0..50 {
            for dir in LAP {
                let _ = gs.apply_action(GameAction::SetDirection(dir));
                for _ in 0..4 {
                    let _ = gs.tick();
                }
                gs.snapshot_into(&mut snap);
            }
            let _ = gs.apply_action(GameAction::TogglePause);
            let _ = gs.apply_action(GameAction::TogglePause);
            let _ = gs.apply_action(GameAction::CycleDifficulty);
        }
    });

    assert!(!gs.game_over());
    assert_eq!(allocs, 0);
}

#[test]
fn session_tick_and_render_do_not_allocate() {
    let mut state = GameState::new(1);
    state.set_layout(&[Position::new(3, 3), Position::new(2, 3)], Direction::Right, None);
    let mut session = GameSession::new(state, MemoryStore::new());
    let view = GameView::new();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    let mut now = Instant::now();
    session.apply_action(GameAction::Start, now);
    let step = Duration::from_millis(session.state().interval_ms() as u64);

    for dir in LAP {
        session.apply_action(GameAction::SetDirection(dir), now);
        for _ in 0..4 {
            now += step;
            session.poll(now);
        }
    }
    view.render_into(session.snapshot(), vp, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..25 {
            for dir in LAP {
                let _ = session.apply_action(GameAction::SetDirection(dir), now);
                for _ in 0..4 {
                    now += step;
                    let _ = session.poll(now);
                    view.render_into(session.snapshot(), vp, &mut fb);
                }
            }
        }
    });

    assert!(!session.state().game_over());
    assert_eq!(allocs, 0);
}
