use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use maze_chase::core::{GameSnapshot, GameState};
use maze_chase::input::InputQueue;
use maze_chase::term::{FrameBuffer, GameView, Viewport};
use maze_chase::types::GameAction;

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

// Both gates share the global counter; run them one at a time.
static GATE: std::sync::Mutex<()> = std::sync::Mutex::new(());

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

const SCRIPT: [GameAction; 8] = [
    GameAction::MoveRight,
    GameAction::MoveRight,
    GameAction::MoveDown,
    GameAction::MoveLeft,
    GameAction::MoveUp,
    GameAction::MoveRight,
    GameAction::MoveDown,
    GameAction::MoveDown,
];

#[test]
fn core_tick_does_not_allocate() {
    let _guard = GATE.lock().unwrap();

    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut gs = GameState::classic().unwrap();
    let mut queue = InputQueue::new();
    let _ = gs.advance(&[]);

    let allocs = with_alloc_counting(|| {
        for action in SCRIPT.iter().cycle().take(400) {
            queue.push(*action);
            let _ = gs.advance(queue.drain());
        }
    });

    assert_eq!(allocs, 0);
}

#[test]
fn snapshot_and_render_do_not_allocate_after_warmup() {
    let _guard = GATE.lock().unwrap();

    let mut gs = GameState::classic().unwrap();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    // Warm-up sizes every buffer.
    gs.snapshot_into(&mut snap);
    view.render_into(&snap, vp, &mut fb);

    let allocs = with_alloc_counting(|| {
        for action in SCRIPT.iter().cycle().take(50) {
            let _ = gs.advance(&[*action]);
            gs.snapshot_into(&mut snap);
            view.render_into(&snap, vp, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
