//! Headless end-to-end: key events through the input queue into the tick loop

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use maze_chase::config::RunConfig;
use maze_chase::core::{GameState, Mobile};
use maze_chase::input::{action_for_key, InputQueue};
use maze_chase::types::{GameAction, Point, MAX_INPUTS_PER_TICK, PELLET_SCORE};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(queue: &mut InputQueue, code: KeyCode) {
    if let Some(action) = action_for_key(key(code)) {
        queue.push(action);
    }
}

#[test]
fn test_keys_drive_agent_through_ticks() {
    let mut game = RunConfig::default()
        .load_layout()
        .map(GameState::new)
        .unwrap();
    let mut queue = InputQueue::new();

    press(&mut queue, KeyCode::Right);
    press(&mut queue, KeyCode::Char('d'));
    let report = game.advance(queue.drain()).unwrap();
    assert_eq!(report.agent_moves, 2);
    assert_eq!(game.agent().position(), Point::new(210, 90));

    // Unmapped keys queue nothing; the tick still runs.
    press(&mut queue, KeyCode::Char('x'));
    assert!(queue.is_empty());
    let report = game.advance(queue.drain()).unwrap();
    assert_eq!(report.agent_moves, 0);
    assert_eq!(game.tick_count(), 2);
}

#[test]
fn test_quit_key_ends_loop_after_tick() {
    let mut game = GameState::classic().unwrap();
    let mut queue = InputQueue::new();

    press(&mut queue, KeyCode::Char('l'));
    press(&mut queue, KeyCode::Esc);
    let mut ticks = 0;
    while !game.game_over() {
        game.advance(queue.drain()).unwrap();
        ticks += 1;
    }

    assert_eq!(ticks, 1);
    assert_eq!(game.agent().position(), Point::new(150, 90));
    assert_eq!(game.score(), PELLET_SCORE);
}

#[test]
fn test_ctrl_c_quits() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(action_for_key(ctrl_c), Some(GameAction::Quit));
    assert_eq!(action_for_key(key(KeyCode::Char('c'))), None);
}

#[test]
fn test_quit_survives_a_full_queue() {
    let mut game = GameState::classic().unwrap();
    let mut queue = InputQueue::new();

    for _ in 0..MAX_INPUTS_PER_TICK + 4 {
        press(&mut queue, KeyCode::Left);
    }
    press(&mut queue, KeyCode::Char('q'));
    assert_eq!(queue.len(), MAX_INPUTS_PER_TICK);
    assert_eq!(queue.dropped(), 5);

    let report = game.advance(queue.drain()).unwrap();
    assert!(report.quit);
    assert_eq!(report.blocked_moves as usize, MAX_INPUTS_PER_TICK - 1);
    assert!(game.game_over());
}

#[test]
fn test_pursuers_hold_one_cell_from_idle_agent() {
    // Chasers only step while more than a cell away, so a stationary agent
    // ends up boxed in but never caught.
    let mut game = GameState::classic().unwrap();
    for _ in 0..50 {
        assert_eq!(game.advance(&[]).unwrap().collisions, 0);
    }

    assert_eq!(game.lives(), 3);
    assert_eq!(game.pursuers()[0].position(), Point::new(150, 90));
    assert_eq!(game.pursuers()[2].position(), Point::new(90, 150));
    // Pinky and Clyde face walls on their diagonal and stay at spawn.
    assert_eq!(game.pursuers()[1].position(), game.pursuers()[1].spawn());
    assert_eq!(game.pursuers()[3].position(), game.pursuers()[3].spawn());
}
