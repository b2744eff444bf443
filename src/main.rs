//! Terminal front-end: input wiring, frame clock and rendering.
//!
//! Usage: `asteroid_shooter [config.toml]`.  Logs go to stderr and are
//! filtered by `RUST_LOG`; redirect them (`2>game.log`) since the game owns
//! the alternate screen.

mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{debug, info};
use rand::thread_rng;

use asteroid_shooter::compute::{
    fire_projectile, init_state, reset_game, set_intent, start_game, tick,
};
use asteroid_shooter::config::GameConfig;
use asteroid_shooter::entities::{Direction, GameEvent, GameState, GameStatus};
use asteroid_shooter::error::Result;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

// ── Simultaneous-input constants ──────────────────────────────────────────────

/// Min frames between shots while Space is held.
/// 6 frames @ 30 FPS = 5 shots/sec, which keeps the projectile cap meaningful.
const SHOOT_COOLDOWN: u32 = 6;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// Keys that steer each direction.
const DIRECTION_KEYS: [(Direction, [KeyCode; 3]); 4] = [
    (Direction::Up, [KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')]),
    (Direction::Down, [KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')]),
    (Direction::Left, [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
    (Direction::Right, [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
];

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key.  Each frame the four intent flags are refreshed from
/// the keys that are still "fresh", so diagonal movement and shooting can be
/// held together.  Terminals with keyboard enhancement also send `Release`
/// events, which drop the key immediately.
///
/// Every input only changes the state between ticks; the simulation sees it
/// on the next `tick` call.
fn game_loop<W: Write>(
    out: &mut W,
    mut state: GameState,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let mut rng = thread_rng();

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut shoot_cooldown: u32 = 0;
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                // Press: record key + handle one-shot actions
                KeyEventKind::Press => {
                    key_frame.insert(code.clone(), frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Enter | KeyCode::Char(' ')
                            if state.status() == GameStatus::Menu =>
                        {
                            state = start_game(&state, &mut rng);
                            // Don't let the start key double as a shot.
                            shoot_cooldown = SHOOT_COOLDOWN;
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if state.status() == GameStatus::GameOver =>
                        {
                            state = reset_game(&state, &mut rng);
                        }
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code.clone(), frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Apply held-key intent every frame ─────────────────────────────────
        for (direction, keys) in &DIRECTION_KEYS {
            let held = keys.iter().any(|k| is_held(&key_frame, k, frame));
            state = set_intent(&state, *direction, held);
        }

        if state.status() == GameStatus::Playing
            && shoot_cooldown == 0
            && is_held(&key_frame, &KeyCode::Char(' '), frame)
        {
            state = fire_projectile(&state);
            shoot_cooldown = SHOOT_COOLDOWN;
        }
        shoot_cooldown = shoot_cooldown.saturating_sub(1);

        // ── Simulate & draw ───────────────────────────────────────────────────
        let (cols, rows) = terminal::size()?;
        let (width, height) = display::field_bounds(cols, rows);
        state = tick(&state, width, height, &mut rng);

        for event in state.drain_events() {
            match event {
                GameEvent::GameOver { score } => info!("run ended, final score {score}"),
                other => debug!("{other:?}"),
            }
        }

        display::render(out, &state, cols, rows)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn load_config() -> Result<GameConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let config = GameConfig::load_from_file(&path)?;
            info!("loaded configuration from {path}");
            Ok(config)
        }
        None => Ok(GameConfig::default()),
    }
}

fn run<W: Write>(out: &mut W, config: GameConfig, rx: &mpsc::Receiver<Event>) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let (width, height) = display::field_bounds(cols, rows);
    game_loop(out, init_state(config, width, height), rx)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Fail on a bad config before touching the terminal.
    let config = load_config()?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, config, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
