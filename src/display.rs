//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! simulation coordinates into terminal cells and queues draw commands.

use std::io::Write;

use asteroid_shooter::entities::{GameState, GameStatus, Vec2};
use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

// ── Cell geometry ─────────────────────────────────────────────────────────────

/// Simulation units covered by one terminal column / row.  Rows are roughly
/// twice as tall as columns are wide, so the aspect ratio stays square.
pub const UNITS_PER_COL: f32 = 10.0;
pub const UNITS_PER_ROW: f32 = 20.0;

/// First column / row inside the border.
const FIELD_LEFT: u16 = 1;
const FIELD_TOP: u16 = 2;

/// Simulation bounds for a terminal of `cols × rows` cells: everything inside
/// the border, minus the HUD row and the controls hint row.
pub fn field_bounds(cols: u16, rows: u16) -> (f32, f32) {
    let inner_cols = cols.saturating_sub(2);
    let inner_rows = rows.saturating_sub(4);
    (
        inner_cols as f32 * UNITS_PER_COL,
        inner_rows as f32 * UNITS_PER_ROW,
    )
}

/// Terminal cell for a simulation point, or `None` when it lies outside the
/// visible field (off-screen spawns, wrapped asteroids).
fn to_cell(pos: Vec2, state: &GameState) -> Option<(u16, u16)> {
    if pos.x < 0.0 || pos.y < 0.0 || pos.x >= state.width || pos.y >= state.height {
        return None;
    }
    let col = FIELD_LEFT + (pos.x / UNITS_PER_COL) as u16;
    let row = FIELD_TOP + (pos.y / UNITS_PER_ROW) as u16;
    Some((col, row))
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_ASTEROID: Color = Color::DarkYellow;
const C_ENEMY: Color = Color::Green;
const C_PROJECTILE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, cols, rows)?;

    match state.status {
        GameStatus::Menu => draw_menu(out, cols, rows)?,
        GameStatus::Playing => {
            draw_hud(out, state)?;
            draw_field(out, state)?;
            draw_controls_hint(out, rows)?;
        }
        GameStatus::GameOver => {
            draw_hud(out, state)?;
            draw_game_over(out, state, cols, rows)?;
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let w = cols as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, rows.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", state.score())))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_field<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    for pos in state.asteroid_positions() {
        draw_glyph(out, state, pos, "@", C_ASTEROID)?;
    }
    for pos in state.enemy_positions() {
        draw_glyph(out, state, pos, "▼", C_ENEMY)?;
    }
    for pos in state.projectile_positions() {
        draw_glyph(out, state, pos, "║", C_PROJECTILE)?;
    }
    if let Some(pos) = state.player_position() {
        draw_glyph(out, state, pos, "▲", C_PLAYER)?;
    }
    Ok(())
}

fn draw_glyph<W: Write>(
    out: &mut W,
    state: &GameState,
    pos: Vec2,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    if let Some((col, row)) = to_cell(pos, state) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("←↑↓→ / WASD : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    lines: &[(String, Color)],
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}

fn draw_menu<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let lines = [
        ("★  ASTEROID  SHOOTER  ★".to_string(), Color::Cyan),
        (String::new(), Color::Reset),
        ("Shoot the drones, dodge the rocks.".to_string(), Color::White),
        ("Rocks absorb your shots.".to_string(), Color::DarkGrey),
        (String::new(), Color::Reset),
        ("ENTER / SPACE - Start   Q - Quit".to_string(), Color::Yellow),
    ];
    draw_centered(out, &lines, cols, rows)
}

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let lines = [
        ("╔════════════════════╗".to_string(), Color::Red),
        ("║    GAME  OVER      ║".to_string(), Color::Red),
        ("╚════════════════════╝".to_string(), Color::Red),
        (format!("Final Score: {:>6}", state.score()), Color::Yellow),
        ("R - Play Again  Q - Quit".to_string(), Color::White),
    ];
    draw_centered(out, &lines, cols, rows)
}
