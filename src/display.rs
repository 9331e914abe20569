//! Rendering layer: all terminal drawing lives here.
//!
//! Each function receives a mutable writer and an immutable scene.  No game
//! logic is performed; this module only translates sprites into terminal
//! commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use bird_attack::entities::{BirdKind, GamePhase, Viewport, WeaponMode};
use bird_attack::scene::{Scene, Sprite, SpriteKind};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY_TEXT: Color = Color::White;
const C_CLOUD_BRIGHT: Color = Color::White;
const C_CLOUD_DIM: Color = Color::Grey;
const C_BIRD_BROWN: Color = Color::DarkYellow;
const C_BIRD_BLACK: Color = Color::DarkGrey;
const C_BIRD_RED: Color = Color::Red;
const C_LABEL: Color = Color::Yellow;
const C_BULLET: Color = Color::Yellow;
const C_PARTICLE_HOT: Color = Color::Yellow;
const C_PARTICLE_COOL: Color = Color::DarkYellow;
const C_GUN: Color = Color::Grey;
const C_FLASH: Color = Color::Yellow;
const C_GRASS: Color = Color::Green;
const C_GROUND: Color = Color::DarkGreen;
const C_HUD: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_TITLE: Color = Color::Red;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, scene: &Scene, viewport: &Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_ground(out, viewport)?;
    for sprite in &scene.sprites {
        draw_sprite(out, sprite, viewport)?;
    }

    match scene.phase {
        GamePhase::Started => draw_hud(out, scene, viewport)?,
        GamePhase::NotStarted => draw_title(out, viewport)?,
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Print `text` at a cell, clipped to the right edge of the screen.
fn put<W: Write>(
    out: &mut W,
    viewport: &Viewport,
    col: i32,
    row: i32,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    if row < 0 || row >= viewport.rows as i32 || col >= viewport.cols as i32 {
        return Ok(());
    }
    // Skip characters hanging off the left edge.
    let skip = (-col).max(0) as usize;
    let room = (viewport.cols as i32 - col.max(0)) as usize;
    let visible: String = text.chars().skip(skip).take(room).collect();
    if visible.is_empty() {
        return Ok(());
    }
    out.queue(cursor::MoveTo(col.max(0) as u16, row as u16))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(visible))?;
    Ok(())
}

/// Cell for a percentage position; may lie off screen.
fn cell_of(viewport: &Viewport, x: f32, y: f32) -> (i32, i32) {
    (
        (x / 100.0 * viewport.cols as f32).floor() as i32,
        (y / 100.0 * viewport.rows as f32).floor() as i32,
    )
}

// ── Ground ────────────────────────────────────────────────────────────────────

fn draw_ground<W: Write>(out: &mut W, viewport: &Viewport) -> std::io::Result<()> {
    let w = viewport.cols as usize;
    let bottom = viewport.rows as i32 - 1;
    let grass: String = (0..w).map(|i| if i % 6 == 2 { '^' } else { '"' }).collect();
    put(out, viewport, 0, bottom - 2, &grass, C_GRASS)?;
    put(out, viewport, 0, bottom - 1, &"▓".repeat(w), C_GROUND)?;
    Ok(())
}

// ── Sprites ───────────────────────────────────────────────────────────────────

fn draw_sprite<W: Write>(out: &mut W, sprite: &Sprite, viewport: &Viewport) -> std::io::Result<()> {
    let (col, row) = cell_of(viewport, sprite.x, sprite.y);
    match sprite.kind {
        SpriteKind::Cloud => {
            let width = ((sprite.size / viewport.cell_width_px).round() as usize).max(3);
            let color = if sprite.opacity > 0.75 { C_CLOUD_BRIGHT } else { C_CLOUD_DIM };
            put(out, viewport, col + 1, row, &"░".repeat(width - 2), color)?;
            put(out, viewport, col, row + 1, &"░".repeat(width), color)?;
        }
        SpriteKind::Bird(kind) => draw_bird(out, sprite, kind, col, row, viewport)?,
        SpriteKind::Bullet => put(out, viewport, col, row, "•", C_BULLET)?,
        SpriteKind::Particle => {
            let (glyph, color) = if sprite.opacity > 0.66 {
                ("*", C_PARTICLE_HOT)
            } else if sprite.opacity > 0.33 {
                ("+", C_PARTICLE_COOL)
            } else {
                ("·", C_PARTICLE_COOL)
            };
            put(out, viewport, col, row, glyph, color)?;
        }
        SpriteKind::Gun { flash } => draw_gun(out, sprite.rotation, flash, col, row, viewport)?,
    }
    Ok(())
}

fn draw_bird<W: Write>(
    out: &mut W,
    sprite: &Sprite,
    kind: BirdKind,
    col: i32,
    row: i32,
    viewport: &Viewport,
) -> std::io::Result<()> {
    let color = match kind {
        BirdKind::Brown => C_BIRD_BROWN,
        BirdKind::Black => C_BIRD_BLACK,
        BirdKind::Red => C_BIRD_RED,
    };
    let wing = if sprite.wing_offset < 0.0 { '^' } else { 'v' };
    let body = if sprite.facing_right {
        format!("{}o>", wing)
    } else {
        format!("<o{}", wing)
    };
    put(out, viewport, col, row, &body, color)?;
    if let Some(label) = &sprite.label {
        put(out, viewport, col, row - 1, label, C_LABEL)?;
    }
    Ok(())
}

fn draw_gun<W: Write>(
    out: &mut W,
    angle: f32,
    flash: bool,
    col: i32,
    row: i32,
    viewport: &Viewport,
) -> std::io::Result<()> {
    // Sprite (3 rows):
    //    ✶      ← muzzle flash
    //    |      ← barrel, leans with the angle
    //   ▟█▙     ← base
    let (barrel, lean) = if angle < -15.0 {
        ("\\", -1)
    } else if angle > 15.0 {
        ("/", 1)
    } else {
        ("|", 0)
    };
    put(out, viewport, col - 1, row, "▟█▙", C_GUN)?;
    put(out, viewport, col + lean, row - 1, barrel, C_GUN)?;
    if flash {
        put(out, viewport, col + 2 * lean, row - 2, "✶", C_FLASH)?;
    }
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, scene: &Scene, viewport: &Viewport) -> std::io::Result<()> {
    put(out, viewport, 1, 0, &format!("Score: {}", scene.score), C_HUD)?;

    let button = "[N] New game";
    let bx = viewport.cols as i32 - button.chars().count() as i32 - 1;
    put(out, viewport, bx, 0, button, C_SKY_TEXT)?;

    let hint = match scene.mode {
        WeaponMode::Click => "Click a bird to shoot it!",
        WeaponMode::Fixed => "Click or SPACE to fire",
        WeaponMode::Aimable => "Click or SPACE to fire  ← → / A D aim  drag below to swipe",
    };
    let hx = (viewport.cols as i32 - hint.chars().count() as i32) / 2;
    put(out, viewport, hx, viewport.rows as i32 - 1, hint, C_HINT)?;
    Ok(())
}

// ── Title overlay ─────────────────────────────────────────────────────────────

fn draw_title<W: Write>(out: &mut W, viewport: &Viewport) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════════╗", C_TITLE),
        ("║     BIRD  ATTACK     ║", C_TITLE),
        ("╚══════════════════════╝", C_TITLE),
        ("Shoot the birds down!", C_SKY_TEXT),
        ("Red birds are worth more", C_BIRD_RED),
        ("← → / A D : aim the gun", C_HINT),
        ("ENTER - Start   Q - Quit", C_SKY_TEXT),
    ];

    let cx = viewport.cols as i32 / 2;
    let start_row = viewport.rows as i32 / 2 - lines.len() as i32 / 2;

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx - msg.chars().count() as i32 / 2;
        put(out, viewport, col, start_row + i as i32, msg, *color)?;
    }
    Ok(())
}
