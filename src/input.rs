//! Translation of raw terminal events into game commands.
//!
//! Mouse drags that start in the lower part of the screen act like touch
//! swipes and rotate the gun; a press/release without rotation is a click.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::compute::Command;
use crate::config::WeaponConfig;
use crate::entities::{Viewport, WeaponMode};
use crate::weapon::{AimDirection, SwipeTracker};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Command(Command),
    Resize { cols: u16, rows: u16 },
    Quit,
}

#[derive(Debug, Default)]
pub struct InputMapper {
    swipe: SwipeTracker,
    /// Where a press in the swipe region landed, fired on release unless
    /// the gesture turned the gun.
    pending_click: Option<(f32, f32)>,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(
        &mut self,
        event: &Event,
        viewport: &Viewport,
        mode: WeaponMode,
        cfg: &WeaponConfig,
    ) -> Option<Action> {
        match event {
            Event::Key(key) => map_key(key),
            Event::Mouse(mouse) => self.map_mouse(mouse, viewport, mode, cfg),
            Event::Resize(cols, rows) => Some(Action::Resize { cols: *cols, rows: *rows }),
            _ => None,
        }
    }

    fn map_mouse(
        &mut self,
        mouse: &MouseEvent,
        viewport: &Viewport,
        mode: WeaponMode,
        cfg: &WeaponConfig,
    ) -> Option<Action> {
        let (x, y) = viewport.cell_to_pct(mouse.column, mouse.row);
        let x_px = (mouse.column as f32 + 0.5) * viewport.cell_width_px;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Only a rotatable gun can be swiped; elsewhere every press fires.
                if mode == WeaponMode::Aimable && self.swipe.press(x_px, y, cfg) {
                    self.pending_click = Some((x, y));
                    None
                } else {
                    self.pending_click = None;
                    Some(Action::Command(Command::FireAt { x, y }))
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => self
                .swipe
                .drag(x_px, cfg)
                .map(|delta| Action::Command(Command::AimBy(delta))),
            MouseEventKind::Up(MouseButton::Left) => {
                let rotated = self.swipe.release();
                match self.pending_click.take() {
                    Some((px, py)) if !rotated => {
                        Some(Action::Command(Command::FireAt { x: px, y: py }))
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

fn map_key(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let repeat = key.kind == KeyEventKind::Repeat;

    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Action::Command(Command::Aim(AimDirection::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Action::Command(Command::Aim(AimDirection::Right))
        }
        // Only aiming follows key repeat; one-shot actions need a fresh press.
        _ if repeat => return None,
        KeyCode::Char(' ') => Action::Command(Command::FireGun),
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
            Action::Command(Command::Start)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Action::Command(Command::Reset)
        }
        _ => return None,
    };
    Some(action)
}
