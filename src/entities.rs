//! All game entity types: pure data, no game logic.
//!
//! Positions and velocities are in percentage units of the play area
//! (x: 0 = left edge, 100 = right edge; y: 0 = top, 100 = bottom).

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BirdKind {
    Brown,
    Black,
    Red,
}

impl BirdKind {
    pub const ALL: [BirdKind; 3] = [BirdKind::Brown, BirdKind::Black, BirdKind::Red];

    /// Visual size in pixels.
    pub fn size(self) -> f32 {
        match self {
            BirdKind::Brown => 30.0,
            BirdKind::Black => 35.0,
            BirdKind::Red => 45.0,
        }
    }

    /// Inclusive range of points a bird of this kind can be worth.
    pub fn points_range(self) -> (u32, u32) {
        match self {
            BirdKind::Brown => (10, 24),
            BirdKind::Black => (20, 39),
            BirdKind::Red => (40, 69),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Started,
}

/// How the player shoots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeaponMode {
    /// Clicking a bird destroys it directly; no projectiles.
    Click,
    /// Bullets always leave the gun straight up.
    Fixed,
    /// Bullets follow the gun angle, which the player can rotate.
    Aimable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudMode {
    /// Clouds appear at random while the game runs.
    Random,
    /// A fixed set of clouds is placed when the game starts.
    Seeded,
}

// ── Sky entities ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bird {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    pub points: u32,
    /// Visual size in pixels; converted to percentage units via `Viewport`.
    pub size: f32,
    pub kind: BirdKind,
    /// Radians; drives the flapping animation.
    pub wing_phase: f32,
}

impl Bird {
    /// Birds travelling right face right.
    pub fn faces_right(&self) -> bool {
        self.speed_x > 0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cloud {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
    pub speed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub life: i32,
    pub max_life: i32,
}

impl Particle {
    /// Fades linearly from 1.0 to 0.0 over the particle's life.
    pub fn opacity(&self) -> f32 {
        if self.max_life <= 0 {
            return 0.0;
        }
        (self.life as f32 / self.max_life as f32).clamp(0.0, 1.0)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub speed_x: f32,
    pub speed_y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Gun {
    /// Degrees from vertical; negative tilts left.
    pub angle: f32,
    /// Remaining ticks of muzzle flash after a shot.
    pub flash_ticks: u32,
}

impl Default for Gun {
    fn default() -> Self {
        Gun { angle: 0.0, flash_ticks: 0 }
    }
}

// ── Play area ─────────────────────────────────────────────────────────────────

/// Size of the play area in terminal cells, plus the pixel size of a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub cell_width_px: f32,
    pub cell_height_px: f32,
}

impl Viewport {
    pub fn width_px(&self) -> f32 {
        self.cols.max(1) as f32 * self.cell_width_px
    }

    pub fn height_px(&self) -> f32 {
        self.rows.max(1) as f32 * self.cell_height_px
    }

    /// Horizontal extent of `size_px` in percentage units.
    pub fn width_pct(&self, size_px: f32) -> f32 {
        size_px / self.width_px() * 100.0
    }

    /// Vertical extent of `size_px` in percentage units.
    pub fn height_pct(&self, size_px: f32) -> f32 {
        size_px / self.height_px() * 100.0
    }

    /// Centre of a bird in percentage units.
    pub fn bird_center(&self, bird: &Bird) -> (f32, f32) {
        (
            bird.x + self.width_pct(bird.size / 2.0),
            bird.y + self.height_pct(bird.size / 2.0),
        )
    }

    /// Percentage position of the centre of a terminal cell.
    pub fn cell_to_pct(&self, col: u16, row: u16) -> (f32, f32) {
        let cols = self.cols.max(1) as f32;
        let rows = self.rows.max(1) as f32;
        (
            (col as f32 + 0.5) / cols * 100.0,
            (row as f32 + 0.5) / rows * 100.0,
        )
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub phase: GamePhase,
    pub mode: WeaponMode,
    pub birds: Vec<Bird>,
    pub bullets: Vec<Bullet>,
    pub particles: Vec<Particle>,
    pub clouds: Vec<Cloud>,
    pub gun: Gun,
    pub score: u32,
    /// Ticks since the current game started.
    pub frame: u64,
    /// Next id handed to a spawned entity.
    pub next_id: u64,
    pub viewport: Viewport,
}

impl GameState {
    /// Reserve a fresh entity id.
    pub fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Started
    }
}
