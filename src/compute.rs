//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (plus the config and, where needed, an RNG handle) and
//! returns a brand-new `GameState`.  Side effects are limited to the
//! injected RNG.

use rand::Rng;
use tracing::{debug, info, trace};

use crate::collision::{bird_at, resolve_bullet_hits};
use crate::config::GameConfig;
use crate::entities::{CloudMode, GamePhase, GameState, Gun, Viewport, WeaponMode};
use crate::kinematics::{advance_birds, advance_bullets, advance_clouds, advance_particles, cool_gun};
use crate::spawner::{is_early_spawn, particle_burst, seeded_clouds, spawn_bird, spawn_cloud};
use crate::weapon::{aim_by_swipe, aim_step, fire, AimDirection};

/// Player intents, already translated from raw input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Start,
    /// Abandon the current game and return to the title screen.
    Reset,
    Aim(AimDirection),
    /// Horizontal swipe distance in pixels.
    AimBy(f32),
    /// Fire the gun (keyboard).
    FireGun,
    /// Pointer click at a percentage position.
    FireAt { x: f32, y: f32 },
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the title-screen state for a given weapon mode and play area.
pub fn init_state(mode: WeaponMode, viewport: Viewport) -> GameState {
    GameState {
        phase: GamePhase::NotStarted,
        mode,
        birds: Vec::new(),
        bullets: Vec::new(),
        particles: Vec::new(),
        clouds: Vec::new(),
        gun: Gun::default(),
        score: 0,
        frame: 0,
        next_id: 1,
        viewport,
    }
}

// ── Lifecycle ────────────────────────────────────────────────────────────────

/// Clear every transient collection and the score, then start running.
pub fn start_game(state: &GameState, config: &GameConfig) -> GameState {
    let mut next = GameState {
        phase: GamePhase::Started,
        birds: Vec::new(),
        bullets: Vec::new(),
        particles: Vec::new(),
        clouds: Vec::new(),
        gun: Gun::default(),
        score: 0,
        frame: 0,
        ..state.clone()
    };
    if config.cloud_mode == CloudMode::Seeded {
        let clouds = seeded_clouds(next.next_id);
        next.next_id += clouds.len() as u64;
        next.clouds = clouds;
    }
    info!(mode = ?next.mode, "game started");
    next
}

/// Clear every transient collection and the score, and stop the loop.
pub fn reset_game(state: &GameState) -> GameState {
    info!(score = state.score, frames = state.frame, "game reset");
    GameState {
        phase: GamePhase::NotStarted,
        birds: Vec::new(),
        bullets: Vec::new(),
        particles: Vec::new(),
        clouds: Vec::new(),
        gun: Gun::default(),
        score: 0,
        frame: 0,
        ..state.clone()
    }
}

/// Adopt a new play-area size (terminal resize).
pub fn resize(state: &GameState, viewport: Viewport) -> GameState {
    GameState {
        viewport,
        ..state.clone()
    }
}

// ── Input-driven state transitions ──────────────────────────────────────────

pub fn apply_command(
    state: &GameState,
    command: Command,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> GameState {
    match command {
        Command::Start => {
            if state.is_running() {
                state.clone()
            } else {
                start_game(state, config)
            }
        }
        Command::Reset => reset_game(state),
        _ if !state.is_running() => state.clone(),
        Command::Aim(dir) => match state.mode {
            WeaponMode::Aimable => GameState {
                gun: aim_step(&state.gun, dir, &config.weapon),
                ..state.clone()
            },
            WeaponMode::Fixed | WeaponMode::Click => state.clone(),
        },
        Command::AimBy(delta_px) => match state.mode {
            WeaponMode::Aimable => GameState {
                gun: aim_by_swipe(&state.gun, delta_px, &config.weapon),
                ..state.clone()
            },
            WeaponMode::Fixed | WeaponMode::Click => state.clone(),
        },
        Command::FireGun => match state.mode {
            WeaponMode::Click => state.clone(),
            WeaponMode::Fixed | WeaponMode::Aimable => shoot_bullet(state, config),
        },
        Command::FireAt { x, y } => match state.mode {
            WeaponMode::Click => shoot_at(state, x, y, config, rng),
            WeaponMode::Fixed | WeaponMode::Aimable => shoot_bullet(state, config),
        },
    }
}

/// True when `command` pulls the trigger in `mode`.  Keyboard fire has
/// nothing to shoot with in click mode.
pub fn is_shot(mode: WeaponMode, command: Command) -> bool {
    match command {
        Command::FireAt { .. } => true,
        Command::FireGun => mode != WeaponMode::Click,
        _ => false,
    }
}

/// Launch a bullet from the gun.
pub fn shoot_bullet(state: &GameState, config: &GameConfig) -> GameState {
    let mut next = state.clone();
    let id = next.take_id();
    let (bullet, gun) = fire(id, &state.gun, state.mode, &config.weapon);
    trace!(id, vx = bullet.speed_x, vy = bullet.speed_y, "bullet fired");
    next.bullets.push(bullet);
    next.gun = gun;
    next
}

/// Click-to-shoot: destroy the topmost bird under the pointer, if any.
pub fn shoot_at(
    state: &GameState,
    x: f32,
    y: f32,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> GameState {
    let Some(index) = bird_at(&state.birds, &state.viewport, x, y) else {
        return state.clone();
    };
    let mut next = state.clone();
    let bird = next.birds.remove(index);
    let burst = particle_burst(next.next_id, bird.x, bird.y, &config.particles, rng);
    next.next_id += burst.len() as u64;
    next.particles.extend(burst);
    next.score = next.score.saturating_add(bird.points);
    debug!(bird = bird.id, kind = ?bird.kind, points = bird.points, "bird clicked");
    next
}

// ── Per-frame tick (nearly pure: RNG is injected) ───────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
/// Does nothing until the game has started.
pub fn tick(state: &GameState, config: &GameConfig, rng: &mut impl Rng) -> GameState {
    if !state.is_running() {
        return state.clone();
    }
    let frame = state.frame + 1;
    let mut next_id = state.next_id;

    // ── 1. Motion ────────────────────────────────────────────────────────────
    let birds = advance_birds(&state.birds, &config.motion);
    let bullets = advance_bullets(&state.bullets, &config.motion);
    let mut clouds = advance_clouds(&state.clouds, &config.motion);
    let mut particles = advance_particles(&state.particles, &config.motion);
    let gun = cool_gun(&state.gun);

    // ── 2. Collision: bullets ↔ birds ────────────────────────────────────────
    let hits = resolve_bullet_hits(&bullets, &birds, &state.viewport, config.weapon.hit_radius);
    for bird in &hits.destroyed {
        debug!(bird = bird.id, kind = ?bird.kind, points = bird.points, "bird shot down");
        let burst = particle_burst(next_id, bird.x, bird.y, &config.particles, rng);
        next_id += burst.len() as u64;
        particles.extend(burst);
    }
    let score = state.score.saturating_add(hits.points());
    let mut birds = hits.birds;
    let bullets = hits.bullets;

    // ── 3. Spawn birds ───────────────────────────────────────────────────────
    if is_early_spawn(frame, &config.spawn) {
        birds.push(spawn_bird(next_id, &config.spawn, rng));
        next_id += 1;
    }
    if rng.gen_bool(config.spawn.bird_chance) {
        let bird = spawn_bird(next_id, &config.spawn, rng);
        trace!(id = bird.id, kind = ?bird.kind, x = bird.x, y = bird.y, "bird spawned");
        birds.push(bird);
        next_id += 1;
    }

    // ── 4. Spawn clouds ──────────────────────────────────────────────────────
    if config.cloud_mode == CloudMode::Random
        && clouds.len() < config.spawn.max_clouds
        && rng.gen_bool(config.spawn.cloud_chance)
    {
        clouds.push(spawn_cloud(next_id, &config.spawn, rng));
        next_id += 1;
    }

    GameState {
        birds,
        bullets,
        particles,
        clouds,
        gun,
        score,
        frame,
        next_id,
        ..state.clone()
    }
}
