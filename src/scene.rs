//! Render list: what to draw, where, and how.
//!
//! The scene is a flat, back-to-front list of sprites.  Drawing code only
//! needs this list plus the HUD fields, never the raw game state.

use crate::config::GameConfig;
use crate::entities::{BirdKind, GamePhase, GameState, WeaponMode};
use crate::weapon::firing_angle;

/// Peak wing displacement of the flap animation, in sprite units.
const WING_AMPLITUDE: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpriteKind {
    Cloud,
    Bird(BirdKind),
    Bullet,
    Particle,
    Gun { flash: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub x: f32,
    pub y: f32,
    /// Pixel size for clouds and birds; zero for point-like sprites.
    pub size: f32,
    /// Degrees.  Gun tilt, or wing tilt for birds.
    pub rotation: f32,
    pub opacity: f32,
    pub facing_right: bool,
    /// Vertical wing offset; positive is wings down.
    pub wing_offset: f32,
    pub label: Option<String>,
}

impl Sprite {
    fn at(kind: SpriteKind, x: f32, y: f32) -> Self {
        Sprite {
            kind,
            x,
            y,
            size: 0.0,
            rotation: 0.0,
            opacity: 1.0,
            facing_right: true,
            wing_offset: 0.0,
            label: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub sprites: Vec<Sprite>,
    pub score: u32,
    pub phase: GamePhase,
    pub mode: WeaponMode,
}

pub fn build_scene(state: &GameState, config: &GameConfig) -> Scene {
    let mut sprites = Vec::with_capacity(
        state.clouds.len() + state.birds.len() + state.bullets.len() + state.particles.len() + 1,
    );

    for cloud in &state.clouds {
        sprites.push(Sprite {
            size: cloud.size,
            opacity: cloud.opacity,
            ..Sprite::at(SpriteKind::Cloud, cloud.x, cloud.y)
        });
    }

    for bird in &state.birds {
        let wing_offset = bird.wing_phase.sin() * WING_AMPLITUDE;
        sprites.push(Sprite {
            size: bird.size,
            rotation: wing_offset * 2.0,
            facing_right: bird.faces_right(),
            wing_offset,
            label: Some(bird.points.to_string()),
            ..Sprite::at(SpriteKind::Bird(bird.kind), bird.x, bird.y)
        });
    }

    sprites.extend(
        state
            .bullets
            .iter()
            .map(|b| Sprite::at(SpriteKind::Bullet, b.x, b.y)),
    );

    sprites.extend(state.particles.iter().map(|p| Sprite {
        opacity: p.opacity(),
        ..Sprite::at(SpriteKind::Particle, p.x, p.y)
    }));

    if state.phase == GamePhase::Started && state.mode != WeaponMode::Click {
        sprites.push(Sprite {
            rotation: firing_angle(&state.gun, state.mode),
            ..Sprite::at(
                SpriteKind::Gun { flash: state.gun.flash_ticks > 0 },
                config.weapon.origin_x,
                config.weapon.origin_y,
            )
        });
    }

    Scene {
        sprites,
        score: state.score,
        phase: state.phase,
        mode: state.mode,
    }
}
