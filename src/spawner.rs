//! Construction of new entities.
//!
//! Spawners never touch `GameState`; they receive the id to use and an
//! injected RNG so tests can drive them with a seeded generator.

use std::f32::consts::TAU;

use rand::Rng;

use crate::config::{ParticleConfig, SpawnConfig};
use crate::entities::{Bird, BirdKind, Cloud, Particle};

/// Uniform draw from `[min, min + spread)`; degenerates to `min` when
/// `spread` is zero.
fn spread_from(rng: &mut impl Rng, min: f32, spread: f32) -> f32 {
    min + rng.gen::<f32>() * spread
}

/// Uniform draw centred on zero: `[-spread/2, spread/2)`.
fn centred(rng: &mut impl Rng, spread: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * spread
}

// ── Birds ─────────────────────────────────────────────────────────────────────

pub fn random_kind(rng: &mut impl Rng) -> BirdKind {
    BirdKind::ALL[rng.gen_range(0..BirdKind::ALL.len())]
}

pub fn points_for(kind: BirdKind, rng: &mut impl Rng) -> u32 {
    let (lo, hi) = kind.points_range();
    rng.gen_range(lo..=hi)
}

/// A bird entering from a random side, flying toward the other one.
pub fn spawn_bird(id: u64, cfg: &SpawnConfig, rng: &mut impl Rng) -> Bird {
    let from_left = rng.gen_bool(0.5);
    let kind = random_kind(rng);
    let speed = spread_from(rng, cfg.min_speed_x, cfg.speed_x_spread);

    Bird {
        id,
        x: if from_left { cfg.left_edge_x } else { cfg.right_edge_x },
        y: spread_from(rng, cfg.band_top, cfg.band_height),
        speed_x: if from_left { speed } else { -speed },
        speed_y: centred(rng, cfg.speed_y_spread),
        points: points_for(kind, rng),
        size: kind.size(),
        kind,
        wing_phase: rng.gen::<f32>() * TAU,
    }
}

/// True on the ticks where a bird is guaranteed to appear.
pub fn is_early_spawn(frame: u64, cfg: &SpawnConfig) -> bool {
    cfg.early_spawn_ticks.contains(&frame)
}

// ── Clouds ────────────────────────────────────────────────────────────────────

pub fn spawn_cloud(id: u64, cfg: &SpawnConfig, rng: &mut impl Rng) -> Cloud {
    Cloud {
        id,
        x: rng.gen::<f32>() * 100.0,
        y: spread_from(rng, cfg.band_top, cfg.band_height),
        size: rng.gen_range(50..100) as f32,
        opacity: spread_from(rng, 0.5, 0.5),
        speed: spread_from(rng, 0.5, 0.5),
    }
}

/// Fixed cloud layout used by the seeded cloud mode.
/// (x, y, size, opacity, speed)
const SEEDED_CLOUDS: [(f32, f32, f32, f32, f32); 4] = [
    (10.0, 18.0, 80.0, 0.8, 0.2),
    (35.0, 30.0, 60.0, 0.6, 0.15),
    (62.0, 15.0, 90.0, 0.9, 0.25),
    (85.0, 40.0, 55.0, 0.7, 0.1),
];

pub fn seeded_clouds(first_id: u64) -> Vec<Cloud> {
    SEEDED_CLOUDS
        .iter()
        .enumerate()
        .map(|(i, &(x, y, size, opacity, speed))| Cloud {
            id: first_id + i as u64,
            x,
            y,
            size,
            opacity,
            speed,
        })
        .collect()
}

pub fn seeded_cloud_count() -> usize {
    SEEDED_CLOUDS.len()
}

// ── Particles ─────────────────────────────────────────────────────────────────

/// A burst of particles radiating from `(x, y)`.  Ids run consecutively
/// from `first_id`.
pub fn particle_burst(
    first_id: u64,
    x: f32,
    y: f32,
    cfg: &ParticleConfig,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    (0..cfg.burst_count)
        .map(|i| Particle {
            id: first_id + i as u64,
            x,
            y,
            vx: centred(rng, cfg.spread),
            vy: centred(rng, cfg.spread),
            life: cfg.life,
            max_life: cfg.life,
        })
        .collect()
}
