//! Per-tick motion and pruning.  Each function maps the old collection to
//! a new one; entities that leave the play area or expire are dropped.

use crate::config::MotionConfig;
use crate::entities::{Bird, Bullet, Cloud, Gun, Particle};

pub fn advance_birds(birds: &[Bird], cfg: &MotionConfig) -> Vec<Bird> {
    birds
        .iter()
        .map(|b| Bird {
            x: b.x + b.speed_x,
            y: b.y + b.speed_y,
            wing_phase: b.wing_phase + cfg.wing_step,
            ..b.clone()
        })
        .filter(|b| b.x > cfg.bird_min_x && b.x < cfg.bird_max_x)
        .collect()
}

pub fn advance_bullets(bullets: &[Bullet], cfg: &MotionConfig) -> Vec<Bullet> {
    bullets
        .iter()
        .map(|b| Bullet {
            x: b.x + b.speed_x,
            y: b.y + b.speed_y,
            ..b.clone()
        })
        .filter(|b| b.y > cfg.bullet_min_y && b.x > cfg.bullet_min_x && b.x < cfg.bullet_max_x)
        .collect()
}

/// Clouds drift right and wrap back to the left once past the edge.
pub fn advance_clouds(clouds: &[Cloud], cfg: &MotionConfig) -> Vec<Cloud> {
    clouds
        .iter()
        .map(|c| {
            let moved = c.x + c.speed;
            Cloud {
                x: if moved > cfg.cloud_wrap_at { cfg.cloud_wrap_to } else { moved },
                ..c.clone()
            }
        })
        .collect()
}

/// Position moves by the current velocity first, then gravity bends the
/// vertical velocity for the next tick.
pub fn advance_particles(particles: &[Particle], cfg: &MotionConfig) -> Vec<Particle> {
    particles
        .iter()
        .map(|p| Particle {
            x: p.x + p.vx,
            y: p.y + p.vy,
            vy: p.vy + cfg.gravity,
            life: p.life - 1,
            ..p.clone()
        })
        .filter(|p| p.life > 0)
        .collect()
}

pub fn cool_gun(gun: &Gun) -> Gun {
    Gun {
        flash_ticks: gun.flash_ticks.saturating_sub(1),
        ..gun.clone()
    }
}
