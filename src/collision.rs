//! Bullet/bird collision and click hit-testing.
//!
//! Entity counts are small, so every bullet is simply checked against
//! every bird.

use crate::entities::{Bird, Bullet, Viewport};

/// Result of resolving one tick's bullet hits.
#[derive(Clone, Debug, Default)]
pub struct HitOutcome {
    pub bullets: Vec<Bullet>,
    pub birds: Vec<Bird>,
    /// Birds destroyed this tick, in the order they were hit.
    pub destroyed: Vec<Bird>,
}

impl HitOutcome {
    pub fn points(&self) -> u32 {
        self.destroyed.iter().fold(0, |acc: u32, b| acc.saturating_add(b.points))
    }
}

pub fn distance(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
}

/// True when the bullet is strictly closer than `radius` to the bird centre.
pub fn bullet_hits(bullet: &Bullet, bird: &Bird, viewport: &Viewport, radius: f32) -> bool {
    let (cx, cy) = viewport.bird_center(bird);
    distance(bullet.x, bullet.y, cx, cy) < radius
}

/// Remove every bullet/bird pair within `radius`.  A bullet is spent on the
/// first bird it hits, and a bird can only be destroyed once.
pub fn resolve_bullet_hits(
    bullets: &[Bullet],
    birds: &[Bird],
    viewport: &Viewport,
    radius: f32,
) -> HitOutcome {
    let mut killed_birds: Vec<usize> = Vec::new();
    let mut used_bullets: Vec<usize> = Vec::new();

    for (bi, bullet) in bullets.iter().enumerate() {
        for (ki, bird) in birds.iter().enumerate() {
            if !killed_birds.contains(&ki) && bullet_hits(bullet, bird, viewport, radius) {
                killed_birds.push(ki);
                used_bullets.push(bi);
                break;
            }
        }
    }

    HitOutcome {
        bullets: bullets
            .iter()
            .enumerate()
            .filter(|(i, _)| !used_bullets.contains(i))
            .map(|(_, b)| b.clone())
            .collect(),
        birds: birds
            .iter()
            .enumerate()
            .filter(|(i, _)| !killed_birds.contains(i))
            .map(|(_, b)| b.clone())
            .collect(),
        destroyed: killed_birds.iter().map(|&i| birds[i].clone()).collect(),
    }
}

/// True when `(x, y)` falls inside the bird's on-screen rectangle.
pub fn point_in_bird(bird: &Bird, viewport: &Viewport, x: f32, y: f32) -> bool {
    let w = viewport.width_pct(bird.size);
    let h = viewport.height_pct(bird.size);
    x >= bird.x && x < bird.x + w && y >= bird.y && y < bird.y + h
}

/// Index of the topmost bird under `(x, y)`.  Later birds are drawn on top.
pub fn bird_at(birds: &[Bird], viewport: &Viewport, x: f32, y: f32) -> Option<usize> {
    birds
        .iter()
        .enumerate()
        .rev()
        .find(|(_, b)| point_in_bird(b, viewport, x, y))
        .map(|(i, _)| i)
}
