//! Gun aiming and firing.

use crate::config::WeaponConfig;
use crate::entities::{Bullet, Gun, WeaponMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AimDirection {
    Left,
    Right,
}

pub fn clamp_angle(angle: f32, cfg: &WeaponConfig) -> f32 {
    angle.clamp(cfg.min_angle, cfg.max_angle)
}

/// Rotate by one key step.
pub fn aim_step(gun: &Gun, dir: AimDirection, cfg: &WeaponConfig) -> Gun {
    let delta = match dir {
        AimDirection::Left => -cfg.key_step,
        AimDirection::Right => cfg.key_step,
    };
    Gun {
        angle: clamp_angle(gun.angle + delta, cfg),
        ..gun.clone()
    }
}

/// Rotate by a horizontal drag of `delta_px` pixels.
pub fn aim_by_swipe(gun: &Gun, delta_px: f32, cfg: &WeaponConfig) -> Gun {
    Gun {
        angle: clamp_angle(gun.angle + delta_px * cfg.swipe_sensitivity, cfg),
        ..gun.clone()
    }
}

/// Effective firing angle in degrees; the fixed cannon always points up.
pub fn firing_angle(gun: &Gun, mode: WeaponMode) -> f32 {
    match mode {
        WeaponMode::Fixed => 0.0,
        WeaponMode::Aimable | WeaponMode::Click => gun.angle,
    }
}

/// Velocity of a bullet leaving the muzzle at `angle_deg` from vertical.
pub fn muzzle_velocity(angle_deg: f32, speed: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (rad.sin() * speed, -rad.cos() * speed)
}

/// A bullet leaving the gun, plus the gun with its muzzle flash lit.
pub fn fire(id: u64, gun: &Gun, mode: WeaponMode, cfg: &WeaponConfig) -> (Bullet, Gun) {
    let (speed_x, speed_y) = muzzle_velocity(firing_angle(gun, mode), cfg.bullet_speed);
    let bullet = Bullet {
        id,
        x: cfg.origin_x,
        y: cfg.origin_y,
        speed_x,
        speed_y,
    };
    let gun = Gun {
        flash_ticks: cfg.muzzle_flash_ticks,
        ..gun.clone()
    };
    (bullet, gun)
}

// ── Swipe tracking ────────────────────────────────────────────────────────────

/// Tracks a drag that started in the gun region.  Mirrors a touch swipe:
/// the anchor moves forward every time the gun turns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    anchor_px: Option<f32>,
    rotated: bool,
}

impl SwipeTracker {
    /// Begin tracking if the press lands below the swipe region line.
    /// Returns whether tracking started.
    pub fn press(&mut self, x_px: f32, y_pct: f32, cfg: &WeaponConfig) -> bool {
        self.rotated = false;
        if y_pct > cfg.swipe_region_y {
            self.anchor_px = Some(x_px);
            true
        } else {
            self.anchor_px = None;
            false
        }
    }

    /// Feed a drag position; returns the pixel delta to rotate by once it
    /// passes the threshold.
    pub fn drag(&mut self, x_px: f32, cfg: &WeaponConfig) -> Option<f32> {
        let anchor = self.anchor_px?;
        let delta = x_px - anchor;
        if delta.abs() > cfg.swipe_threshold_px {
            self.anchor_px = Some(x_px);
            self.rotated = true;
            Some(delta)
        } else {
            None
        }
    }

    /// End the gesture.  Returns true if it turned the gun at least once.
    pub fn release(&mut self) -> bool {
        self.anchor_px = None;
        std::mem::take(&mut self.rotated)
    }

    pub fn is_tracking(&self) -> bool {
        self.anchor_px.is_some()
    }
}
