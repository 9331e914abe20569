use bird_attack::compute::{init_state, start_game};
use bird_attack::config::GameConfig;
use bird_attack::entities::*;
use bird_attack::scene::*;

fn viewport() -> Viewport {
    Viewport { cols: 100, rows: 50, cell_width_px: 8.0, cell_height_px: 16.0 }
}

fn busy_state(mode: WeaponMode) -> GameState {
    let cfg = GameConfig::default();
    let mut s = start_game(&init_state(mode, viewport()), &cfg);
    s.clouds.push(Cloud { id: 1, x: 10.0, y: 20.0, size: 70.0, opacity: 0.6, speed: 0.5 });
    s.birds.push(Bird {
        id: 2,
        x: 30.0,
        y: 30.0,
        speed_x: -1.0,
        speed_y: 0.0,
        points: 55,
        size: 45.0,
        kind: BirdKind::Red,
        wing_phase: std::f32::consts::FRAC_PI_2,
    });
    s.bullets.push(Bullet { id: 3, x: 50.0, y: 60.0, speed_x: 0.0, speed_y: -3.0 });
    s.particles.push(Particle { id: 4, x: 40.0, y: 40.0, vx: 0.0, vy: 0.0, life: 15, max_life: 30 });
    s.gun = Gun { angle: -20.0, flash_ticks: 2 };
    s.score = 55;
    s
}

#[test]
fn sprites_are_ordered_back_to_front() {
    let scene = build_scene(&busy_state(WeaponMode::Aimable), &GameConfig::default());
    let kinds: Vec<SpriteKind> = scene.sprites.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SpriteKind::Cloud,
            SpriteKind::Bird(BirdKind::Red),
            SpriteKind::Bullet,
            SpriteKind::Particle,
            SpriteKind::Gun { flash: true },
        ]
    );
    assert_eq!(scene.score, 55);
    assert_eq!(scene.phase, GamePhase::Started);
}

#[test]
fn sprite_attributes_follow_entities() {
    let scene = build_scene(&busy_state(WeaponMode::Aimable), &GameConfig::default());
    let cloud = &scene.sprites[0];
    assert_eq!(cloud.opacity, 0.6);
    assert_eq!(cloud.size, 70.0);

    let bird = &scene.sprites[1];
    assert!(!bird.facing_right);
    assert!((bird.wing_offset - 3.0).abs() < 1e-5);
    assert!((bird.rotation - 6.0).abs() < 1e-5);
    assert_eq!(bird.label.as_deref(), Some("55"));

    let particle = &scene.sprites[3];
    assert_eq!(particle.opacity, 0.5);

    let gun = &scene.sprites[4];
    assert_eq!(gun.rotation, -20.0);
    assert_eq!((gun.x, gun.y), (50.0, 85.0));
}

#[test]
fn fixed_gun_is_drawn_upright() {
    let scene = build_scene(&busy_state(WeaponMode::Fixed), &GameConfig::default());
    let gun = scene.sprites.last().unwrap();
    assert_eq!(gun.rotation, 0.0);
}

#[test]
fn click_mode_has_no_gun() {
    let scene = build_scene(&busy_state(WeaponMode::Click), &GameConfig::default());
    assert!(scene
        .sprites
        .iter()
        .all(|s| !matches!(s.kind, SpriteKind::Gun { .. })));
}

#[test]
fn title_screen_has_no_gun() {
    let s = init_state(WeaponMode::Aimable, viewport());
    let scene = build_scene(&s, &GameConfig::default());
    assert!(scene.sprites.is_empty());
    assert_eq!(scene.phase, GamePhase::NotStarted);
}
