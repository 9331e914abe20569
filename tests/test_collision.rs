use bird_attack::collision::*;
use bird_attack::entities::*;

fn viewport() -> Viewport {
    Viewport { cols: 100, rows: 50, cell_width_px: 8.0, cell_height_px: 16.0 }
}

fn bird(id: u64, x: f32, y: f32, points: u32) -> Bird {
    Bird {
        id,
        x,
        y,
        speed_x: 1.0,
        speed_y: 0.0,
        points,
        size: 30.0,
        kind: BirdKind::Brown,
        wing_phase: 0.0,
    }
}

fn bullet(id: u64, x: f32, y: f32) -> Bullet {
    Bullet { id, x, y, speed_x: 0.0, speed_y: -3.0 }
}

#[test]
fn distance_is_euclidean() {
    assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
}

#[test]
fn hit_uses_bird_center_not_corner() {
    let vp = viewport();
    let b = bird(1, 40.0, 40.0, 10);
    // Corner is 2.65 from the centre (41.875, 41.875): still a hit.
    assert!(bullet_hits(&bullet(1, 40.0, 40.0), &b, &vp, 3.0));
    assert!(bullet_hits(&bullet(2, 41.875, 41.875), &b, &vp, 3.0));
    assert!(!bullet_hits(&bullet(3, 45.0, 41.875), &b, &vp, 3.0));
}

#[test]
fn resolve_removes_pairs_and_totals_points() {
    let vp = viewport();
    let birds = vec![bird(1, 10.0, 10.0, 15), bird(2, 50.0, 20.0, 40), bird(3, 80.0, 30.0, 22)];
    let bullets = vec![bullet(10, 51.875, 21.875), bullet(11, 5.0, 90.0), bullet(12, 81.0, 31.0)];

    let out = resolve_bullet_hits(&bullets, &birds, &vp, 3.0);
    assert_eq!(out.points(), 62);
    assert_eq!(out.destroyed.iter().map(|b| b.id).collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(out.birds.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1]);
    assert_eq!(out.bullets.iter().map(|b| b.id).collect::<Vec<_>>(), vec![11]);
}

#[test]
fn two_bullets_on_one_bird_spend_only_one() {
    let vp = viewport();
    let birds = vec![bird(1, 50.0, 50.0, 30)];
    let bullets = vec![bullet(10, 51.875, 51.875), bullet(11, 52.0, 52.0)];

    let out = resolve_bullet_hits(&bullets, &birds, &vp, 3.0);
    assert_eq!(out.destroyed.len(), 1);
    assert_eq!(out.points(), 30);
    assert_eq!(out.bullets.len(), 1);
    assert_eq!(out.bullets[0].id, 11);
}

#[test]
fn no_bullets_no_changes() {
    let vp = viewport();
    let birds = vec![bird(1, 50.0, 50.0, 30)];
    let out = resolve_bullet_hits(&[], &birds, &vp, 3.0);
    assert!(out.destroyed.is_empty());
    assert_eq!(out.birds, birds);
}

#[test]
fn click_hit_test_covers_bird_rectangle() {
    let vp = viewport();
    let b = bird(1, 20.0, 20.0, 10);
    assert!(point_in_bird(&b, &vp, 20.0, 20.0));
    assert!(point_in_bird(&b, &vp, 23.0, 23.0));
    assert!(!point_in_bird(&b, &vp, 24.0, 21.0));
    assert!(!point_in_bird(&b, &vp, 19.9, 21.0));
}

#[test]
fn click_picks_topmost_overlapping_bird() {
    let vp = viewport();
    let birds = vec![bird(1, 20.0, 20.0, 10), bird(2, 21.0, 21.0, 20), bird(3, 70.0, 20.0, 30)];
    assert_eq!(bird_at(&birds, &vp, 22.0, 22.0), Some(1));
    assert_eq!(bird_at(&birds, &vp, 20.5, 20.5), Some(0));
    assert_eq!(bird_at(&birds, &vp, 50.0, 50.0), None);
}
