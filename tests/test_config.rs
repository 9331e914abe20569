use std::io::Write;

use bird_attack::config::GameConfig;
use bird_attack::entities::{CloudMode, WeaponMode};
use bird_attack::error::GameError;

fn write_config(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_are_valid() {
    let cfg = GameConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.spawn.bird_chance, 0.015);
    assert_eq!(cfg.spawn.early_spawn_ticks, vec![30, 90]);
    assert_eq!(cfg.weapon.hit_radius, 3.0);
    assert_eq!(cfg.particles.burst_count, 8);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let file = write_config(
        r#"{ "mode": "click", "cloud_mode": "seeded", "spawn": { "bird_chance": 0.05 } }"#,
    );
    let cfg = GameConfig::load(file.path()).unwrap();
    assert_eq!(cfg.mode, WeaponMode::Click);
    assert_eq!(cfg.cloud_mode, CloudMode::Seeded);
    assert_eq!(cfg.spawn.bird_chance, 0.05);
    assert_eq!(cfg.spawn.cloud_chance, 0.01);
    assert_eq!(cfg.weapon, GameConfig::default().weapon);
}

#[test]
fn missing_file_reports_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let err = GameConfig::load(&path).unwrap_err();
    assert!(matches!(err, GameError::ConfigRead { .. }));
}

#[test]
fn malformed_json_reports_parse_error() {
    let file = write_config("{ not json");
    let err = GameConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, GameError::ConfigParse { .. }));
}

#[test]
fn out_of_range_values_are_rejected() {
    let file = write_config(r#"{ "spawn": { "bird_chance": 1.5 } }"#);
    let err = GameConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));

    let mut cfg = GameConfig::default();
    cfg.weapon.min_angle = 10.0;
    cfg.weapon.max_angle = -10.0;
    assert!(cfg.validate().is_err());

    let mut cfg = GameConfig::default();
    cfg.frame_ms = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn no_path_means_defaults() {
    assert_eq!(GameConfig::load_or_default(None).unwrap(), GameConfig::default());
}

#[test]
fn angle_range_must_contain_upright() {
    let mut cfg = GameConfig::default();
    cfg.weapon.min_angle = 10.0;
    cfg.weapon.max_angle = 40.0;
    assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));

    cfg.weapon.min_angle = 0.0;
    assert!(cfg.validate().is_ok());
}

#[test]
fn early_spawn_ticks_start_at_one() {
    let mut cfg = GameConfig::default();
    cfg.spawn.early_spawn_ticks = vec![0, 30];
    assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));

    cfg.spawn.early_spawn_ticks = vec![1, 30];
    assert!(cfg.validate().is_ok());
}
