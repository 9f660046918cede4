use std::io::Write;
use std::path::Path;

use game_content::{ConfigLoader, TrailConfig};
use game_core::EventCategory;
use tempfile::NamedTempFile;

#[test]
fn bundled_config_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/trail.toml");
    let config = ConfigLoader::load(&path).expect("bundled config loads");
    assert_eq!(config, TrailConfig::default());
}

#[test]
fn loads_from_disk() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "[game]\nevent_chance_percent = 75\nrandom_categories = [\"animal\"]\n\n[breaker]\ncircuit_timeout = 9"
    )
    .expect("write");

    let config = ConfigLoader::load(file.path()).expect("loads");
    assert_eq!(config.game.event_chance_percent, 75);
    assert_eq!(config.game.random_categories, vec![EventCategory::Animal]);
    assert_eq!(config.breaker.circuit_timeout, 9);
    assert_eq!(config.breaker.failure_threshold, 3);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    let err = ConfigLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn rejects_out_of_range_chance() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "[game]\nevent_chance_percent = 101").expect("write");
    assert!(ConfigLoader::load(file.path()).is_err());
}
