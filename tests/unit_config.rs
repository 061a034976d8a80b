// tests/unit_config.rs
use healthmap_core::config::{Config, CONFIG_FILE};
use healthmap_core::graph::LayoutConfig;
use healthmap_core::health::HealthConfig;
use healthmap_core::HealthmapError;
use std::fs;

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join(CONFIG_FILE), "[health]\ngreen_cutoff = 90").unwrap();
    let c = Config::load_in(d.path());
    assert_eq!(c.health.green_cutoff, 90);
    assert_eq!(c.health.yellow_cutoff, 60);
}

#[test]
fn test_defaults() {
    let h = HealthConfig::default();
    assert_eq!(h.method_warn_threshold, 15);
    assert_eq!(h.method_crit_threshold, 30);
    assert_eq!(h.loc_warn_threshold, 300);
    assert_eq!(h.loc_crit_threshold, 500);
    let l = LayoutConfig::default();
    assert_eq!(l.files_per_row, 3);
    assert!((l.file_spacing_x - 300.0).abs() < f64::EPSILON);
    assert!((l.folder_indent - 900.0).abs() < f64::EPSILON);
    assert_eq!(Config::new().service.poll_interval_ms, 2000);
}

#[test]
fn test_missing_file_gives_defaults() {
    let d = tempfile::tempdir().unwrap();
    assert_eq!(Config::load_in(d.path()), Config::default());
}

#[test]
fn test_broken_file_gives_defaults() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join(CONFIG_FILE), "[layout\nfiles_per_row = ").unwrap();
    assert_eq!(Config::load_in(d.path()), Config::default());
}

#[test]
fn test_load_from_is_strict() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("custom.toml");
    fs::write(&path, "[layout]\nfiles_per_row = 0").unwrap();
    assert!(matches!(Config::load_from(&path), Err(HealthmapError::InvalidConfig(_))));
    let missing = d.path().join("nope.toml");
    assert!(matches!(Config::load_from(&missing), Err(HealthmapError::Io { .. })));
}

#[test]
fn test_integer_spacing_accepted() {
    let c = Config::parse_toml("[layout]\nfile_spacing_x = 400\nfolder_indent = 1200").unwrap();
    assert!((c.layout.file_spacing_x - 400.0).abs() < f64::EPSILON);
    assert!((c.layout.folder_indent - 1200.0).abs() < f64::EPSILON);
}

#[test]
fn test_indent_narrower_than_file_row_rejected() {
    let err = Config::parse_toml("[layout]\nfolder_indent = 250");
    assert!(matches!(err, Err(HealthmapError::InvalidConfig(_))));
}

#[test]
fn test_nan_origin_rejected() {
    let err = Config::parse_toml("[layout]\norigin_x = nan");
    assert!(matches!(err, Err(HealthmapError::InvalidConfig(_))));
}

#[test]
fn test_inverted_cutoffs_rejected() {
    let err = Config::parse_toml("[health]\ngreen_cutoff = 50\nyellow_cutoff = 70");
    assert!(matches!(err, Err(HealthmapError::InvalidConfig(_))));
}

#[test]
fn test_service_section() {
    let c = Config::parse_toml("[service]\nbase_url = \"http://analysis:9000\"\npoll_interval_ms = 500")
        .unwrap();
    assert_eq!(c.service.base_url, "http://analysis:9000");
    assert_eq!(c.poll_interval().as_millis(), 500);
}

#[test]
fn test_save_round_trips() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join(CONFIG_FILE);
    let mut c = Config::new();
    c.layout.files_per_row = 4;
    c.health.green_cutoff = 85;
    c.save(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), c);
}
