// tests/unit_health.rs
//! Boundary tests for the health scoring rule.

use healthmap_core::health::{classify, label_for_score, score, HealthConfig, HealthLabel};
use healthmap_core::FileMetrics;

fn penalty(methods: u64, lines: u64) -> i64 {
    100 - score(&FileMetrics::new("f", methods, lines), &HealthConfig::default())
}

#[test]
fn test_method_thresholds_are_exclusive() {
    assert_eq!(penalty(15, 0), 0);
    assert_eq!(penalty(16, 0), 15);
    assert_eq!(penalty(30, 0), 15);
    assert_eq!(penalty(31, 0), 30);
}

#[test]
fn test_line_thresholds_are_exclusive() {
    assert_eq!(penalty(0, 300), 0);
    assert_eq!(penalty(0, 301), 10);
    assert_eq!(penalty(0, 500), 10);
    assert_eq!(penalty(0, 501), 25);
}

#[test]
fn test_cutoffs_are_inclusive() {
    let c = HealthConfig::default();
    assert_eq!(label_for_score(80, &c), HealthLabel::Green);
    assert_eq!(label_for_score(79, &c), HealthLabel::Yellow);
    assert_eq!(label_for_score(60, &c), HealthLabel::Yellow);
    assert_eq!(label_for_score(59, &c), HealthLabel::Red);
}

#[test]
fn test_reachable_scores() {
    let c = HealthConfig::default();
    let label = |m, l| classify(&FileMetrics::new("f", m, l), &c);
    // 100 - 15 = 85
    assert_eq!(label(16, 0), HealthLabel::Green);
    // 100 - 15 - 10 = 75
    assert_eq!(label(16, 301), HealthLabel::Yellow);
    // 100 - 30 - 10 = 60
    assert_eq!(label(31, 301), HealthLabel::Yellow);
    // 100 - 15 - 25 = 60
    assert_eq!(label(16, 501), HealthLabel::Yellow);
    // 100 - 30 - 25 = 45
    assert_eq!(label(31, 501), HealthLabel::Red);
}

#[test]
fn test_serialized_lowercase() {
    let json = serde_json::to_string(&HealthLabel::Yellow).unwrap();
    assert_eq!(json, "\"yellow\"");
}
