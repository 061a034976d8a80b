// src/health.rs
//! File health classification from size and complexity proxies.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::types::FileMetrics;

const BASE_SCORE: i64 = 100;
const METHOD_CRIT_PENALTY: i64 = 30;
const METHOD_WARN_PENALTY: i64 = 15;
const LOC_CRIT_PENALTY: i64 = 25;
const LOC_WARN_PENALTY: i64 = 10;

/// Ordinal maintainability label. `Green` is best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthLabel {
    Green,
    Yellow,
    Red,
}

impl HealthLabel {
    fn goodness(self) -> u8 {
        match self {
            Self::Green => 2,
            Self::Yellow => 1,
            Self::Red => 0,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl PartialOrd for HealthLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HealthLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.goodness().cmp(&other.goodness())
    }
}

impl fmt::Display for HealthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scoring thresholds. Penalty thresholds are exclusive (`>`), cutoffs inclusive (`>=`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    pub method_warn_threshold: u64,
    pub method_crit_threshold: u64,
    pub loc_warn_threshold: u64,
    pub loc_crit_threshold: u64,
    pub green_cutoff: i64,
    pub yellow_cutoff: i64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            method_warn_threshold: 15,
            method_crit_threshold: 30,
            loc_warn_threshold: 300,
            loc_crit_threshold: 500,
            green_cutoff: 80,
            yellow_cutoff: 60,
        }
    }
}

/// Computes the 0..=100 health score. Method and line penalties are summed.
#[must_use]
pub fn score(metrics: &FileMetrics, config: &HealthConfig) -> i64 {
    BASE_SCORE - method_penalty(metrics.method_count, config) - loc_penalty(metrics.line_count, config)
}

/// Classifies a file based on its metrics.
#[must_use]
pub fn classify(metrics: &FileMetrics, config: &HealthConfig) -> HealthLabel {
    label_for_score(score(metrics, config), config)
}

#[must_use]
pub fn label_for_score(score: i64, config: &HealthConfig) -> HealthLabel {
    if score >= config.green_cutoff {
        HealthLabel::Green
    } else if score >= config.yellow_cutoff {
        HealthLabel::Yellow
    } else {
        HealthLabel::Red
    }
}

fn method_penalty(methods: u64, config: &HealthConfig) -> i64 {
    if methods > config.method_crit_threshold {
        METHOD_CRIT_PENALTY
    } else if methods > config.method_warn_threshold {
        METHOD_WARN_PENALTY
    } else {
        0
    }
}

fn loc_penalty(lines: u64, config: &HealthConfig) -> i64 {
    if lines > config.loc_crit_threshold {
        LOC_CRIT_PENALTY
    } else if lines > config.loc_warn_threshold {
        LOC_WARN_PENALTY
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(methods: u64, lines: u64) -> i64 {
        score(&FileMetrics::new("f.py", methods, lines), &HealthConfig::default())
    }

    #[test]
    fn test_method_boundaries() {
        assert_eq!(score_of(15, 0), 100);
        assert_eq!(score_of(16, 0), 85);
        assert_eq!(score_of(30, 0), 85);
        assert_eq!(score_of(31, 0), 70);
    }

    #[test]
    fn test_loc_boundaries() {
        assert_eq!(score_of(0, 300), 100);
        assert_eq!(score_of(0, 301), 90);
        assert_eq!(score_of(0, 500), 90);
        assert_eq!(score_of(0, 501), 75);
    }

    #[test]
    fn test_cutoff_boundaries() {
        let config = HealthConfig::default();
        assert_eq!(label_for_score(80, &config), HealthLabel::Green);
        assert_eq!(label_for_score(79, &config), HealthLabel::Yellow);
        assert_eq!(label_for_score(60, &config), HealthLabel::Yellow);
        assert_eq!(label_for_score(59, &config), HealthLabel::Red);
    }

    #[test]
    fn test_penalties_are_summed() {
        // 100 - 30 - 25
        assert_eq!(score_of(40, 600), 45);
        let m = FileMetrics::new("big.py", 40, 600);
        assert_eq!(classify(&m, &HealthConfig::default()), HealthLabel::Red);
    }

    #[test]
    fn test_warn_pair_lands_on_yellow() {
        // 100 - 15 - 10 = 75
        let m = FileMetrics::new("mid.py", 20, 400);
        assert_eq!(classify(&m, &HealthConfig::default()), HealthLabel::Yellow);
    }

    #[test]
    fn test_zero_metrics_are_green() {
        let m = FileMetrics::new("empty.py", 0, 0);
        assert_eq!(classify(&m, &HealthConfig::default()), HealthLabel::Green);
    }

    #[test]
    fn test_goodness_order() {
        assert!(HealthLabel::Green > HealthLabel::Yellow);
        assert!(HealthLabel::Yellow > HealthLabel::Red);
        assert_eq!(HealthLabel::Red.max(HealthLabel::Green), HealthLabel::Green);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = HealthConfig {
            method_warn_threshold: 5,
            ..HealthConfig::default()
        };
        let m = FileMetrics::new("f.py", 6, 0);
        assert_eq!(score(&m, &config), 85);
    }
}
