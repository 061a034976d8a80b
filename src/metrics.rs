// src/metrics.rs
//! Normalization of upstream per-file metrics records.
//!
//! The analysis service reports metrics in the Emerge JSON format, where each
//! file maps to a record keyed by `number-of-methods-in-file` and
//! `sloc-in-file`. Completed service jobs carry the same counts as graph node
//! data under `methods` and `loc`. Everything downstream only sees [`FileMetrics`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::{HealthmapError, Result};
use crate::types::FileMetrics;

pub const METHODS_KEY: &str = "number-of-methods-in-file";
pub const SLOC_KEY: &str = "sloc-in-file";
pub const NODE_METHODS_KEY: &str = "methods";
pub const NODE_LOC_KEY: &str = "loc";

/// Raw per-file records keyed by path. Ordered so normalization is deterministic.
pub type RawRecords = BTreeMap<String, Value>;

/// Top-level document written by an Emerge analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmergeReport {
    #[serde(rename = "analysis-name", default)]
    pub analysis_name: String,
    #[serde(default)]
    pub statistics: Map<String, Value>,
    #[serde(rename = "overall-metrics", default)]
    pub overall_metrics: Map<String, Value>,
    #[serde(rename = "local-metrics", default)]
    pub local_metrics: RawRecords,
}

/// Converts one raw record into canonical metrics.
///
/// # Errors
/// Returns `MalformedMetrics` if the record is not an object, or if either
/// count is missing, non-integral, or negative.
pub fn normalize(path: &str, raw: &Value) -> Result<FileMetrics> {
    normalize_keyed(path, raw, METHODS_KEY, SLOC_KEY)
}

/// Converts the `data` object of a service graph node (`{path, methods, loc}`).
///
/// # Errors
/// Same rules as [`normalize`], applied to `methods` and `loc`.
pub fn normalize_node_data(path: &str, data: &Value) -> Result<FileMetrics> {
    normalize_keyed(path, data, NODE_METHODS_KEY, NODE_LOC_KEY)
}

fn normalize_keyed(path: &str, raw: &Value, methods: &str, lines: &str) -> Result<FileMetrics> {
    let Some(record) = raw.as_object() else {
        return Err(HealthmapError::malformed(path, "record is not an object"));
    };
    let method_count = read_count(path, record, methods)?;
    let line_count = read_count(path, record, lines)?;
    Ok(FileMetrics::new(path, method_count, line_count))
}

/// Normalizes every record in path order, failing on the first bad one.
///
/// # Errors
/// Returns the first `MalformedMetrics` encountered.
pub fn normalize_all(records: &RawRecords) -> Result<Vec<FileMetrics>> {
    records
        .iter()
        .map(|(path, raw)| normalize(path, raw))
        .collect()
}

fn read_count(path: &str, record: &Map<String, Value>, key: &str) -> Result<u64> {
    let Some(value) = record.get(key) else {
        return Err(HealthmapError::malformed(path, format!("missing `{key}`")));
    };
    let Value::Number(n) = value else {
        return Err(HealthmapError::malformed(
            path,
            format!("`{key}` is not an integer"),
        ));
    };
    if let Some(count) = n.as_u64() {
        return Ok(count);
    }
    if n.as_i64().is_some() {
        return Err(HealthmapError::malformed(path, format!("`{key}` is negative")));
    }
    integral_float(path, key, n.as_f64().unwrap_or(f64::NAN))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn integral_float(path: &str, key: &str, f: f64) -> Result<u64> {
    if f < 0.0 {
        return Err(HealthmapError::malformed(path, format!("`{key}` is negative")));
    }
    if !f.is_finite() || f.fract() != 0.0 || f > u64::MAX as f64 {
        return Err(HealthmapError::malformed(
            path,
            format!("`{key}` is not an integer"),
        ));
    }
    Ok(f as u64)
}
