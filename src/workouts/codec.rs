//! JSON codec for persisted interval lists.
//!
//! Two flavours share one entry parser:
//! - [`decode_intervals`] is lenient and never fails; it backs stored columns.
//! - [`parse_workout_json`] is strict and reports malformed documents.

use std::path::Path;

use serde_json::Value;

use super::types::{Interval, WorkoutError, WorkoutModel, WorkoutParseError};

const KNOWN_TYPES: [&str; 3] = ["SINGLE", "RAMP", "REPEAT"];

/// Parse one array entry. `Ok(None)` means the entry carries no type tag.
fn parse_interval_node(node: &Value) -> Result<Option<Interval>, WorkoutParseError> {
    let type_tag = match node.get("type") {
        Some(Value::String(tag)) => tag.clone(),
        Some(other) => other.to_string(),
        None => return Ok(None),
    };

    if !KNOWN_TYPES.contains(&type_tag.as_str()) {
        return Err(WorkoutParseError::UnknownIntervalType(type_tag));
    }

    serde_json::from_value::<Interval>(node.clone())
        .map(Some)
        .map_err(|e| WorkoutParseError::InvalidInterval {
            kind: type_tag,
            reason: e.to_string(),
        })
}

/// Decode a stored interval column.
///
/// Blank input, invalid JSON and non-array roots decode to an empty list.
/// Untagged or unknown-typed entries are dropped; an entry that fails to
/// match its declared type discards the whole column.
pub fn decode_intervals(json: &str) -> Vec<Interval> {
    if json.trim().is_empty() {
        return Vec::new();
    }

    let root: Value = match serde_json::from_str(json) {
        Ok(root) => root,
        Err(e) => {
            tracing::warn!("Failed to decode interval column: {}", e);
            return Vec::new();
        }
    };

    let Some(nodes) = root.as_array() else {
        return Vec::new();
    };

    let mut intervals = Vec::with_capacity(nodes.len());
    for node in nodes {
        match parse_interval_node(node) {
            Ok(Some(interval)) => intervals.push(interval),
            Ok(None) => tracing::debug!("Skipping interval entry without type tag"),
            Err(WorkoutParseError::UnknownIntervalType(tag)) => {
                tracing::warn!("Skipping interval with unknown type: {}", tag);
            }
            Err(e) => {
                tracing::warn!("Failed to decode interval column: {}", e);
                return Vec::new();
            }
        }
    }

    intervals
}

/// Encode an interval list for storage. An empty list encodes as `[]`.
pub fn encode_intervals(intervals: &[Interval]) -> String {
    if intervals.is_empty() {
        return "[]".to_string();
    }

    match serde_json::to_string(intervals) {
        Ok(json) => {
            tracing::debug!("Encoded {} intervals", intervals.len());
            json
        }
        Err(e) => {
            tracing::warn!("Failed to encode intervals: {}", e);
            "[]".to_string()
        }
    }
}

/// Parse a workout document: either a bare interval array or an object
/// with an `intervals` array. Blank input yields `Ok(None)`.
pub fn parse_workout_json(json: &str) -> Result<Option<WorkoutModel>, WorkoutParseError> {
    if json.trim().is_empty() {
        return Ok(None);
    }

    let root: Value =
        serde_json::from_str(json).map_err(|e| WorkoutParseError::InvalidJson(e.to_string()))?;

    let nodes = root.get("intervals").unwrap_or(&root);

    let mut intervals = Vec::new();
    if let Some(entries) = nodes.as_array() {
        for node in entries {
            if let Some(interval) = parse_interval_node(node)? {
                intervals.push(interval);
            }
        }
    }

    let name = root
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(Some(WorkoutModel::new(name, intervals)))
}

/// Read and parse a workout document from disk.
pub fn load_workout_file(path: &Path) -> Result<Option<WorkoutModel>, WorkoutError> {
    let content = std::fs::read_to_string(path).map_err(|e| WorkoutError::FileReadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let workout = parse_workout_json(&content)?;
    tracing::debug!(
        "Loaded {} intervals from {}",
        workout.as_ref().map_or(0, |w| w.intervals.len()),
        path.display()
    );
    Ok(workout)
}

/// Serialize a workout document. A missing workout serializes as an empty interval list.
pub fn workout_to_json(workout: Option<&WorkoutModel>) -> Result<String, WorkoutError> {
    match workout {
        None => Ok(r#"{"intervals":[]}"#.to_string()),
        Some(workout) => serde_json::to_string(workout)
            .map_err(|e| WorkoutError::InvalidWorkout(e.to_string())),
    }
}
