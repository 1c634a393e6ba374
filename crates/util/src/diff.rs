//! Profile snapshot diffing.
//!
//! Computes the key-wise delta between two JSON-object snapshots of a
//! user/device profile. The profile-sync layer feeds the previous and
//! current attribute maps through here and transmits only the changed
//! fields. Values are compared with `serde_json::Value` structural
//! equality, so nested objects and arrays are compared element-wise.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// A single field-level delta between two profile snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "change", rename_all = "lowercase")]
pub enum FieldChange {
    /// Key present in the updated snapshot only.
    Added { new: Value },
    /// Key present in the baseline snapshot only.
    Removed { old: Value },
    /// Key present in both with deep-unequal values. A type change at
    /// the same key (string becomes a number) lands here, never in an
    /// error.
    Changed { old: Value, new: Value },
}

/// The result of diffing two profile snapshots. Contains only actual
/// deltas; keys with identical values on both sides are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileDiff {
    pub entries: BTreeMap<String, FieldChange>,
}

impl ProfileDiff {
    /// Returns true if the two snapshots were identical.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the diff to a JSON object keyed by field name.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (key, change) in &self.entries {
            let entry = match change {
                FieldChange::Added { new } => serde_json::json!({
                    "change": "added",
                    "new": new,
                }),
                FieldChange::Removed { old } => serde_json::json!({
                    "change": "removed",
                    "old": old,
                }),
                FieldChange::Changed { old, new } => serde_json::json!({
                    "change": "changed",
                    "new": new,
                    "old": old,
                }),
            };
            map.insert(key.clone(), entry);
        }
        Value::Object(map)
    }

    /// Format the diff as human-readable text, one line per field.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();

        for (key, change) in &self.entries {
            match change {
                FieldChange::Added { new } => {
                    let new = serde_json::to_string(new).unwrap_or_default();
                    lines.push(format!("+ {}: {}", key, new));
                }
                FieldChange::Removed { old } => {
                    let old = serde_json::to_string(old).unwrap_or_default();
                    lines.push(format!("- {}: {}", key, old));
                }
                FieldChange::Changed { old, new } => {
                    let old = serde_json::to_string(old).unwrap_or_default();
                    let new = serde_json::to_string(new).unwrap_or_default();
                    lines.push(format!("~ {}: {} -> {}", key, old, new));
                }
            }
        }

        lines.join("\n")
    }
}

/// Diff an updated profile snapshot against a baseline.
///
/// Key match is exact string identity. For keys present in both maps the
/// values are compared deeply; equal values produce no entry. Total over
/// any pair of JSON objects.
pub fn diff_profiles(updated: &Map<String, Value>, baseline: &Map<String, Value>) -> ProfileDiff {
    let mut entries = BTreeMap::new();

    for (key, old) in baseline {
        if !updated.contains_key(key) {
            entries.insert(key.clone(), FieldChange::Removed { old: old.clone() });
        }
    }

    for (key, new) in updated {
        match baseline.get(key) {
            None => {
                entries.insert(key.clone(), FieldChange::Added { new: new.clone() });
            }
            Some(old) => {
                if old != new {
                    entries.insert(
                        key.clone(),
                        FieldChange::Changed {
                            old: old.clone(),
                            new: new.clone(),
                        },
                    );
                }
            }
        }
    }

    ProfileDiff { entries }
}
