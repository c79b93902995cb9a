//! Feature Layout & Normalization
//!
//! Single source of truth for the classifier's input schema. The model
//! was trained on this exact order - changing it silently breaks every
//! deployed artifact, so the layout lives here and nowhere else.

use serde::{Deserialize, Serialize};

use super::input::StudentInput;
use super::rules::{BACKLOG_LOG_CAP, DECISION_TIME_SCALE_HOURS};

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in the exact order they appear in the vector.
pub const FEATURE_LAYOUT: &[&str] = &[
    "cgpa_norm",          // 0: cgpa / 10
    "backlogs_log",       // 1: min(log(1 + backlogs), 3)
    "tech_interest",      // 2: tech_interest / 5
    "core_interest",      // 3: core_interest / 5
    "management_interest",// 4: management_interest / 5
    "confidence",         // 5: confidence / 5
    "career_changes",     // 6: raw count, intentionally unscaled
    "decision_time",      // 7: min(decision_time / 24, 1)
];

/// Total number of features. Must match FEATURE_LAYOUT.len().
pub const FEATURE_COUNT: usize = 8;

/// Name of the feature at `index`, for logging.
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

// ============================================================================
// FEATURE VECTOR
// ============================================================================

/// Model input. Ephemeral - built per request, handed to the classifier,
/// then dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn from_values(values: [f32; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Named values for structured logging.
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "values": self.values,
            "named_values": FEATURE_LAYOUT
                .iter()
                .zip(self.values.iter())
                .map(|(name, value)| (name.to_string(), *value))
                .collect::<std::collections::HashMap<_, _>>(),
        })
    }
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Map a validated submission onto the model's feature space.
///
/// Pure and total: validated input always produces a vector. Note that
/// career_changes is deliberately left raw - the deployed model was
/// trained that way and rescaling it would break label compatibility.
pub fn normalize(input: &StudentInput) -> FeatureVector {
    FeatureVector::from_values([
        (input.cgpa / 10.0) as f32,
        (1.0 + input.backlogs as f32).ln().min(BACKLOG_LOG_CAP),
        input.tech_interest as f32 / 5.0,
        input.core_interest as f32 / 5.0,
        input.management_interest as f32 / 5.0,
        input.confidence as f32 / 5.0,
        input.career_changes as f32,
        (input.decision_time as f32 / DECISION_TIME_SCALE_HOURS).min(1.0),
    ])
}

// ============================================================================
// TESTS
// ============================================================================
