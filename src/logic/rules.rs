//! Risk Rule Thresholds
//!
//! Shared constants for the deterministic rule engines.
//! No logic here - the explainer, recommender and stability scorer all
//! read from this single place so the rules cannot drift apart.

/// Confidence at or below this counts as low decision confidence.
pub const LOW_CONFIDENCE_MAX: u8 = 2;

/// Career preference changes at or above this count as instability.
pub const FREQUENT_CHANGES_MIN: u32 = 3;

/// CGPA below this counts as weak academic alignment.
pub const WEAK_CGPA_MAX: f64 = 6.5;

// ============================================================================
// STABILITY PENALTIES
// ============================================================================

/// Penalty subtracted from 1.0 per risk label.
pub const HIGH_RISK_PENALTY: f64 = 0.33;
pub const MEDIUM_RISK_PENALTY: f64 = 0.15;
pub const LOW_RISK_PENALTY: f64 = 0.05;

// ============================================================================
// FEATURE SCALING
// ============================================================================

/// log(1 + backlogs) is capped here so extreme counts stop mattering.
pub const BACKLOG_LOG_CAP: f32 = 3.0;

/// decision_time is scaled against one day and capped at 1.0.
pub const DECISION_TIME_SCALE_HOURS: f32 = 24.0;
