//! Input Types
//!
//! Request payload and risk labels. No logic here - just data structures.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// STUDENT INPUT
// ============================================================================

/// One student submission, validated at the HTTP boundary.
///
/// The pipeline trusts these ranges; validation must run before any
/// stage sees the value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StudentInput {
    /// Cumulative grade point average (0-10 scale)
    #[validate(range(min = 0.0, max = 10.0))]
    pub cgpa: f64,

    /// Number of active backlogs
    pub backlogs: u32,

    /// Interest in software/tech roles (1-5)
    #[validate(range(min = 1, max = 5))]
    pub tech_interest: u8,

    /// Interest in core-domain roles (1-5)
    #[validate(range(min = 1, max = 5))]
    pub core_interest: u8,

    /// Interest in management/product roles (1-5)
    #[validate(range(min = 1, max = 5))]
    pub management_interest: u8,

    /// Self-reported decision confidence (1-5)
    #[validate(range(min = 1, max = 5))]
    pub confidence: u8,

    /// How many times the career preference changed
    pub career_changes: u32,

    /// Time spent on the decision, in hours
    pub decision_time: u32,
}

// ============================================================================
// RISK LABEL
// ============================================================================

/// Classifier output. Produced once per request, read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    Low,
    Medium,
    High,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low",
            RiskLabel::Medium => "Medium",
            RiskLabel::High => "High",
        }
    }

    /// Parse a label string coming back from a model artifact.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(RiskLabel::Low),
            "Medium" => Some(RiskLabel::Medium),
            "High" => Some(RiskLabel::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for label in [RiskLabel::Low, RiskLabel::Medium, RiskLabel::High] {
            assert_eq!(RiskLabel::parse(label.as_str()), Some(label));
        }
        assert_eq!(RiskLabel::parse("Critical"), None);
    }

    #[test]
    fn test_input_validation_ranges() {
        let input = StudentInput {
            cgpa: 7.5,
            backlogs: 0,
            tech_interest: 4,
            core_interest: 3,
            management_interest: 2,
            confidence: 4,
            career_changes: 1,
            decision_time: 6,
        };
        assert!(input.validate().is_ok());

        let bad_cgpa = StudentInput { cgpa: 11.0, ..input.clone() };
        assert!(bad_cgpa.validate().is_err());

        let bad_interest = StudentInput { tech_interest: 0, ..input };
        assert!(bad_interest.validate().is_err());
    }
}
