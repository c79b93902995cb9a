//! Reason Explainer
//!
//! Turns a bare risk label back into something a student can act on:
//! an ordered list of plain-language risk factors plus a three-clause
//! narrative summary.

use serde::{Deserialize, Serialize};

use super::input::{RiskLabel, StudentInput};
use super::rules::{FREQUENT_CHANGES_MIN, LOW_CONFIDENCE_MAX, WEAK_CGPA_MAX};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskExplanation {
    pub reasons: Vec<String>,
    pub summary: String,
}

/// Derive reasons and summary from raw input + label.
pub fn explain(input: &StudentInput, label: RiskLabel) -> RiskExplanation {
    let reasons = reasons_for(input, label);
    let summary = summary_for(label, &reasons);
    RiskExplanation { reasons, summary }
}

/// Reason rules in fixed order. Independent, not mutually exclusive.
/// The fallback keeps a High label from ever arriving with zero reasons.
fn reasons_for(input: &StudentInput, label: RiskLabel) -> Vec<String> {
    let mut reasons = Vec::new();

    if input.confidence <= LOW_CONFIDENCE_MAX {
        reasons.push("Your current career confidence is low, so decisions may feel uncertain.".to_string());
    }
    if input.career_changes >= FREQUENT_CHANGES_MIN {
        reasons.push("You have changed career preferences several times, which suggests instability.".to_string());
    }
    if input.cgpa < WEAK_CGPA_MAX {
        reasons.push("Your recent academic performance may not yet strongly support your chosen direction.".to_string());
    }
    if label == RiskLabel::High && reasons.is_empty() {
        reasons.push("Several medium-level factors together increase overall risk.".to_string());
    }

    reasons
}

/// Three clauses: label intro, detail from the first two reasons
/// (or the stable-profile text), and a label-dependent next step.
fn summary_for(label: RiskLabel, reasons: &[String]) -> String {
    let intro = format!(
        "Your profile is currently classified as {} risk for career decision instability.",
        label
    );

    let detail = if reasons.is_empty() {
        "Your inputs look reasonably stable right now, with no major warning pattern detected.".to_string()
    } else {
        let short_reasons: Vec<&str> = reasons
            .iter()
            .take(2)
            .map(|r| r.trim_end_matches('.'))
            .collect();
        format!("This result is mainly driven by {}.", short_reasons.join(", "))
    };

    let next_step = match label {
        RiskLabel::High => "Focus on one short-term goal and seek mentoring to improve confidence and consistency.",
        RiskLabel::Medium => "With regular guidance and clearer goals, this risk can likely be reduced over time.",
        RiskLabel::Low => "Keep following your current plan and review your goals periodically to stay on track.",
    };

    format!("{} {} {}", intro, detail, next_step)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn stable_input() -> StudentInput {
        StudentInput {
            cgpa: 8.5,
            backlogs: 0,
            tech_interest: 4,
            core_interest: 4,
            management_interest: 2,
            confidence: 4,
            career_changes: 0,
            decision_time: 3,
        }
    }

    #[test]
    fn test_all_three_rules_fire_in_order() {
        let input = StudentInput {
            cgpa: 5.5,
            confidence: 1,
            career_changes: 4,
            ..stable_input()
        };
        let result = explain(&input, RiskLabel::High);
        assert_eq!(result.reasons.len(), 3);
        assert!(result.reasons[0].contains("confidence"));
        assert!(result.reasons[1].contains("changed career preferences"));
        assert!(result.reasons[2].contains("academic performance"));
    }

    #[test]
    fn test_high_label_without_triggers_gets_fallback() {
        let result = explain(&stable_input(), RiskLabel::High);
        assert_eq!(result.reasons.len(), 1);
        assert!(result.reasons[0].contains("medium-level factors"));
    }

    #[test]
    fn test_quiet_profile_has_no_reasons() {
        let result = explain(&stable_input(), RiskLabel::Low);
        assert!(result.reasons.is_empty());
        assert!(result.summary.contains("no major warning pattern"));
    }

    #[test]
    fn test_summary_references_first_two_reasons() {
        let input = StudentInput {
            cgpa: 5.5,
            confidence: 1,
            career_changes: 4,
            ..stable_input()
        };
        let result = explain(&input, RiskLabel::High);
        // trailing periods stripped, joined by comma, third reason dropped
        assert!(result.summary.contains("mainly driven by"));
        assert!(result.summary.contains("uncertain, You have changed"));
        assert!(!result.summary.contains("academic performance may not yet"));
    }

    #[test]
    fn test_next_step_follows_label() {
        assert!(explain(&stable_input(), RiskLabel::High).summary.contains("seek mentoring"));
        assert!(explain(&stable_input(), RiskLabel::Medium).summary.contains("reduced over time"));
        assert!(explain(&stable_input(), RiskLabel::Low).summary.contains("review your goals periodically"));
    }
}
