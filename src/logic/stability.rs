//! Stability Scorer
//!
//! Label -> bounded stability score. Deliberately ignores the raw
//! features: the score reflects the categorical risk only, so two
//! profiles with the same label always report the same stability.

use super::input::RiskLabel;
use super::rules::{HIGH_RISK_PENALTY, LOW_RISK_PENALTY, MEDIUM_RISK_PENALTY};

/// Stability score in [0,1], rounded to 2 decimal places.
pub fn stability_score(label: RiskLabel) -> f64 {
    let penalty = match label {
        RiskLabel::High => HIGH_RISK_PENALTY,
        RiskLabel::Medium => MEDIUM_RISK_PENALTY,
        RiskLabel::Low => LOW_RISK_PENALTY,
    };
    ((1.0 - penalty) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_constant_per_label() {
        assert_eq!(stability_score(RiskLabel::High), 0.67);
        assert_eq!(stability_score(RiskLabel::Medium), 0.85);
        assert_eq!(stability_score(RiskLabel::Low), 0.95);
    }

    #[test]
    fn test_score_stays_bounded() {
        for label in [RiskLabel::Low, RiskLabel::Medium, RiskLabel::High] {
            let score = stability_score(label);
            assert!((0.0..=1.0).contains(&score));
        }
    }
}
