//! Analysis Pipeline - Response Assembler
//!
//! One synchronous chain per request: normalize, classify, then fan the
//! raw input + label out to the derivation engines and merge. Any
//! classifier or catalog failure aborts the whole request - a partial
//! result is never returned.

use serde::Serialize;
use thiserror::Error;

use super::career::map_direction;
use super::classifier::{ClassifierError, RiskClassifier};
use super::explain::explain;
use super::features::normalize;
use super::input::{RiskLabel, StudentInput};
use super::recommend::{recommend, CatalogError, Recommendation, RecommendationCatalog};
use super::stability::stability_score;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Per-process pipeline options, fixed at startup.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    /// Return the full catalog list even for non-High profiles.
    pub full_course_list: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { full_course_list: false }
    }
}

/// Final result object, fully derived, one per request.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub risk_level: RiskLabel,
    pub stability_score: f64,
    pub reasons: Vec<String>,
    pub summary: String,
    pub recommendation: Recommendation,
    pub career_direction: String,
    pub insight: String,
}

/// Run the full scoring and explanation pipeline for one submission.
pub fn analyze(
    input: &StudentInput,
    classifier: &dyn RiskClassifier,
    catalog: &RecommendationCatalog,
    options: &AnalysisOptions,
) -> Result<AnalysisResult, PipelineError> {
    let features = normalize(input);

    tracing::debug!(features = %features.to_log_entry(), "running risk classifier");
    let label = classifier.predict(&features)?;

    let explanation = explain(input, label);
    let career = map_direction(input);
    let recommendation = recommend(input, label, catalog, options.full_course_list)?;

    tracing::debug!(risk = %label, direction = %career.direction, "analysis complete");

    Ok(AnalysisResult {
        risk_level: label,
        stability_score: stability_score(label),
        reasons: explanation.reasons,
        summary: explanation.summary,
        recommendation,
        career_direction: career.direction.as_str().to_string(),
        insight: career.insight,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::FeatureVector;
    use crate::logic::recommend::Track;

    /// Test double: always returns the configured label.
    struct FixedClassifier(RiskLabel);

    impl RiskClassifier for FixedClassifier {
        fn predict(&self, _features: &FeatureVector) -> Result<RiskLabel, ClassifierError> {
            Ok(self.0)
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    /// Test double: always fails.
    struct BrokenClassifier;

    impl RiskClassifier for BrokenClassifier {
        fn predict(&self, _features: &FeatureVector) -> Result<RiskLabel, ClassifierError> {
            Err(ClassifierError::Inference("session exploded".to_string()))
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    #[test]
    fn test_confident_technical_profile() {
        // cgpa=9, no backlogs, strong tech+core, confident, decisive
        let input = StudentInput {
            cgpa: 9.0,
            backlogs: 0,
            tech_interest: 5,
            core_interest: 4,
            management_interest: 1,
            confidence: 5,
            career_changes: 0,
            decision_time: 2,
        };
        let catalog = RecommendationCatalog::builtin();
        let result = analyze(
            &input,
            &FixedClassifier(RiskLabel::Low),
            &catalog,
            &AnalysisOptions::default(),
        )
        .unwrap();

        assert_eq!(result.risk_level, RiskLabel::Low);
        assert_eq!(result.stability_score, 0.95);
        assert!(result.reasons.is_empty());
        assert_eq!(result.career_direction, "Software / Data Track");
        assert!(result
            .recommendation
            .skills_to_focus
            .contains(&"Advanced specialization".to_string()));
    }

    #[test]
    fn test_unstable_profile_fires_every_engine() {
        let input = StudentInput {
            cgpa: 5.5,
            backlogs: 6,
            tech_interest: 2,
            core_interest: 2,
            management_interest: 2,
            confidence: 1,
            career_changes: 4,
            decision_time: 10,
        };
        let catalog = RecommendationCatalog::builtin();
        let result = analyze(
            &input,
            &FixedClassifier(RiskLabel::High),
            &catalog,
            &AnalysisOptions::default(),
        )
        .unwrap();

        assert_eq!(result.risk_level, RiskLabel::High);
        assert_eq!(result.stability_score, 0.67);
        // confidence, career_changes and cgpa rules all fire
        assert_eq!(result.reasons.len(), 3);
        assert_eq!(result.recommendation.track, Track::FoundationTrack);
        assert_eq!(result.career_direction, "Exploration Phase");
    }

    #[test]
    fn test_low_confidence_overrides_interest_comparison() {
        let input = StudentInput {
            cgpa: 8.0,
            backlogs: 0,
            tech_interest: 5,
            core_interest: 1,
            management_interest: 1,
            confidence: 2,
            career_changes: 0,
            decision_time: 4,
        };
        let catalog = RecommendationCatalog::builtin();
        let result = analyze(
            &input,
            &FixedClassifier(RiskLabel::Medium),
            &catalog,
            &AnalysisOptions::default(),
        )
        .unwrap();

        assert_eq!(result.recommendation.track, Track::FoundationTrack);
    }

    #[test]
    fn test_direction_ignores_risk_label() {
        let input = StudentInput {
            cgpa: 7.0,
            backlogs: 1,
            tech_interest: 4,
            core_interest: 3,
            management_interest: 2,
            confidence: 3,
            career_changes: 1,
            decision_time: 6,
        };
        let catalog = RecommendationCatalog::builtin();
        let options = AnalysisOptions::default();

        let low = analyze(&input, &FixedClassifier(RiskLabel::Low), &catalog, &options).unwrap();
        let high = analyze(&input, &FixedClassifier(RiskLabel::High), &catalog, &options).unwrap();

        assert_eq!(low.career_direction, high.career_direction);
        assert_eq!(low.insight, high.insight);
    }

    #[test]
    fn test_classifier_failure_aborts_request() {
        let input = StudentInput {
            cgpa: 7.0,
            backlogs: 0,
            tech_interest: 3,
            core_interest: 3,
            management_interest: 3,
            confidence: 3,
            career_changes: 0,
            decision_time: 4,
        };
        let catalog = RecommendationCatalog::builtin();
        let err = analyze(&input, &BrokenClassifier, &catalog, &AnalysisOptions::default())
            .unwrap_err();
        assert!(matches!(err, PipelineError::Classifier(_)));
    }

    #[test]
    fn test_result_serializes_with_contract_fields() {
        let input = StudentInput {
            cgpa: 9.0,
            backlogs: 0,
            tech_interest: 5,
            core_interest: 4,
            management_interest: 1,
            confidence: 5,
            career_changes: 0,
            decision_time: 2,
        };
        let catalog = RecommendationCatalog::builtin();
        let result = analyze(
            &input,
            &FixedClassifier(RiskLabel::Low),
            &catalog,
            &AnalysisOptions::default(),
        )
        .unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["risk_level"], "Low");
        assert_eq!(json["stability_score"], 0.95);
        assert!(json["reasons"].is_array());
        assert_eq!(json["recommendation"]["track"], "software_track");
        assert!(json["recommendation"]["courses"].is_array());
        assert!(json["insight"].is_string());
    }
}
