//! Risk Classifier
//!
//! The single opaque capability the pipeline depends on: an 8-feature
//! vector goes in, one of three labels comes out. Two real backends
//! (ONNX model, deterministic heuristic) plus whatever test doubles the
//! tests need. Backend choice happens once at startup - never silently
//! per request.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use thiserror::Error;

use super::features::{FeatureVector, FEATURE_COUNT};
use super::input::RiskLabel;
use super::rules::{FREQUENT_CHANGES_MIN, WEAK_CGPA_MAX};

/// Class order of the exported model (sklearn sorts labels
/// lexicographically before training).
const CLASS_LABELS: [RiskLabel; 3] = [RiskLabel::High, RiskLabel::Low, RiskLabel::Medium];

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to load model: {0}")]
    Load(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("classifier returned out-of-domain output: {0}")]
    BadOutput(String),
}

// ============================================================================
// CAPABILITY
// ============================================================================

/// Classifier contract. Same vector must yield the same label for the
/// process lifetime; failures surface as errors, never as a default label.
pub trait RiskClassifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<RiskLabel, ClassifierError>;

    /// Backend name for startup logging.
    fn name(&self) -> &'static str;
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// ONNX-backed classifier (exported RandomForest).
///
/// Expects an input of shape [1, 8] and a probability output of shape
/// [1, 3] in CLASS_LABELS order.
#[derive(Debug)]
pub struct OnnxRiskClassifier {
    session: Mutex<Session>,
    model_path: String,
}

impl OnnxRiskClassifier {
    pub fn load(model_path: &str) -> Result<Self, ClassifierError> {
        tracing::info!("Loading ONNX risk model from: {}", model_path);

        if !std::path::Path::new(model_path).exists() {
            return Err(ClassifierError::Load(format!("model not found: {}", model_path)));
        }

        let session = Session::builder()
            .map_err(|e| ClassifierError::Load(format!("session builder error: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ClassifierError::Load(format!("optimization error: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| ClassifierError::Load(format!("load error: {}", e)))?;

        tracing::info!("ONNX risk model loaded");

        Ok(Self {
            session: Mutex::new(session),
            model_path: model_path.to_string(),
        })
    }

    pub fn model_path(&self) -> &str {
        &self.model_path
    }
}

impl RiskClassifier for OnnxRiskClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<RiskLabel, ClassifierError> {
        let mut session = self.session.lock();

        // Probability output; fall back to the last output when the
        // export did not name it.
        let output_name = session
            .outputs()
            .iter()
            .find(|o| o.name() == "probabilities")
            .or_else(|| session.outputs().last())
            .map(|o| o.name().to_string())
            .ok_or_else(|| ClassifierError::BadOutput("model has no outputs".to_string()))?;

        let input_array = Array2::<f32>::from_shape_vec(
            (1, FEATURE_COUNT),
            features.as_slice().to_vec(),
        )
        .map_err(|e| ClassifierError::Inference(format!("array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ClassifierError::Inference(format!("tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ClassifierError::Inference(format!("inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| ClassifierError::BadOutput("missing probability output".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| ClassifierError::BadOutput(format!("extract error: {}", e)))?;

        let probabilities = output_tensor.1;
        if probabilities.len() != CLASS_LABELS.len() {
            return Err(ClassifierError::BadOutput(format!(
                "expected {} class probabilities, got {}",
                CLASS_LABELS.len(),
                probabilities.len()
            )));
        }

        let mut best = 0;
        for (i, &p) in probabilities.iter().enumerate() {
            if p > probabilities[best] {
                best = i;
            }
        }

        Ok(CLASS_LABELS[best])
    }

    fn name(&self) -> &'static str {
        "onnx"
    }
}

// ============================================================================
// HEURISTIC IMPLEMENTATION
// ============================================================================

/// Deterministic rule-based classifier for deployments without a model
/// artifact. Counts risk signals on the normalized vector.
#[derive(Debug, Default, Clone)]
pub struct HeuristicRiskClassifier;

impl HeuristicRiskClassifier {
    fn signal_count(features: &FeatureVector) -> usize {
        let mut signals = 0;

        // confidence <= 2 on the 1-5 scale -> normalized <= 0.4
        if features.values[5] <= 0.4 {
            signals += 1;
        }
        if features.values[6] >= FREQUENT_CHANGES_MIN as f32 {
            signals += 1;
        }
        // cgpa below the weak-alignment cutoff, on the /10 scale
        if features.values[0] < (WEAK_CGPA_MAX / 10.0) as f32 {
            signals += 1;
        }
        // log(1 + backlogs) >= log(4), i.e. three or more backlogs
        if features.values[1] >= 4.0f32.ln() {
            signals += 1;
        }

        signals
    }
}

impl RiskClassifier for HeuristicRiskClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<RiskLabel, ClassifierError> {
        Ok(match Self::signal_count(features) {
            0 => RiskLabel::Low,
            1 | 2 => RiskLabel::Medium,
            _ => RiskLabel::High,
        })
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

// ============================================================================
// TESTS
// ============================================================================
