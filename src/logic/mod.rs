//! Logic Module - Scoring & Explanation Pipeline
//!
//! Everything between a validated request and the final analysis:
//! - `input` - request payload + risk labels
//! - `features` - feature layout + normalization
//! - `classifier` - risk classifier capability (ONNX, heuristic)
//! - `rules` - shared thresholds for the rule engines
//! - `stability` - label -> stability score
//! - `explain` - plain-language reasons + summary
//! - `career` - career direction + insight
//! - `recommend` - track selection, course catalog, skills
//! - `pipeline` - assembles everything into one result

pub mod input;
pub mod features;
pub mod classifier;
pub mod rules;
pub mod stability;
pub mod explain;
pub mod career;
pub mod recommend;
pub mod pipeline;
