//! Career Direction Mapper
//!
//! Coarse career-fit label plus one tailored insight sentence, derived
//! from the interest profile alone. Risk never feeds into this: fit is
//! about what the student leans toward, not how shaky the decision is.

use serde::{Deserialize, Serialize};

use super::input::StudentInput;
use super::rules::LOW_CONFIDENCE_MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareerDirection {
    SoftwareData,
    ManagementProduct,
    Exploration,
}

impl CareerDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerDirection::SoftwareData => "Software / Data Track",
            CareerDirection::ManagementProduct => "Management / Product Track",
            CareerDirection::Exploration => "Exploration Phase",
        }
    }
}

impl std::fmt::Display for CareerDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerInsight {
    pub direction: CareerDirection,
    pub insight: String,
}

/// First match wins.
fn direction_for(input: &StudentInput) -> CareerDirection {
    if input.tech_interest >= 4 && input.core_interest >= 3 {
        CareerDirection::SoftwareData
    } else if input.management_interest >= 4 {
        CareerDirection::ManagementProduct
    } else {
        CareerDirection::Exploration
    }
}

/// Map interest profile to direction + insight. Pure; label-independent.
pub fn map_direction(input: &StudentInput) -> CareerInsight {
    let direction = direction_for(input);

    // Secondary condition, checked in order: strong readiness, then low
    // confidence, then the aligned-but-inconsistent middle ground.
    let strong = input.cgpa >= 8.0 && input.confidence >= 4;
    let hesitant = input.confidence <= LOW_CONFIDENCE_MAX;

    let insight = match direction {
        CareerDirection::SoftwareData => {
            if strong {
                "You show strong readiness for technical roles; focus on applied projects and internship opportunities."
            } else if hesitant {
                "You have a solid technical base, but confidence is low; use guided practice and mentorship to build momentum."
            } else {
                "You are aligned toward software/data roles; strengthen consistency with problem-solving and portfolio work."
            }
        }
        CareerDirection::ManagementProduct => {
            if strong {
                "You appear well-positioned for management/product pathways; build leadership artifacts and cross-functional exposure."
            } else if hesitant {
                "You show management interest, and confidence can improve through team projects, communication practice, and gradual leadership tasks."
            } else {
                "You are trending toward management/product roles; combine domain understanding with communication and planning skills."
            }
        }
        CareerDirection::Exploration => {
            if strong {
                "You have strong academic and confidence indicators; use this phase to test tracks through short projects before committing."
            } else if hesitant {
                "This is a healthy exploration stage; start with foundational modules and small wins to improve confidence before specializing."
            } else {
                "You are in an exploration phase; compare tracks with structured experiments and choose based on sustained interest."
            }
        }
    };

    CareerInsight {
        direction,
        insight: insight.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
