//! Recommendation Engine
//!
//! Track selection, course catalog lookup and skills-to-focus. The
//! catalog is a typed mapping keyed by a closed track enum, loaded once
//! at startup and validated to contain every track the selection rule
//! can produce - a missing track at request time is a contract bug, not
//! a recoverable condition.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::input::{RiskLabel, StudentInput};
use super::rules::{FREQUENT_CHANGES_MIN, LOW_CONFIDENCE_MAX, WEAK_CGPA_MAX};

/// Courses returned for a non-High profile when the full-course-list
/// flag is off.
const SHORT_LIST_LEN: usize = 3;

// ============================================================================
// TRACKS
// ============================================================================

/// Closed set of recommendation tracks. Every variant must exist in the
/// catalog; `RecommendationCatalog::validate` enforces that at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    SoftwareTrack,
    CoreTrack,
    FoundationTrack,
}

impl Track {
    pub const ALL: [Track; 3] = [Track::SoftwareTrack, Track::CoreTrack, Track::FoundationTrack];

    pub fn as_str(&self) -> &'static str {
        match self {
            Track::SoftwareTrack => "software_track",
            Track::CoreTrack => "core_track",
            Track::FoundationTrack => "foundation_track",
        }
    }

    /// Human-readable career path for the track.
    pub fn career_path(&self) -> &'static str {
        match self {
            Track::SoftwareTrack => "Software / IT Path",
            Track::CoreTrack => "Core Engineering Path",
            Track::FoundationTrack => {
                "Career Exploration Foundation Path (guided mentoring + structured goal setting)"
            }
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CATALOG
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub title: String,
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Read(String),

    #[error("failed to parse catalog: {0}")]
    Parse(String),

    #[error("catalog has no courses for track '{0}'")]
    MissingTrack(Track),
}

/// Static track -> course mapping. Load-then-freeze: built once before
/// the first request, shared read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationCatalog {
    tracks: HashMap<Track, Vec<Course>>,
}

impl RecommendationCatalog {
    /// Built-in course set, used when no catalog file is configured.
    pub fn builtin() -> Self {
        fn course(title: &str, platform: &str) -> Course {
            Course {
                title: title.to_string(),
                platform: platform.to_string(),
                url: "https://example.com".to_string(),
            }
        }

        let mut tracks = HashMap::new();
        tracks.insert(
            Track::SoftwareTrack,
            vec![
                course("Python for Everybody", "Coursera"),
                course("Intro to Data Analysis", "edX"),
                course("Project-Based Web Development", "Udemy"),
                course("SQL and Databases Fundamentals", "Coursera"),
            ],
        );
        tracks.insert(
            Track::CoreTrack,
            vec![
                course("Domain Fundamentals Masterclass", "Coursera"),
                course("Applied Problem Solving", "Udemy"),
                course("Industry Readiness Toolkit", "edX"),
                course("Core Engineering Mathematics Refresher", "edX"),
            ],
        );
        tracks.insert(
            Track::FoundationTrack,
            vec![
                course("Career Planning Essentials", "Coursera"),
                course("Self-Assessment and Goal Setting", "Udemy"),
                course("Confidence and Decision Making", "edX"),
                course("Time Management for Students", "Udemy"),
            ],
        );

        Self { tracks }
    }

    /// Load a catalog override from a JSON file:
    /// `{"software_track": [{"title", "platform", "url"}, ...], ...}`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::Read(e.to_string()))?;
        let tracks: HashMap<Track, Vec<Course>> =
            serde_json::from_str(&raw).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self { tracks })
    }

    /// Fail-fast check that every selectable track resolves. Runs at
    /// startup so catalog drift never surfaces mid-request.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for track in Track::ALL {
            match self.tracks.get(&track) {
                Some(courses) if !courses.is_empty() => {}
                _ => return Err(CatalogError::MissingTrack(track)),
            }
        }
        Ok(())
    }

    pub fn courses(&self, track: Track) -> Result<&[Course], CatalogError> {
        self.tracks
            .get(&track)
            .map(|c| c.as_slice())
            .ok_or(CatalogError::MissingTrack(track))
    }
}

// ============================================================================
// RECOMMENDATION
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub career_path: String,
    pub track: Track,
    pub courses: Vec<Course>,
    pub skills_to_focus: Vec<String>,
}

/// Track precedence: low confidence overrides the interest comparison
/// entirely - a hesitant student goes to the foundation track no matter
/// how strong the technical lean is.
pub fn select_track(input: &StudentInput) -> Track {
    if input.confidence <= LOW_CONFIDENCE_MAX {
        Track::FoundationTrack
    } else if input.tech_interest >= input.core_interest {
        Track::SoftwareTrack
    } else {
        Track::CoreTrack
    }
}

fn skills_to_focus(input: &StudentInput, label: RiskLabel) -> Vec<String> {
    let mut skills = vec!["Goal clarity", "Consistency", "Self-reflection"];

    if input.confidence <= LOW_CONFIDENCE_MAX {
        skills.push("Decision confidence");
    }
    if input.career_changes >= FREQUENT_CHANGES_MIN {
        skills.push("Long-term planning");
    }
    if input.cgpa < WEAK_CGPA_MAX {
        skills.push("Academic strengthening");
    }
    if label == RiskLabel::Low {
        skills.push("Advanced specialization");
    }

    // Keep unique, preserve first-occurrence order
    let mut seen = HashSet::new();
    skills
        .into_iter()
        .filter(|s| seen.insert(*s))
        .map(|s| s.to_string())
        .collect()
}

/// Build the recommendation block. `full_course_list` selects between
/// the two catalog behaviors: when off, non-High profiles only get the
/// first three catalog entries; High profiles always get the full list.
pub fn recommend(
    input: &StudentInput,
    label: RiskLabel,
    catalog: &RecommendationCatalog,
    full_course_list: bool,
) -> Result<Recommendation, CatalogError> {
    let track = select_track(input);
    let all_courses = catalog.courses(track)?;

    let courses: Vec<Course> = if full_course_list || label == RiskLabel::High {
        all_courses.to_vec()
    } else {
        all_courses.iter().take(SHORT_LIST_LEN).cloned().collect()
    };

    Ok(Recommendation {
        career_path: track.career_path().to_string(),
        track,
        courses,
        skills_to_focus: skills_to_focus(input, label),
    })
}

// ============================================================================
// TESTS
// ============================================================================
