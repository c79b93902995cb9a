//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path to the ONNX risk model. Unset = heuristic classifier.
    pub model_path: Option<String>,

    /// Optional JSON catalog override. Unset = built-in catalog.
    pub catalog_path: Option<String>,

    /// Return the full course list even for non-High risk profiles
    pub full_course_list: bool,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            model_path: env::var("RISK_MODEL_PATH").ok().filter(|p| !p.is_empty()),

            catalog_path: env::var("CATALOG_PATH").ok().filter(|p| !p.is_empty()),

            full_course_list: env::var("FULL_COURSE_LIST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
