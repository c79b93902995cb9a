//! Mentorix AI Backend
//!
//! Career-decision risk analysis service.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      MENTORIX BACKEND                      │
//! ├────────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌────────────┐   ┌──────────────────────┐  │
//! │  │  API     │   │ Normalizer │   │  Risk Classifier     │  │
//! │  │  (Axum)  │──▶│ + Pipeline │──▶│  (ONNX / heuristic)  │  │
//! │  └──────────┘   └─────┬──────┘   └──────────────────────┘  │
//! │                       ▼                                    │
//! │        ┌──────────────────────────────────┐                │
//! │        │ Explainer · Career Mapper ·      │                │
//! │        │ Recommender · Stability Scorer   │                │
//! │        └──────────────────────────────────┘                │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Classifier and course catalog are loaded once at startup and frozen;
//! every request is a pure function over them, so there is no shared
//! mutable state and no locking on the request path.

mod config;
mod error;
mod handlers;
mod logic;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logic::classifier::{HeuristicRiskClassifier, OnnxRiskClassifier, RiskClassifier};
use logic::pipeline::AnalysisOptions;
use logic::recommend::RecommendationCatalog;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mentorix_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Mentorix AI backend starting...");

    // Classifier backend is chosen once, here. Per-request fallback
    // between backends is deliberately not a thing.
    let classifier: Arc<dyn RiskClassifier> = match &config.model_path {
        Some(path) => Arc::new(
            OnnxRiskClassifier::load(path).expect("Failed to load ONNX risk model"),
        ),
        None => {
            tracing::warn!("RISK_MODEL_PATH not set, using heuristic classifier");
            Arc::new(HeuristicRiskClassifier)
        }
    };
    tracing::info!("Risk classifier backend: {}", classifier.name());

    // Course catalog: load once, validate, then freeze
    let catalog = match &config.catalog_path {
        Some(path) => RecommendationCatalog::from_file(path).expect("Failed to load course catalog"),
        None => RecommendationCatalog::builtin(),
    };
    catalog
        .validate()
        .expect("Course catalog is missing a selectable track");

    // Build application state
    let state = AppState {
        classifier,
        catalog: Arc::new(catalog),
        options: AnalysisOptions {
            full_course_list: config.full_course_list,
        },
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn RiskClassifier>,
    pub catalog: Arc<RecommendationCatalog>,
    pub options: AnalysisOptions,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::check))
        .route("/health", get(handlers::health::check))
        .route("/analyze-risk", post(handlers::analyze::analyze_risk))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        // Wide-open CORS for the hosted frontend
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
