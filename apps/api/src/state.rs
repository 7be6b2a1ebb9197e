use std::sync::Arc;

use crate::config::Config;
use crate::matcher::predictor::MatchPredictor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable predictor. Default: HeuristicPredictor until the real model ships.
    pub predictor: Arc<dyn MatchPredictor>,
}
