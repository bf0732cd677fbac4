//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use stylux_chat::{ReplyResolver, RuleTable, RuleTableResolver};
use stylux_core::config::StyluxConfig;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<StyluxConfig>,
    /// Produces the reply for each recommendation request.
    pub resolver: Arc<dyn ReplyResolver>,
    /// Rule table behind the local strategy, reported by `/health`.
    pub rules: RuleTable,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: StyluxConfig, resolver: Arc<dyn ReplyResolver>) -> Self {
        Self {
            config: Arc::new(config),
            resolver,
            rules: RuleTable::default(),
            start_time: Instant::now(),
        }
    }

    /// State answering from the built-in rule table without delay.
    pub fn with_rule_table(config: StyluxConfig) -> Self {
        Self::new(config, Arc::new(RuleTableResolver::instant()))
    }
}
