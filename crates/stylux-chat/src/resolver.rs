//! Reply resolution strategies.
//!
//! Both strategies are infallible from the caller's point of view: any
//! failure is logged and turned into [`FALLBACK_REPLY`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use stylux_core::config::{RemoteConfig, ResolverStrategy, StyluxConfig};

use crate::error::ChatError;
use crate::rules::{RuleTable, FALLBACK_REPLY};

// =============================================================================
// Wire types
// =============================================================================

/// Body sent to the recommendation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub message: String,
}

/// Body expected back from the recommendation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub reply: String,
}

// =============================================================================
// ReplyResolver
// =============================================================================

/// Decides what the bot says in response to a user message.
#[async_trait]
pub trait ReplyResolver: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Produce the bot reply for `text`. Never fails.
    async fn resolve(&self, text: &str) -> String;
}

/// Build the resolver selected by `chat.strategy`.
pub fn build_resolver(config: &StyluxConfig) -> Result<Arc<dyn ReplyResolver>, ChatError> {
    let resolver: Arc<dyn ReplyResolver> = match config.chat.strategy {
        ResolverStrategy::Remote => Arc::new(RemoteResolver::from_config(&config.remote)?),
        ResolverStrategy::Local => Arc::new(RuleTableResolver::new(
            RuleTable::default(),
            Duration::from_millis(config.local.simulated_latency_ms),
        )),
    };
    tracing::info!(strategy = resolver.name(), "Reply resolver configured");
    Ok(resolver)
}

// =============================================================================
// RemoteResolver
// =============================================================================

/// Forwards each message to the recommendation endpoint.
///
/// One attempt per message: no retry and no backoff.
#[derive(Clone)]
pub struct RemoteResolver {
    client: Client,
    endpoint: String,
}

impl RemoteResolver {
    /// Create a resolver using the HTTP client's default timeouts.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &RemoteConfig) -> Result<Self, ChatError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ChatError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform the request, surfacing every failure as a [`ChatError`].
    pub async fn request_reply(&self, text: &str) -> Result<String, ChatError> {
        let body = RecommendRequest {
            message: text.to_string(),
        };
        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let reply: RecommendResponse = response.json().await?;
        Ok(reply.reply)
    }
}

#[async_trait]
impl ReplyResolver for RemoteResolver {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn resolve(&self, text: &str) -> String {
        match self.request_reply(text).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(endpoint = %self.endpoint, error = %e, "Error fetching response");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}

// =============================================================================
// RuleTableResolver
// =============================================================================

/// Answers from the built-in rule table after a simulated network delay.
#[derive(Debug, Clone)]
pub struct RuleTableResolver {
    table: RuleTable,
    latency: Duration,
}

impl RuleTableResolver {
    pub fn new(table: RuleTable, latency: Duration) -> Self {
        Self { table, latency }
    }

    /// Default table with no delay.
    pub fn instant() -> Self {
        Self::new(RuleTable::default(), Duration::ZERO)
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }
}

#[async_trait]
impl ReplyResolver for RuleTableResolver {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn resolve(&self, text: &str) -> String {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match self.table.find(text) {
            Some(rule) => {
                tracing::debug!(trigger = rule.trigger, "Rule matched");
                rule.reply.to_string()
            }
            None => {
                tracing::debug!("No rule matched");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
