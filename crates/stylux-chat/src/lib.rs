//! Conversation core for the Stylux chat demo.
//!
//! Holds the per-view conversation state, resolves bot replies either from
//! the recommendation endpoint or a built-in rule table, and drives the
//! submit/resolve/append cycle.

pub mod error;
pub mod orchestrator;
pub mod resolver;
pub mod rules;
pub mod session;
pub mod views;

pub use error::ChatError;
pub use orchestrator::ChatSession;
pub use resolver::{build_resolver, RemoteResolver, ReplyResolver, RuleTableResolver};
pub use rules::{ReplyRule, RuleTable, FALLBACK_REPLY};
pub use session::{ConversationState, RECENT_QUERY_LIMIT};
pub use views::{HomeView, IdentityProvider};
