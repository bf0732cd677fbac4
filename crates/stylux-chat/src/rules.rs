//! The built-in table of canned replies.
//!
//! Rules are evaluated in declaration order and the first trigger found
//! anywhere in the user's text wins. Triggers are not mutually exclusive.
//! Triggers are stored lowercase; the user's text is lowercased once per
//! lookup.

/// Reply shown whenever nothing better can be produced.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't process that request.";

/// A trigger phrase and the canned reply it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyRule {
    /// Lowercase phrase searched for in the lowercased user text.
    pub trigger: &'static str,
    pub reply: &'static str,
}

impl ReplyRule {
    /// Substring test of the trigger against already-lowercased text.
    pub fn matches_lowercase(&self, lowered: &str) -> bool {
        lowered.contains(self.trigger)
    }
}

const DEFAULT_RULES: [ReplyRule; 5] = [
    ReplyRule {
        trigger: "hello",
        reply: "Hi there! I'm STYLUX, your AI fashion assistant. What are we styling today?",
    },
    ReplyRule {
        trigger: "wedding",
        reply: "For a wedding, try a tailored suit in navy or charcoal, or a flowing midi dress \
                in a soft pastel. Pair it with polished shoes and keep accessories minimal.",
    },
    ReplyRule {
        trigger: "casual",
        reply: "For a casual look, go with well-fitted jeans, a crisp white tee and clean \
                sneakers. Add a light overshirt if it gets cool.",
    },
    ReplyRule {
        trigger: "trend",
        reply: "This season is all about relaxed tailoring, earthy tones and statement \
                outerwear. Oversized blazers are everywhere.",
    },
    ReplyRule {
        trigger: "color",
        reply: "Neutrals like beige, olive and navy are easy to mix. For a pop of color, \
                add one bold accessory such as a bag or scarf.",
    },
];

/// An ordered, immutable list of reply rules.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    rules: &'static [ReplyRule],
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            rules: &DEFAULT_RULES,
        }
    }
}

impl RuleTable {
    /// Build a table over a static rule list.
    pub const fn new(rules: &'static [ReplyRule]) -> Self {
        Self { rules }
    }

    /// All rules in evaluation order.
    pub fn rules(&self) -> &'static [ReplyRule] {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The first rule whose trigger occurs in `text`, if any.
    pub fn find(&self, text: &str) -> Option<&'static ReplyRule> {
        let lowered = text.to_lowercase();
        self.rules.iter().find(|r| r.matches_lowercase(&lowered))
    }

    /// The reply for `text`, or [`FALLBACK_REPLY`] when no rule matches.
    pub fn reply_for(&self, text: &str) -> &'static str {
        self.find(text).map(|r| r.reply).unwrap_or(FALLBACK_REPLY)
    }
}
