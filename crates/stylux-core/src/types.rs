use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::StyluxError;

// =============================================================================
// Messages
// =============================================================================

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// Typed by the person using the chat.
    User,
    /// Produced by a reply resolver.
    Bot,
}

/// A single entry in the conversation log.
///
/// Messages are immutable once created; the log only ever appends them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    sender: Sender,
    text: String,
    /// Client-side wall-clock time, e.g. `3:04:05 PM`.
    timestamp: String,
}

impl Message {
    /// Create a message stamped with the current local time.
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self::with_timestamp(sender, text, format_local_time(Local::now()))
    }

    /// Create a user message stamped now.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// Create a bot message stamped now.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }

    /// Create a message with an explicit timestamp string.
    pub fn with_timestamp(
        sender: Sender,
        text: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

/// Format a local time the way the chat transcript displays it.
pub fn format_local_time(time: DateTime<Local>) -> String {
    time.format("%-I:%M:%S %p").to_string()
}

// =============================================================================
// Navigation
// =============================================================================

/// The fixed set of navigation targets the front end switches between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Landing page.
    Home,
    /// Chat screen reached from "Try for free".
    Try,
    Login,
    SignUp,
    /// Target of the landing page "Generate" button.
    GeneratedPage,
    /// Messages screen with the recent-queries menu.
    Messages,
}

impl Route {
    /// Every route, in navigation-menu order.
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Try,
        Route::Login,
        Route::SignUp,
        Route::GeneratedPage,
        Route::Messages,
    ];

    /// The URL path for this route.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Try => "/try",
            Route::Login => "/login",
            Route::SignUp => "/sign-up",
            Route::GeneratedPage => "/generated-page",
            Route::Messages => "/messages",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = StyluxError;

    /// Parse a path. A single trailing slash is tolerated (`/try/`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = if s.len() > 1 {
            s.strip_suffix('/').unwrap_or(s)
        } else {
            s
        };
        Route::ALL
            .into_iter()
            .find(|r| r.path() == trimmed)
            .ok_or_else(|| StyluxError::UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_message_constructors() {
        let user = Message::user("hi");
        assert!(user.is_user());
        assert!(!user.is_bot());
        assert_eq!(user.text(), "hi");
        assert!(!user.timestamp().is_empty());

        let bot = Message::bot("hello");
        assert_eq!(bot.sender(), Sender::Bot);
    }

    #[test]
    fn test_format_local_time() {
        let t = Local.with_ymd_and_hms(2025, 3, 1, 15, 4, 5).unwrap();
        assert_eq!(format_local_time(t), "3:04:05 PM");

        let t = Local.with_ymd_and_hms(2025, 3, 1, 0, 30, 0).unwrap();
        assert_eq!(format_local_time(t), "12:30:00 AM");
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::with_timestamp(Sender::Bot, "ok", "1:00:00 PM");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["sender"], "bot");
        assert_eq!(json["text"], "ok");
        assert_eq!(json["timestamp"], "1:00:00 PM");

        let back: Message = serde_json::from_value(json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_route_paths_parse_back() {
        for route in Route::ALL {
            assert_eq!(route.path().parse::<Route>().unwrap(), route);
        }
    }

    #[test]
    fn test_route_trailing_slash() {
        assert_eq!("/try/".parse::<Route>().unwrap(), Route::Try);
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home);
    }

    #[test]
    fn test_unknown_route() {
        let err = "/admin".parse::<Route>().unwrap_err();
        assert!(matches!(err, StyluxError::UnknownRoute(ref p) if p == "/admin"));
    }

    #[test]
    fn test_route_display() {
        assert_eq!(Route::SignUp.to_string(), "/sign-up");
        assert_eq!(Route::GeneratedPage.to_string(), "/generated-page");
    }
}
