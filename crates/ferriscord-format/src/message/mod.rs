//! Chat message entities as delivered by the message service.

pub mod limits;
pub mod reactions;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::segment::{Segment, segment};

pub use limits::{LengthStatus, MessageLimits};
pub use reactions::{QUICK_REACTIONS, Reaction, Reactions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Author {
    /// Avatar fallback: first letter of up to two name parts, upper-cased.
    ///
    /// `"Alice Johnson"` gives `"AJ"`, `"bob"` gives `"B"`.
    pub fn initials(&self) -> String {
        self.username
            .split(' ')
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    /// Raw body, markup included.
    pub content: String,
    pub author: Author,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// RFC 3339 timestamp.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<String>,
    #[serde(default)]
    pub reactions: Reactions,
}

impl Message {
    pub fn is_own(&self, current_user: &str) -> bool {
        self.author.id == current_user
    }

    pub fn is_edited(&self) -> bool {
        self.edited_at.is_some()
    }

    /// `HH:MM` in UTC, or the raw timestamp when it does not parse.
    pub fn time_label(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.timestamp) {
            Ok(ts) => ts.with_timezone(&Utc).format("%H:%M").to_string(),
            Err(e) => {
                log::debug!("message {}: unparsable timestamp: {e}", self.id);
                self.timestamp.clone()
            }
        }
    }

    pub fn segments(&self) -> Vec<Segment> {
        segment(&self.content)
    }
}
