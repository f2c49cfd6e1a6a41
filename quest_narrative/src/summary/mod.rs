//! Summary output types and length limits.

use serde::{Deserialize, Serialize};

/// Maximum characters in a title.
pub const TITLE_MAX_CHARS: usize = 32;
/// Maximum characters in a line.
pub const LINE_MAX_CHARS: usize = 140;
/// Maximum characters in share text.
pub const SHARE_TEXT_MAX_CHARS: usize = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Acknowledges something the player did.
    Warm,
    /// Neutral context with no pressure.
    Calm,
}

/// A single player-facing summary of an event batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeSummary {
    pub tone: Tone,
    pub title: String,
    pub line: String,
    /// Only present for completed quests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_text: Option<String>,
}

impl NarrativeSummary {
    /// Build a summary, cutting each field down to its cap.
    pub fn new(tone: Tone, title: &str, line: &str) -> Self {
        Self {
            tone,
            title: truncate_chars(title, TITLE_MAX_CHARS),
            line: truncate_chars(line, LINE_MAX_CHARS),
            share_text: None,
        }
    }

    pub fn with_share_text(mut self, share_text: &str) -> Self {
        self.share_text = Some(truncate_chars(share_text, SHARE_TEXT_MAX_CHARS));
        self
    }
}

/// Keep at most `max` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}
