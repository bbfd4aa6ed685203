pub mod templates;

use serde::Serialize;

/// Formatted chat message. `text` may carry literal `#{i}` placeholder tokens;
/// they are never substituted here — `urls[i]` holds the link the downstream
/// shortener replaces token `i` with, in the same order as the placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
}

impl Message {
    pub fn text_only(text: String) -> Self {
        Self {
            text,
            urls: Vec::new(),
        }
    }
}
