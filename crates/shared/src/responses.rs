//! Outbound reply contract.
//!
//! Platform-agnostic reply payload; the web layer turns this into the
//! chat platform's template JSON (simple text plus optional quick-reply
//! buttons).

use serde::{Deserialize, Serialize};

/// A selectable option offered for the next turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    /// Button caption shown to the user.
    pub label: String,
    /// Message text sent back when the button is pressed.
    pub message: String,
}

impl QuickReply {
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
        }
    }
}

/// Reply returned for every inbound event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quick_replies: Vec<QuickReply>,
}

impl Reply {
    /// Plain text reply.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quick_replies: Vec::new(),
        }
    }

    /// Text reply with quick-reply buttons for the next turn.
    pub fn with_quick_replies(
        text: impl Into<String>,
        quick_replies: Vec<QuickReply>,
    ) -> Self {
        Self {
            text: text.into(),
            quick_replies,
        }
    }

    pub fn has_options(&self) -> bool {
        !self.quick_replies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_reply_has_no_options() {
        let reply = Reply::text("안녕");
        assert!(!reply.has_options());
        let json = serde_json::to_string(&reply).unwrap();
        assert!(!json.contains("quick_replies"));
    }

    #[test]
    fn test_quick_replies_serialize() {
        let reply = Reply::with_quick_replies(
            "난이도를 선택해주세요.",
            vec![QuickReply::new("쉬움", "전투 쉬움")],
        );
        assert!(reply.has_options());
        let json = serde_json::to_string(&reply).unwrap();
        assert!(json.contains("전투 쉬움"));
        let parsed: Reply = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, reply);
    }
}
