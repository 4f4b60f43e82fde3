//! Inbound event contract.

use serde::{Deserialize, Serialize};

/// One parsed webhook event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Stable user identifier from the chat platform.
    pub external_id: String,
    /// Raw message text (button presses arrive as text too).
    pub utterance: String,
    /// Structured option payload, when the platform provides one
    /// alongside the text (e.g. a button's value field).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option: Option<String>,
}

impl InboundEvent {
    pub fn new(external_id: impl Into<String>, utterance: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            utterance: utterance.into(),
            selected_option: None,
        }
    }

    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.selected_option = Some(option.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_is_omitted_when_absent() {
        let event = InboundEvent::new("u1", "전투");
        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("selected_option"));
    }

    #[test]
    fn test_roundtrip_with_option() {
        let event = InboundEvent::new("u1", "전투 보통").with_option("NORMAL");
        let json = serde_json::to_string(&event).unwrap();
        let parsed: InboundEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
        assert_eq!(parsed.selected_option.as_deref(), Some("NORMAL"));
    }
}
