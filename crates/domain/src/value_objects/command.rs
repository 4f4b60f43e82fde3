//! Command value object - parse of a raw chat utterance.
//!
//! The platform delivers button presses as plain message text, so button
//! payloads ("전투 쉬움", "강화 확정") parse exactly like typed commands.
//! Matching is exact on the trimmed utterance; the slash is optional
//! where users habitually drop it.

use std::str::FromStr;

use crate::value_objects::Difficulty;

/// A recognized (or unrecognized) chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// "전투" - start a battle, prompting for a difficulty.
    Battle,
    /// "전투 <난이도>" - difficulty chosen from the battle prompt.
    DifficultySelect(Difficulty),
    /// "/강화" - ask for an enhancement quote.
    Enhance,
    /// "강화 확정" - accept the quoted enhancement.
    EnhanceConfirm,
    /// "/내정보" - read-only info card.
    Info,
    /// "/도움" - read-only command list.
    Help,
    /// Anything else, kept verbatim for logging.
    Unknown(String),
}

impl Command {
    /// Parse a raw utterance into a command.
    pub fn parse(utterance: &str) -> Self {
        let msg = utterance.trim();

        if let Some(rest) = msg.strip_prefix("전투 ") {
            return match Difficulty::from_str(rest) {
                Ok(difficulty) => Self::DifficultySelect(difficulty),
                Err(_) => Self::Unknown(msg.to_string()),
            };
        }

        match msg {
            "전투" | "/전투" => Self::Battle,
            "강화" | "/강화" => Self::Enhance,
            "강화 확정" => Self::EnhanceConfirm,
            "내정보" | "/내정보" | "/me" => Self::Info,
            "도움" | "/도움" | "help" | "/help" => Self::Help,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// True for commands that never touch the pending state.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::Info | Self::Help)
    }
}
