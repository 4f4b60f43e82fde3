//! Difficulty value object - battle tiers.
//!
//! Tier ordering Easy > Normal > Hard lowers the success probability and
//! raises the reward magnitude. The constants are fixed policy, not
//! configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Battle difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    /// 쉬움 - high success chance, small reward
    Easy,
    /// 보통 - even odds, medium reward
    Normal,
    /// 어려움 - low success chance, large reward
    Hard,
}

impl Difficulty {
    /// Korean display label, as shown on the selection buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "쉬움",
            Self::Normal => "보통",
            Self::Hard => "어려움",
        }
    }

    /// Success chance in whole percent.
    pub fn success_percent(&self) -> i64 {
        match self {
            Self::Easy => 80,
            Self::Normal => 50,
            Self::Hard => 20,
        }
    }

    /// Gold gained on success, scaled by the user's weapon level.
    pub fn gold_gain(&self, weapon_level: i64) -> i64 {
        match self {
            Self::Easy => 10 + weapon_level,
            Self::Normal => 20 + weapon_level * 2,
            Self::Hard => 35 + weapon_level * 3,
        }
    }

    /// All tiers, in prompt order.
    pub fn all() -> [Difficulty; 3] {
        [Self::Easy, Self::Normal, Self::Hard]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    /// Accepts the Korean button label or the English tier name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "쉬움" => Ok(Self::Easy),
            "보통" => Ok(Self::Normal),
            "어려움" => Ok(Self::Hard),
            other => match other.to_ascii_uppercase().as_str() {
                "EASY" => Ok(Self::Easy),
                "NORMAL" => Ok(Self::Normal),
                "HARD" => Ok(Self::Hard),
                _ => Err(DomainError::parse(format!("unknown difficulty: {s}"))),
            },
        }
    }
}
