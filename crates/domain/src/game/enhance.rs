//! Enhancement resolution rules.
//!
//! Cost and success rate both follow the weapon level: each level makes
//! the next attempt 25 gold dearer and 10 points less likely, with the
//! rate floored at 10%. A failed attempt keeps the weapon level and the
//! item; only the gold is gone.

use crate::entities::User;
use crate::value_objects::EnhanceOutcome;

/// Gold cost to attempt an enhancement at the given weapon level.
pub fn cost(weapon_level: i64) -> i64 {
    50 + weapon_level * 25
}

/// Success chance in whole percent, floored at 10.
pub fn success_percent(weapon_level: i64) -> i64 {
    (70 - weapon_level * 10).max(10)
}

/// Resolve a confirmed enhancement given a percentile roll.
///
/// `quoted_cost` is the cost carried in the pending context, so the user
/// is charged what they confirmed even if the record changed meanwhile.
pub fn resolve(user: &User, quoted_cost: i64, roll: i64) -> EnhanceOutcome {
    debug_assert!((1..=100).contains(&roll));

    let percent = success_percent(user.weapon_level);
    let success = roll <= percent;

    EnhanceOutcome {
        prior_level: user.weapon_level,
        new_level: if success {
            user.weapon_level + 1
        } else {
            user.weapon_level
        },
        success,
        gold_spent: quoted_cost,
        success_percent: percent,
    }
}
