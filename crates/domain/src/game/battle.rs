//! Battle resolution rules.

use crate::entities::User;
use crate::value_objects::{BattleOutcome, Difficulty};

/// Resolve a battle for `user` at `difficulty` given a percentile roll.
///
/// `roll` must be in `1..=100`; success iff `roll <= tier percent`.
/// Failure costs nothing - the reward is simply forfeit.
pub fn resolve(user: &User, difficulty: Difficulty, roll: i64) -> BattleOutcome {
    debug_assert!((1..=100).contains(&roll));

    let success = roll <= difficulty.success_percent();
    let gold_delta = if success {
        difficulty.gold_gain(user.weapon_level)
    } else {
        0
    };
    let new_level = user.level.max(User::derived_level(user.gold + gold_delta));

    BattleOutcome {
        difficulty,
        success,
        gold_delta,
        new_level,
        leveled_up: new_level > user.level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user_with(gold: i64, weapon_level: i64) -> User {
        let mut user = User::new("u", Utc::now());
        user.gold = gold;
        user.weapon_level = weapon_level;
        user
    }

    #[test]
    fn test_roll_at_percent_succeeds() {
        let user = user_with(100, 0);
        let outcome = resolve(&user, Difficulty::Normal, 50);
        assert!(outcome.success);
        assert_eq!(outcome.gold_delta, 20);
    }

    #[test]
    fn test_roll_above_percent_fails() {
        let user = user_with(100, 0);
        let outcome = resolve(&user, Difficulty::Normal, 51);
        assert!(!outcome.success);
        assert_eq!(outcome.gold_delta, 0);
        assert_eq!(outcome.new_level, 1);
    }

    #[test]
    fn test_weapon_level_scales_reward() {
        let user = user_with(100, 4);
        let outcome = resolve(&user, Difficulty::Hard, 1);
        assert!(outcome.success);
        assert_eq!(outcome.gold_delta, 35 + 4 * 3);
    }

    #[test]
    fn test_level_up_detected() {
        let user = user_with(190, 0);
        let outcome = resolve(&user, Difficulty::Normal, 10);
        assert_eq!(outcome.new_level, 2);
        assert!(outcome.leveled_up);
    }

    #[test]
    fn test_hard_boundary() {
        let user = user_with(0, 0);
        assert!(resolve(&user, Difficulty::Hard, 20).success);
        assert!(!resolve(&user, Difficulty::Hard, 21).success);
    }
}
