//! Reply templates.
//!
//! Every user-visible message lives here, so the use cases stay free of
//! string formatting and tests can assert on one place.

use idlebot_domain::game::enhance;
use idlebot_domain::{BattleOutcome, Difficulty, EnhanceOutcome, User};
use idlebot_shared::{QuickReply, Reply};

/// Command list, answered from any state.
pub fn help() -> Reply {
    Reply::text(
        "명령어:\n\
         - /내정보\n\
         - 전투\n\
         - /강화\n\
         - /도움",
    )
}

/// Info card, answered from any state.
pub fn info_card(user: &User) -> Reply {
    Reply::text(format!(
        "📌 내정보\n레벨: {}\n골드: {}\n무기강화: +{}",
        user.level, user.gold, user.weapon_level
    ))
}

fn difficulty_buttons() -> Vec<QuickReply> {
    Difficulty::all()
        .iter()
        .map(|d| QuickReply::new(d.label(), format!("전투 {}", d.label())))
        .collect()
}

/// Difficulty selection prompt after "전투".
pub fn difficulty_prompt() -> Reply {
    Reply::with_quick_replies("난이도를 선택해주세요.", difficulty_buttons())
}

/// Guidance while a difficulty choice is pending, re-offering the buttons.
pub fn difficulty_guidance() -> Reply {
    Reply::with_quick_replies("난이도를 버튼으로 선택해주세요.", difficulty_buttons())
}

/// Difficulty select arrived with no battle in progress.
pub fn no_battle_pending() -> Reply {
    Reply::text("시작한 전투가 없어. '전투'를 입력해줘.")
}

/// Battle result, rendered against the already-updated record.
pub fn battle_result(outcome: &BattleOutcome, user: &User) -> Reply {
    if outcome.success {
        let mut text = format!(
            "⚔️ {} 전투 성공!\n+{} 골드\n현재 골드: {}",
            outcome.difficulty.label(),
            outcome.gold_delta,
            user.gold
        );
        if outcome.leveled_up {
            text.push_str(&format!("\n🎉 레벨 업! Lv.{}", user.level));
        }
        Reply::text(text)
    } else {
        Reply::text(format!(
            "💥 {} 전투 실패…\n골드를 얻지 못했어.\n현재 골드: {}",
            outcome.difficulty.label(),
            user.gold
        ))
    }
}

fn confirm_button() -> Vec<QuickReply> {
    vec![QuickReply::new("강화 확정", "강화 확정")]
}

/// Enhancement quote with the confirm button.
pub fn enhance_quote(user: &User, cost: i64) -> Reply {
    Reply::with_quick_replies(
        format!(
            "🔨 무기 강화 (+{} → +{})\n비용: {} 골드\n성공률: {}%\n진행할까?",
            user.weapon_level,
            user.weapon_level + 1,
            cost,
            enhance::success_percent(user.weapon_level)
        ),
        confirm_button(),
    )
}

/// Not enough gold for the quoted enhancement.
pub fn enhance_shortage(user: &User, cost: i64) -> Reply {
    Reply::text(format!(
        "💸 골드 부족!\n강화 비용: {}\n현재 골드: {}",
        cost, user.gold
    ))
}

/// Guidance while an enhancement confirmation is pending.
pub fn enhance_guidance() -> Reply {
    Reply::with_quick_replies(
        "강화가 대기 중이야. 버튼으로 확정해줘.",
        confirm_button(),
    )
}

/// Confirmation arrived with no enhancement in progress.
pub fn no_enhance_pending() -> Reply {
    Reply::text("진행 중인 강화가 없어. '/강화'를 입력해줘.")
}

/// Enhancement result, rendered against the already-updated record.
pub fn enhance_result(outcome: &EnhanceOutcome, user: &User) -> Reply {
    if outcome.success {
        Reply::text(format!(
            "✨ 강화 성공! (+{})\n(성공률 {}%, 비용 {})\n남은 골드: {}",
            outcome.new_level, outcome.success_percent, outcome.gold_spent, user.gold
        ))
    } else {
        Reply::text(format!(
            "💥 강화 실패…\n(성공률 {}%, 비용 {})\n남은 골드: {}",
            outcome.success_percent, outcome.gold_spent, user.gold
        ))
    }
}

/// Unrecognized command while idle.
pub fn unknown_command() -> Reply {
    Reply::text("모르는 명령어야. /도움 을 입력해봐.")
}

/// Generic failure reply when storage is unreachable.
pub fn storage_failure() -> Reply {
    Reply::text("⚠️ 지금은 요청을 처리할 수 없어. 잠시 후 다시 시도해줘.")
}
