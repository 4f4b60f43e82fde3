//! Event dispatch - the turn state machine.
//!
//! One inbound event in, one reply out, always. The dispatcher acquires
//! the per-user critical section, loads (or creates) the record,
//! validates the command against the pending state, and routes to the
//! matching use case. Commands that do not fit the current state are
//! answered with guidance and leave the state untouched; the machine is
//! never silently reset. Storage failures surface as a generic failure
//! reply, never as an unanswered event.

use std::sync::Arc;

use idlebot_domain::{Command, Difficulty, PendingState};
use idlebot_shared::{InboundEvent, Reply};
use tracing::{debug, error};

use crate::infrastructure::ports::RepoError;
use crate::stores::UserStore;
use crate::use_cases::replies;
use crate::use_cases::{ResolveBattle, ResolveEnhance, StartBattle, StartEnhance};

/// Top-level event handler.
pub struct HandleEvent {
    store: Arc<UserStore>,
    start_battle: Arc<StartBattle>,
    resolve_battle: Arc<ResolveBattle>,
    start_enhance: Arc<StartEnhance>,
    resolve_enhance: Arc<ResolveEnhance>,
}

impl HandleEvent {
    pub fn new(
        store: Arc<UserStore>,
        start_battle: Arc<StartBattle>,
        resolve_battle: Arc<ResolveBattle>,
        start_enhance: Arc<StartEnhance>,
        resolve_enhance: Arc<ResolveEnhance>,
    ) -> Self {
        Self {
            store,
            start_battle,
            resolve_battle,
            start_enhance,
            resolve_enhance,
        }
    }

    /// Handle one inbound event. Infallible at this boundary: storage
    /// errors are logged and mapped to the generic failure reply.
    pub async fn execute(&self, event: &InboundEvent) -> Reply {
        match self.dispatch(event).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(
                    external_id = %event.external_id,
                    error = %e,
                    "storage failure while handling event"
                );
                replies::storage_failure()
            }
        }
    }

    async fn dispatch(&self, event: &InboundEvent) -> Result<Reply, RepoError> {
        // Per-user critical section across the whole read-modify-write
        // cycle; events for other users proceed independently.
        let _guard = self.store.lock(&event.external_id).await;

        let mut user = self.store.get_or_create(&event.external_id).await?;
        let command = command_for(event);
        debug!(
            external_id = %event.external_id,
            ?command,
            pending = ?user.pending,
            "dispatching event"
        );

        match (user.pending, command) {
            // Read-only commands bypass the state machine.
            (_, Command::Info) => Ok(replies::info_card(&user)),
            (_, Command::Help) => Ok(replies::help()),

            (PendingState::Idle, Command::Battle) => {
                self.start_battle.execute(&mut user).await
            }
            (PendingState::Idle, Command::Enhance) => {
                self.start_enhance.execute(&mut user).await
            }
            (PendingState::Idle, Command::DifficultySelect(_)) => {
                Ok(replies::no_battle_pending())
            }
            (PendingState::Idle, Command::EnhanceConfirm) => {
                Ok(replies::no_enhance_pending())
            }
            (PendingState::Idle, Command::Unknown(_)) => Ok(replies::unknown_command()),

            (PendingState::AwaitingDifficulty, Command::DifficultySelect(difficulty)) => {
                self.resolve_battle.execute(&mut user, difficulty).await
            }
            (PendingState::AwaitingDifficulty, _) => Ok(replies::difficulty_guidance()),

            (PendingState::AwaitingEnhanceConfirm { cost }, Command::EnhanceConfirm) => {
                self.resolve_enhance.execute(&mut user, cost).await
            }
            (PendingState::AwaitingEnhanceConfirm { .. }, _) => {
                Ok(replies::enhance_guidance())
            }
        }
    }
}

/// Derive the command for an event, preferring a structured option
/// payload over the raw text when the platform supplies one.
fn command_for(event: &InboundEvent) -> Command {
    if let Some(option) = &event.selected_option {
        if let Ok(difficulty) = option.parse::<Difficulty>() {
            return Command::DifficultySelect(difficulty);
        }
    }
    Command::parse(&event.utterance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_prefers_selected_option() {
        let event = InboundEvent::new("u", "아무거나").with_option("NORMAL");
        assert_eq!(
            command_for(&event),
            Command::DifficultySelect(Difficulty::Normal)
        );
    }

    #[test]
    fn test_unparseable_option_falls_back_to_text() {
        let event = InboundEvent::new("u", "전투").with_option("???");
        assert_eq!(command_for(&event), Command::Battle);
    }

    #[test]
    fn test_plain_text_parses_as_command() {
        let event = InboundEvent::new("u", "전투 어려움");
        assert_eq!(
            command_for(&event),
            Command::DifficultySelect(Difficulty::Hard)
        );
    }
}
