//! Application composition.

use std::sync::Arc;

use idlebot_shared::{InboundEvent, Reply};

use crate::infrastructure::ports::{ClockPort, RandomPort, UserRepo};
use crate::stores::UserStore;
use crate::use_cases::{
    HandleEvent, ResolveBattle, ResolveEnhance, StartBattle, StartEnhance,
};

/// Wired application: repository + clock + random in, event handler out.
pub struct App {
    store: Arc<UserStore>,
    handle_event: HandleEvent,
}

impl App {
    pub fn new(
        repo: Arc<dyn UserRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let store = Arc::new(UserStore::new(repo, clock));

        let start_battle = Arc::new(StartBattle::new(store.clone()));
        let resolve_battle = Arc::new(ResolveBattle::new(store.clone(), random.clone()));
        let start_enhance = Arc::new(StartEnhance::new(store.clone()));
        let resolve_enhance = Arc::new(ResolveEnhance::new(store.clone(), random));

        let handle_event = HandleEvent::new(
            store.clone(),
            start_battle,
            resolve_battle,
            start_enhance,
            resolve_enhance,
        );

        Self {
            store,
            handle_event,
        }
    }

    /// Handle one webhook event and produce its reply.
    pub async fn handle(&self, event: &InboundEvent) -> Reply {
        self.handle_event.execute(event).await
    }

    /// Store access, mainly for integration tests and tooling.
    pub fn store(&self) -> &Arc<UserStore> {
        &self.store
    }
}
