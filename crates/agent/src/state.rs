//! In-memory conversation state store
//!
//! One entry per user id, each behind its own mutex so concurrent turns for
//! the same user serialize without blocking unrelated users. Updates go
//! through [`StateStore::with_state`], which holds the per-user lock for the
//! whole read-modify-write.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use sakina_core::ConversationState;

#[derive(Default)]
pub struct StateStore {
    states: DashMap<String, Arc<Mutex<ConversationState>>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, user_id: &str) -> Arc<Mutex<ConversationState>> {
        self.states
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(ConversationState::new())))
            .clone()
    }

    /// Run `f` against the user's state under its lock
    pub fn with_state<T>(&self, user_id: &str, f: impl FnOnce(&mut ConversationState) -> T) -> T {
        let entry = self.entry(user_id);
        let mut state = entry.lock();
        f(&mut state)
    }

    /// Snapshot of the user's current state, if any
    pub fn get(&self, user_id: &str) -> Option<ConversationState> {
        self.states.get(user_id).map(|e| e.lock().clone())
    }

    /// Drop a user's state entirely
    pub fn reset(&self, user_id: &str) -> bool {
        self.states.remove(user_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
