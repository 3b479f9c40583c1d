use dashmap::DashMap;

use super::SessionStore;
use crate::api::{ApiError, ApiResult};
use crate::session::Session;

/// Process-local store; sessions vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: DashMap<String, Session>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn save(&self, session: &Session) -> ApiResult<()> {
        self.sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    fn load(&self, id: &str) -> ApiResult<Session> {
        self.sessions
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    fn update(&self, id: &str, apply: &mut dyn FnMut(&mut Session)) -> ApiResult<Session> {
        // The shard stays write-locked until `entry` drops, so a delete waits for us.
        let mut entry = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        apply(entry.value_mut());
        Ok(entry.value().clone())
    }

    fn delete(&self, id: &str) -> ApiResult<()> {
        self.sessions
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }
}
