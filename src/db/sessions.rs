use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::itinerary::Itinerary;
use crate::models::session::PlanningSession;

/// In-process store for planning sessions. Itineraries only live for the
/// duration of one planning session, so there is no database behind this:
/// a map guarded by an RwLock, swept on insert.
pub struct SessionStore {
    ttl_minutes: i64,
    sessions: RwLock<HashMap<Uuid, PlanningSession>>,
}

impl SessionStore {
    pub fn new(ttl_minutes: i64) -> Self {
        println!("SessionStore initialized with TTL of {} minutes", ttl_minutes);
        Self {
            ttl_minutes,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a fresh session around a newly generated itinerary.
    pub fn insert(&self, itinerary: Itinerary) -> PlanningSession {
        let session = PlanningSession::new(itinerary);
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let cutoff = Utc::now() - Duration::minutes(self.ttl_minutes);
        sessions.retain(|_, s| s.created_at > cutoff);
        sessions.insert(session.id, session.clone());
        session
    }

    pub fn get(&self, id: &Uuid) -> Option<PlanningSession> {
        let sessions = self.sessions.read().expect("session lock poisoned");
        sessions.get(id).cloned()
    }

    /// Flip the unlocked flag after a confirmed payment. Returns false when
    /// the session is unknown (expired or never existed).
    pub fn unlock(&self, id: &Uuid) -> bool {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        match sessions.get_mut(id) {
            Some(session) => {
                session.unlocked = true;
                true
            }
            None => false,
        }
    }

    /// Discard a session ("Start Over"). Returns false when it was not there.
    pub fn remove(&self, id: &Uuid) -> bool {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().expect("session lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::itinerary::Itinerary;

    fn empty_itinerary() -> Itinerary {
        Itinerary {
            trip_title: "Test Trip".to_string(),
            summary: "A test summary".to_string(),
            daily_plan: vec![],
        }
    }

    #[test]
    fn test_insert_and_get() {
        let store = SessionStore::new(60);
        let session = store.insert(empty_itinerary());

        let fetched = store.get(&session.id).expect("session should exist");
        assert_eq!(fetched.id, session.id);
        assert!(!fetched.unlocked);
    }

    #[test]
    fn test_unlock_flips_flag_once() {
        let store = SessionStore::new(60);
        let session = store.insert(empty_itinerary());

        assert!(store.unlock(&session.id));
        assert!(store.get(&session.id).unwrap().unlocked);

        // Unknown session ids never unlock anything.
        assert!(!store.unlock(&Uuid::new_v4()));
    }

    #[test]
    fn test_insert_sweeps_expired_sessions() {
        // Zero TTL makes every prior session expired at the next insert.
        let store = SessionStore::new(0);
        let first = store.insert(empty_itinerary());
        let second = store.insert(empty_itinerary());

        assert!(store.get(&first.id).is_none());
        assert!(store.get(&second.id).is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_live_sessions_survive_the_sweep() {
        let store = SessionStore::new(60);
        let first = store.insert(empty_itinerary());
        let second = store.insert(empty_itinerary());

        assert!(store.get(&first.id).is_some());
        assert!(store.get(&second.id).is_some());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_discards_session() {
        let store = SessionStore::new(60);
        let session = store.insert(empty_itinerary());

        assert!(store.remove(&session.id));
        assert!(store.get(&session.id).is_none());
        assert!(!store.remove(&session.id));
    }
}
