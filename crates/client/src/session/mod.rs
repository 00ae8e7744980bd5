//! Session - the client-held authentication state
//!
//! One explicit object owns the bearer token and the cached current-user
//! identity. Controllers and adapters receive it by reference (it is cheap
//! to clone; clones share state) instead of reaching into an ambient
//! global. "Session changed" is a push contract: subscribers get a
//! snapshot whenever the token or user changes, which is how a router
//! binding learns it must navigate to the login view after a 401.
//!
//! The token is the only value persisted, under a fixed storage key, so a
//! page reload can restore authentication without a login round-trip. The
//! active character is cached in memory only; after a reload the backend's
//! `is_active` flag on the character list is authoritative.

use std::sync::{Arc, Mutex};

use tracing::debug;

use nocturne_domain::CharacterId;
use nocturne_protocol::UserData;

use crate::ports::outbound::{storage_keys, StorageProvider};

/// Point-in-time view of the session delivered to subscribers
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub user: Option<UserData>,
    pub active_character: Option<CharacterId>,
}

#[derive(Default)]
struct SessionState {
    token: Option<String>,
    user: Option<UserData>,
    active_character: Option<CharacterId>,
}

type Subscriber = Box<dyn FnMut(SessionSnapshot) + Send + 'static>;

// Object-safe mirror of StorageProvider so Session is not generic over the
// storage type (the gateway stores Session without type parameters).
trait StorageDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

impl<S: StorageProvider> StorageDyn for S {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value);
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

/// Shared authentication session. Clones share state.
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn StorageDyn>,
    state: Arc<Mutex<SessionState>>,
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
}

impl Session {
    /// Create a session, restoring any persisted token.
    pub fn new(storage: impl StorageProvider) -> Self {
        let token = storage.load(storage_keys::AUTH_TOKEN);
        Self {
            storage: Arc::new(storage),
            state: Arc::new(Mutex::new(SessionState {
                token,
                ..SessionState::default()
            })),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Current bearer token, if authenticated.
    pub fn token(&self) -> Option<String> {
        self.lock_state().token.clone()
    }

    /// Cached current-user identity, if fetched.
    pub fn user(&self) -> Option<UserData> {
        self.lock_state().user.clone()
    }

    /// The character selected this session, if any.
    pub fn active_character(&self) -> Option<CharacterId> {
        self.lock_state().active_character
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock_state().token.is_some()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock_state();
        SessionSnapshot {
            authenticated: state.token.is_some(),
            user: state.user.clone(),
            active_character: state.active_character,
        }
    }

    /// Subscribe to session changes. The callback receives a snapshot on
    /// every token or user change, last write wins.
    pub fn subscribe(&self, callback: impl FnMut(SessionSnapshot) + Send + 'static) {
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(Box::new(callback));
        }
    }

    /// Store a fresh token (login/register) and persist it.
    pub fn set_token(&self, token: String) {
        self.storage.save(storage_keys::AUTH_TOKEN, &token);
        self.lock_state().token = Some(token);
        self.notify();
    }

    /// Cache the current user after `GET /auth/user` or a login response.
    pub fn set_user(&self, user: UserData) {
        self.lock_state().user = Some(user);
        self.notify();
    }

    /// Cache the selected character after a successful select call.
    pub fn set_active_character(&self, id: CharacterId) {
        self.lock_state().active_character = Some(id);
        self.notify();
    }

    /// Explicit logout: discard token, cached user, and character selection.
    pub fn clear(&self) {
        self.storage.remove(storage_keys::AUTH_TOKEN);
        {
            let mut state = self.lock_state();
            *state = SessionState::default();
        }
        self.notify();
    }

    /// Cross-cutting 401 contract: any endpoint returning 401 invalidates
    /// the whole session. Called by gateway adapters before they surface
    /// `ApiError::Unauthorized`.
    pub fn handle_unauthorized(&self) {
        debug!("received 401, discarding session");
        self.clear();
    }

    // Callbacks run with the subscriber list drained, not locked, so a
    // callback may re-enter the session (subscribe, clear) without
    // deadlocking.
    fn notify(&self) {
        let snapshot = self.snapshot();
        let mut subscribers = match self.subscribers.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(_) => return,
        };
        for subscriber in subscribers.iter_mut() {
            subscriber(snapshot.clone());
        }
        if let Ok(mut guard) = self.subscribers.lock() {
            // Keep registration order: anything subscribed during the
            // callbacks goes after the drained originals.
            subscribers.append(&mut guard);
            *guard = subscribers;
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, SessionState> {
        // Subscribers run outside this lock, so the only way to poison it
        // is a panic inside Session itself.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::MemoryStorage;
    use nocturne_domain::UserId;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn user() -> UserData {
        UserData {
            id: UserId::new(1),
            username: "selene".to_string(),
            email: None,
        }
    }

    #[test]
    fn restores_persisted_token() {
        let storage = MemoryStorage::new();
        StorageProvider::save(&storage, storage_keys::AUTH_TOKEN, "tok-123");
        let session = Session::new(storage);
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok-123"));
    }

    #[test]
    fn unauthorized_clears_token_everywhere() {
        let storage = MemoryStorage::new();
        let session = Session::new(storage.clone());
        session.set_token("tok-123".to_string());
        session.set_user(user());
        session.set_active_character(CharacterId::new(2));

        session.handle_unauthorized();

        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(session.active_character().is_none());
        assert!(StorageProvider::load(&storage, storage_keys::AUTH_TOKEN).is_none());
    }

    #[test]
    fn active_character_is_cached_until_logout() {
        let session = Session::new(MemoryStorage::new());
        assert!(session.active_character().is_none());

        session.set_active_character(CharacterId::new(4));
        assert_eq!(session.active_character(), Some(CharacterId::new(4)));
        assert_eq!(
            session.snapshot().active_character,
            Some(CharacterId::new(4))
        );

        session.clear();
        assert!(session.active_character().is_none());
    }

    #[test]
    fn subscribers_see_every_change() {
        let session = Session::new(MemoryStorage::new());
        let calls = Arc::new(AtomicU32::new(0));
        let last_auth = Arc::new(Mutex::new(None::<bool>));

        let calls_clone = Arc::clone(&calls);
        let last_clone = Arc::clone(&last_auth);
        session.subscribe(move |snapshot| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut last) = last_clone.lock() {
                *last = Some(snapshot.authenticated);
            }
        });

        session.set_token("tok".to_string());
        session.clear();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(last_auth.lock().map(|v| *v).ok().flatten(), Some(false));
    }

    #[test]
    fn clones_share_state() {
        let session = Session::new(MemoryStorage::new());
        let clone = session.clone();
        session.set_token("tok".to_string());
        assert!(clone.is_authenticated());
    }

    #[test]
    fn subscriber_may_clear_the_session_reentrantly() {
        // A router binding reacts to "authenticated" by touching the same
        // session; this must not deadlock on the subscriber list.
        let session = Session::new(MemoryStorage::new());
        let cleared = Arc::new(AtomicU32::new(0));

        let session_clone = session.clone();
        let cleared_clone = Arc::clone(&cleared);
        session.subscribe(move |snapshot| {
            if snapshot.authenticated && cleared_clone.fetch_add(1, Ordering::SeqCst) == 0 {
                session_clone.clear();
            }
        });

        session.set_token("tok".to_string());

        assert!(!session.is_authenticated());
        assert_eq!(cleared.load(Ordering::SeqCst), 1);
    }
}
