//! # Navigation Gate
//!
//! Chooses which of exactly two screen trees is mounted, as a pure
//! function of the session store's state. Recomputed on every observed
//! store change; holds no state of its own beyond the last decision.
//!
//! The gate has three states: `Initializing` until the store's hydration
//! pass has run, then `Unauthenticated` or `Authenticated` depending on
//! whether both the session and its user identity are present. There is no
//! separate loading state after hydration; screens needing a spinner
//! manage that locally.

use crate::store::{SessionState, SessionStore};

/// The two mountable top-level screen trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTree {
    /// Welcome / login / register stack.
    Auth,
    /// Home / market / search / profile tab stack.
    Tabs,
}

/// Gate state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// Store hydration has not completed yet; nothing should be mounted.
    Initializing,
    Unauthenticated,
    Authenticated,
}

impl NavState {
    /// Screen tree to mount for this state. `Initializing` mounts the
    /// auth tree, matching the pre-hydration default of a signed-out app.
    pub fn screen_tree(&self) -> ScreenTree {
        match self {
            NavState::Authenticated => ScreenTree::Tabs,
            NavState::Initializing | NavState::Unauthenticated => ScreenTree::Auth,
        }
    }
}

/// Gate predicate: `Authenticated` iff both the session and the user
/// identity are present.
pub fn evaluate(hydrated: bool, state: &SessionState) -> NavState {
    if !hydrated {
        return NavState::Initializing;
    }
    if state.is_authenticated() {
        NavState::Authenticated
    } else {
        NavState::Unauthenticated
    }
}

/// Root navigation decision point. Subscribes to the store on creation,
/// owns the last computed [`NavState`], and re-evaluates it on every
/// observed change.
pub struct RootNavigation {
    store: SessionStore,
    changes: async_channel::Receiver<SessionState>,
    current: NavState,
}

impl RootNavigation {
    pub fn new(store: SessionStore) -> Self {
        let changes = store.subscribe();
        let current = evaluate(store.is_hydrated(), &store.current());
        Self {
            store,
            changes,
            current,
        }
    }

    /// Last computed state.
    pub fn current(&self) -> NavState {
        self.current
    }

    /// Screen tree for the last computed state.
    pub fn mounted_tree(&self) -> ScreenTree {
        self.current.screen_tree()
    }

    /// Wait for the next store change, then re-evaluate. Resolves
    /// immediately when changes are already queued.
    pub async fn changed(&mut self) -> NavState {
        // A closed channel means the store is gone; refresh still reports
        // the last reachable state.
        let _ = self.changes.recv().await;
        self.refresh()
    }

    /// Drain queued change notifications and re-evaluate against the
    /// store's latest state.
    pub fn refresh(&mut self) -> NavState {
        while self.changes.try_recv().is_ok() {}
        let next = evaluate(self.store.is_hydrated(), &self.store.current());
        if next != self.current {
            tracing::info!(from = ?self.current, to = ?next, "Navigation gate transition");
            self.current = next;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::persist::MemoryStore;
    use chrono::TimeZone;
    use shared::{Session, UserIdentity};

    fn identity() -> UserIdentity {
        UserIdentity {
            id: "u-1".to_string(),
            email: "alice@example.com".to_string(),
            created_at: chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn session() -> Session {
        Session {
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
            expires_at: 1_900_000_000,
            user: identity(),
        }
    }

    #[test]
    fn authenticated_iff_session_and_user_present() {
        let both = SessionState {
            session: Some(session()),
            user: Some(identity()),
        };
        let session_only = SessionState {
            session: Some(session()),
            user: None,
        };
        let user_only = SessionState {
            session: None,
            user: Some(identity()),
        };
        let neither = SessionState::default();

        assert_eq!(evaluate(true, &both), NavState::Authenticated);
        assert_eq!(evaluate(true, &session_only), NavState::Unauthenticated);
        assert_eq!(evaluate(true, &user_only), NavState::Unauthenticated);
        assert_eq!(evaluate(true, &neither), NavState::Unauthenticated);
    }

    #[test]
    fn initializing_until_hydrated() {
        let store = SessionStore::new(Box::new(MemoryStore::default()));
        let mut nav = RootNavigation::new(store.clone());
        assert_eq!(nav.current(), NavState::Initializing);
        assert_eq!(nav.mounted_tree(), ScreenTree::Auth);

        store.hydrate();
        assert_eq!(nav.refresh(), NavState::Unauthenticated);
    }

    #[test]
    fn sign_in_then_sign_out_swaps_trees() {
        let store = SessionStore::new(Box::new(MemoryStore::default()));
        store.hydrate();
        let mut nav = RootNavigation::new(store.clone());
        assert_eq!(nav.current(), NavState::Unauthenticated);

        store.set_identity(Some(session()), Some(identity()));
        assert_eq!(nav.refresh(), NavState::Authenticated);
        assert_eq!(nav.mounted_tree(), ScreenTree::Tabs);

        store.clear();
        assert_eq!(nav.refresh(), NavState::Unauthenticated);
        assert_eq!(nav.mounted_tree(), ScreenTree::Auth);
    }

    #[tokio::test]
    async fn changed_wakes_on_store_mutation() {
        let store = SessionStore::new(Box::new(MemoryStore::default()));
        store.hydrate();
        let mut nav = RootNavigation::new(store.clone());

        store.set_identity(Some(session()), Some(identity()));
        assert_eq!(nav.changed().await, NavState::Authenticated);

        store.clear();
        assert_eq!(nav.changed().await, NavState::Unauthenticated);
    }

    #[test]
    fn refresh_drains_queued_notifications() {
        let store = SessionStore::new(Box::new(MemoryStore::default()));
        store.hydrate();
        let mut nav = RootNavigation::new(store.clone());

        // Several mutations between evaluations; the latest state wins.
        store.set_identity(Some(session()), Some(identity()));
        store.clear();
        store.set_identity(Some(session()), Some(identity()));

        assert_eq!(nav.refresh(), NavState::Authenticated);
        assert_eq!(nav.refresh(), NavState::Authenticated);
    }
}
